//! Feed normalizers - one per upstream status schema.
//!
//! Each check binary targets exactly one schema, so the variant is
//! fixed at configuration time and never inferred from the payload.

pub mod icinga;
pub mod monit;

use crate::Item;

/// Mode of an Icinga console check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    Hosts,
    Services,
}

impl Mode {
    /// Item label used in diagnostic messages.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Hosts => "hosts",
            Mode::Services => "services",
        }
    }
}

/// Upstream schema of one check target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Monit XML status feed (`<monit><service>...`).
    Monit,
    /// Icinga CGI JSON status feed, host or service list.
    Icinga(Mode),
}

impl FeedKind {
    /// Normalize a raw response body into a list of items.
    ///
    /// Bodies that lack the expected container degrade to an empty
    /// list; the `--min` threshold is responsible for flagging that.
    pub fn normalize(self, body: &str) -> Vec<Item> {
        match self {
            FeedKind::Monit => monit::normalize(body),
            FeedKind::Icinga(mode) => icinga::normalize(body, mode),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedKind::Monit => "services",
            FeedKind::Icinga(mode) => mode.label(),
        }
    }
}
