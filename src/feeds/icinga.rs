//! Normalizer for the Icinga CGI JSON status feed.
//!
//! The console reports `{"status": {"host_status": [..]}}` in hosts
//! mode and `{"status": {"service_status": [..]}}` in services mode.
//! Status is a text field; `UP` and `OK` mean healthy, any other text
//! counts as failed. The console has no not-monitored concept.

use serde::Deserialize;
use tracing::debug;

use super::Mode;
use crate::{Item, ItemKind};

#[derive(Debug, Default, Deserialize)]
struct ConsolePayload {
    #[serde(default)]
    status: ConsoleStatus,
}

#[derive(Debug, Default, Deserialize)]
struct ConsoleStatus {
    #[serde(default)]
    host_status: Vec<ConsoleEntry>,
    #[serde(default)]
    service_status: Vec<ConsoleEntry>,
}

#[derive(Debug, Deserialize)]
struct ConsoleEntry {
    #[serde(default)]
    host: String,
    #[serde(default)]
    service: String,
    #[serde(default)]
    status: String,
}

impl ConsoleEntry {
    fn name(&self, mode: Mode) -> &str {
        match mode {
            Mode::Hosts => &self.host,
            Mode::Services => &self.service,
        }
    }
}

pub fn normalize(body: &str, mode: Mode) -> Vec<Item> {
    let payload: ConsolePayload = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!("icinga feed did not parse, treating as empty: {e}");
            return vec![];
        }
    };

    let (entries, kind) = match mode {
        Mode::Hosts => (payload.status.host_status, ItemKind::Host),
        Mode::Services => (payload.status.service_status, ItemKind::Service),
    };

    entries
        .into_iter()
        .filter(|entry| !entry.name(mode).is_empty())
        .map(|entry| Item {
            name: entry.name(mode).to_string(),
            kind,
            failed: !matches!(entry.status.as_str(), "UP" | "OK"),
            not_monitored: false,
        })
        .collect()
}
