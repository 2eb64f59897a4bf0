use std::time::Duration;

use clap::Args;
use regex::Regex;

use crate::evaluate::Thresholds;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Threshold and filter options shared by every check binary.
#[derive(Debug, Clone, Args)]
pub struct ThresholdOpts {
    /// Number of items to expect at minimum
    #[arg(long)]
    pub min: Option<usize>,

    /// Warning level for failed items
    #[arg(long, default_value_t = 1)]
    pub warn: usize,

    /// Critical level for failed items
    #[arg(long, default_value_t = 1)]
    pub crit: usize,

    /// Warning level for items that are not actively monitored
    #[arg(long = "warn-not-monitored", default_value_t = 1)]
    pub warn_not_monitored: usize,

    /// Critical level for items that are not actively monitored
    #[arg(long = "crit-not-monitored", default_value_t = 1)]
    pub crit_not_monitored: usize,

    /// Exclude items whose name matches the pattern (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<Regex>,

    /// Timeout for the HTTP request in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl ThresholdOpts {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min: self.min,
            warn_failed: self.warn,
            crit_failed: self.crit,
            warn_not_monitored: self.warn_not_monitored,
            crit_not_monitored: self.crit_not_monitored,
            timeout_secs: self.timeout,
        }
    }
}

/// HTTP endpoint options shared by every check binary.
///
/// Defaults for `--base-url` and `--status-uri` differ per binary, so
/// they stay `Option` here and each binary supplies its own fallback.
#[derive(Debug, Clone, Args)]
pub struct EndpointOpts {
    /// Base URL of the status endpoint
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Port to connect to (appended to the base URL)
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to the status output
    #[arg(long = "status-uri", value_name = "PATH")]
    pub status_uri: Option<String>,

    /// HTTP username
    #[arg(long)]
    pub username: Option<String>,

    /// HTTP password
    #[arg(long)]
    pub password: Option<String>,
}

impl EndpointOpts {
    pub fn endpoint(
        &self,
        default_base_url: &str,
        default_status_uri: &str,
        timeout_secs: u64,
    ) -> Endpoint {
        let base = self
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());
        let base = base.trim_end_matches('/').to_string();
        let uri = self
            .status_uri
            .clone()
            .unwrap_or_else(|| default_status_uri.to_string());

        let url = match self.port {
            Some(port) => format!("{base}:{port}/{uri}"),
            None => format!("{base}/{uri}"),
        };

        Endpoint {
            url,
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Fully resolved target of one check invocation.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}
