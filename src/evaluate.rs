//! Threshold evaluation - turns a summary into a verdict and message.
//!
//! The decision ladder is strict and ordered; the first matching rule
//! wins:
//!
//! 1. timeout                                    -> CRIT
//! 2. fewer items than `--min`                   -> CRIT
//! 3. failed count at the critical level         -> CRIT
//! 4. not-monitored count at the critical level  -> CRIT
//! 5. failed count at the warning level          -> WARN
//! 6. not-monitored count at the warning level   -> WARN
//! 7. otherwise                                  -> OK

use std::fmt;

use crate::summary::Summary;

/// Outcome of one check invocation, in Nagios plugin terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl Verdict {
    /// Process exit code expected by the monitoring scheduler.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Ok => 0,
            Verdict::Warn => 1,
            Verdict::Crit => 2,
            Verdict::Unknown => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Verdict::Ok => "OK",
            Verdict::Warn => "WARN",
            Verdict::Crit => "CRIT",
            Verdict::Unknown => "UNKNOWN",
        };
        write!(f, "{tag}")
    }
}

/// Configured limits for one check invocation.
///
/// `min: None` means no minimum is enforced. The warning and critical
/// levels are inclusive lower bounds on the respective counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    pub min: Option<usize>,
    pub warn_failed: usize,
    pub crit_failed: usize,
    pub warn_not_monitored: usize,
    pub crit_not_monitored: usize,
    pub timeout_secs: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            min: None,
            warn_failed: 1,
            crit_failed: 1,
            warn_not_monitored: 1,
            crit_not_monitored: 1,
            timeout_secs: crate::config::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Apply the decision ladder to one summary.
///
/// `label` names the item kind in messages ("services" or "hosts").
/// The returned message carries the count template and, when present,
/// trailing lines listing failed and not-monitored item names.
pub fn evaluate(summary: &Summary, thresholds: &Thresholds, label: &str) -> (Verdict, String) {
    if summary.timed_out {
        return (
            Verdict::Crit,
            format!("Timeout after {}", thresholds.timeout_secs),
        );
    }

    let counts = format!(
        "{}=ok, {}=fail, {}=not monitored",
        summary.ok, summary.failed, summary.not_monitored
    );

    let (verdict, headline) = if thresholds.min.is_some_and(|min| summary.total < min) {
        (
            Verdict::Crit,
            format!("Only {} {label} found ({counts}).", summary.total),
        )
    } else if summary.failed >= thresholds.crit_failed {
        (Verdict::Crit, format!("due to status ({counts})."))
    } else if summary.not_monitored >= thresholds.crit_not_monitored {
        (Verdict::Crit, format!("due to not monitored ({counts})."))
    } else if summary.failed >= thresholds.warn_failed {
        (Verdict::Warn, format!("due to status ({counts})."))
    } else if summary.not_monitored >= thresholds.warn_not_monitored {
        (Verdict::Warn, format!("due to not monitored ({counts})."))
    } else {
        (Verdict::Ok, format!("({counts})."))
    };

    let mut message = headline;
    if !summary.failed_names.is_empty() {
        message.push_str(&format!("\nFailed: {}", summary.failed_names.join(", ")));
    }
    if !summary.not_monitored_names.is_empty() {
        message.push_str(&format!(
            "\nNot monitored: {}",
            summary.not_monitored_names.join(", ")
        ));
    }

    (verdict, message)
}
