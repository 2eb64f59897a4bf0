//! Aggregation of normalized items into one summary per feed.

use regex::Regex;
use tracing::trace;

use crate::Item;

/// Aggregated counts and name lists for one fetched feed.
///
/// Built once per invocation and consumed once by the threshold
/// evaluator. When `timed_out` is set, no feed was obtained at all and
/// every other field is meaningless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
    pub not_monitored: usize,
    pub failed_names: Vec<String>,
    pub not_monitored_names: Vec<String>,
    pub timed_out: bool,
}

impl Summary {
    /// Synthetic summary for a fetch that never produced a body.
    pub fn timed_out() -> Self {
        Summary {
            timed_out: true,
            ..Summary::default()
        }
    }

    /// Count items by state, skipping any whose name matches an
    /// exclusion pattern.
    ///
    /// A single item may count as both failed and not monitored; `ok`
    /// is the tally of items with neither flag set, deliberately not
    /// computed as `total - failed - not_monitored` (that subtraction
    /// double-counts doubly flagged items).
    pub fn aggregate(items: &[Item], exclude: &[Regex]) -> Self {
        let mut summary = Summary::default();

        for item in items {
            if exclude.iter().any(|pattern| pattern.is_match(&item.name)) {
                trace!("excluding {:?} from aggregation", item.name);
                continue;
            }

            summary.total += 1;
            if item.failed {
                summary.failed += 1;
                summary.failed_names.push(item.name.clone());
            }
            if item.not_monitored {
                summary.not_monitored += 1;
                summary.not_monitored_names.push(item.name.clone());
            }
            if item.healthy() {
                summary.ok += 1;
            }
        }

        summary
    }
}
