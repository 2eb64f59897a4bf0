//! The full pipeline of one check invocation:
//! fetch -> normalize -> aggregate -> evaluate.

use anyhow::Result;
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::config::Endpoint;
use crate::evaluate::{Thresholds, Verdict, evaluate};
use crate::feeds::FeedKind;
use crate::fetch::{FetchOutcome, fetch_status};
use crate::summary::Summary;

/// Run one check against the configured endpoint.
///
/// A fetch timeout short-circuits into the synthetic timeout summary
/// (CRIT); any other fetch failure propagates as an error, which the
/// binary reports as UNKNOWN.
#[instrument(skip_all, fields(url = %endpoint.url))]
pub async fn run_check(
    endpoint: &Endpoint,
    kind: FeedKind,
    thresholds: &Thresholds,
    exclude: &[Regex],
) -> Result<(Verdict, String)> {
    let summary = match fetch_status(endpoint).await? {
        FetchOutcome::TimedOut => {
            debug!("no answer within {:?}", endpoint.timeout);
            Summary::timed_out()
        }
        FetchOutcome::Body(body) => {
            let items = kind.normalize(&body);
            trace!("normalized {} items from feed", items.len());
            Summary::aggregate(&items, exclude)
        }
    };

    debug!("aggregated: {summary:?}");
    Ok(evaluate(&summary, thresholds, kind.label()))
}
