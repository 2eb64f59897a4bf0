//! One bounded HTTP GET against the upstream status endpoint.

use std::fmt;

use tracing::{debug, trace};

use crate::config::Endpoint;

/// Result of one fetch attempt that produced a definite answer.
///
/// A timeout is an outcome, not an error: the check has an actionable
/// verdict for it (the target is unresponsive -> CRIT), whereas fetch
/// errors mean the health could not be determined at all (-> UNKNOWN).
#[derive(Debug)]
pub enum FetchOutcome {
    Body(String),
    TimedOut,
}

/// Transport-level failures that prevent any verdict.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP 401 from the upstream
    Unauthorized,

    /// Any other non-200 response
    UnexpectedStatus(u16),

    /// Connection-level failure (refused, DNS, TLS, ...)
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unauthorized => write!(f, "HTTP 401 - Password wrong?"),
            FetchError::UnexpectedStatus(status) => {
                write!(f, "Did not get HTTP 200 (but a {status})")
            }
            FetchError::Transport(err) => write!(f, "request failed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

/// Perform the single GET for this invocation.
///
/// The deadline lives on the client, so it covers connecting, sending
/// and reading the body as one budget.
pub async fn fetch_status(endpoint: &Endpoint) -> Result<FetchOutcome, FetchError> {
    debug!("will fetch: {}", endpoint.url);

    let client = reqwest::Client::builder()
        .timeout(endpoint.timeout)
        .build()
        .map_err(FetchError::Transport)?;

    let mut request = client.get(&endpoint.url);
    if let (Some(username), Some(password)) = (&endpoint.username, &endpoint.password) {
        request = request.basic_auth(username, Some(password));
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => return Ok(FetchOutcome::TimedOut),
        Err(e) => return Err(FetchError::Transport(e)),
    };

    let status = response.status();
    if status.as_u16() == 401 {
        return Err(FetchError::Unauthorized);
    }
    if status.as_u16() != 200 {
        return Err(FetchError::UnexpectedStatus(status.as_u16()));
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if e.is_timeout() => return Ok(FetchOutcome::TimedOut),
        Err(e) => return Err(FetchError::Transport(e)),
    };

    trace!("received {} bytes", body.len());
    Ok(FetchOutcome::Body(body))
}
