//! HTTP plumbing shared by the chart store and Spotify clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{ChartError, Result};

/// Longest `Retry-After` we are willing to wait out.
pub const MAX_RETRY_AFTER_SECS: u64 = 120;

pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!(
            "{}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(ChartError::from)
}

fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// Sends `request`, waiting out one rate limit response.
///
/// A `429` carrying a `Retry-After` of at most [`MAX_RETRY_AFTER_SECS`] is
/// slept on and the request repeated once. Anything else is returned as is.
pub async fn send(request: RequestBuilder) -> Result<Response> {
    let retry = request.try_clone();
    let response = request.send().await?;

    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return Ok(response);
    }

    match (retry, retry_after_secs(&response)) {
        (Some(retry), Some(secs)) if secs <= MAX_RETRY_AFTER_SECS => {
            debug!(retry_after = secs, "rate limited, retrying");
            sleep(Duration::from_secs(secs)).await;
            Ok(retry.send().await?)
        }
        (_, retry_after) => {
            warn!(?retry_after, "rate limited beyond the retry budget");
            Ok(response)
        }
    }
}

/// Maps unsuccessful statuses onto [`ChartError`] kinds.
pub async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ChartError::AuthMissing),
        StatusCode::NOT_FOUND => Err(ChartError::LookupNotFound(what.to_string())),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(ChartError::NetworkFailure(format!(
                "{} returned {}: {}",
                what,
                status,
                body.trim()
            )))
        }
    }
}
