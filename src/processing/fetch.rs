// Article fetcher — a single GET bounded by a wall-clock budget.
//
// The budget covers the whole round trip (connect, headers and body), so it
// is enforced around the request future rather than with reqwest's own
// per-client timeout. There are no retries.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("jaundice/", env!("CARGO_PKG_VERSION"));

/// Why a fetch did not produce a page body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url} exceeded its {timeout:?} budget")]
    DeadlineExceeded { url: String, timeout: Duration },
}

/// Build the HTTP client shared by every pipeline in the process.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET `url` and return the body as text.
///
/// Non-2xx responses are failures; so is not finishing within `timeout`.
pub async fn fetch(client: &Client, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let request = async {
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(url, e))
    };

    match tokio::time::timeout(timeout, request).await {
        Ok(result) => {
            if let Ok(body) = &result {
                debug!(url, bytes = body.len(), "Fetched page");
            }
            result
        }
        Err(_) => Err(FetchError::DeadlineExceeded {
            url: url.to_string(),
            timeout,
        }),
    }
}

// The client carries no reqwest timeout; the deadline is enforced above.
fn transport_error(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        source,
    }
}
