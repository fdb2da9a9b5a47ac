//! HTTP client wrapper for the HM Customs tariff portal.

use std::time::Duration;

use reqwest::blocking::{Client, ClientBuilder};

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{HarvesterError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("gibraltar-tariff-harvester/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with the fixed timeout and user agent.
pub fn create_client() -> Result<Client> {
    build_client(
        Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT),
    )
}

/// Finish a client builder; a failure here is fatal for the run.
fn build_client(builder: ClientBuilder) -> Result<Client> {
    builder.build().map_err(HarvesterError::Client)
}

/// Download a page body as text.
///
/// There is no retry: a failed chapter is skipped for the run.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `chapter` - Chapter the URL belongs to, carried into the error
///
/// # Errors
/// * `HarvesterError::HttpStatus` for any non-2xx response
/// * `HarvesterError::Request` for transport failures
pub fn download_text(client: &Client, url: &str, chapter: u32) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .map_err(|source| HarvesterError::Request { chapter, source })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(chapter, status = %status, url, "Non-success response");
        return Err(HarvesterError::HttpStatus {
            chapter,
            status,
            url: url.to_string(),
        });
    }

    response
        .text()
        .map_err(|source| HarvesterError::Request { chapter, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = create_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_client_failure_is_fatal() {
        let err = build_client(Client::builder().user_agent("bad\nagent")).unwrap_err();
        assert!(matches!(err, HarvesterError::Client(_)));
        assert!(!err.is_chapter_failure());
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("gibraltar-tariff-harvester/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_download_text_unreachable_host_is_request_error() {
        let client = create_client().unwrap();
        // Port 9 (discard) on localhost is closed on test machines.
        let err = download_text(&client, "http://127.0.0.1:9/print.jsf?c=01", 1).unwrap_err();
        assert!(matches!(err, HarvesterError::Request { chapter: 1, .. }));
        assert!(err.is_chapter_failure());
    }
}
