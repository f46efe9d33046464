//! Transport helpers shared by the reqwest-backed source adapters.
//!
//! Adapters own URL construction and DTO mapping; this module owns the
//! request/response cycle: user agent, timeout-aware error mapping, status
//! previews and JSON decoding.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::SourceError;

const DEFAULT_USER_AGENT: &str = "profile-aggregator/0.1";
const PREVIEW_CHAR_LIMIT: usize = 120;

/// Build a client with the shared user agent and a per-request timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Issue a GET and decode a JSON body, mapping every failure to [`SourceError`].
///
/// `source` names the upstream in logs; the URL itself is never logged
/// because some upstreams carry credentials in it.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    source: &'static str,
) -> Result<T, SourceError> {
    debug!(source, host = url.host_str().unwrap_or_default(), "calling upstream");
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(map_transport_error)?;

    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    debug!(source, status = status.as_u16(), bytes = body.len(), "upstream responded");
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    decode_json(body.as_ref())
}

pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, SourceError> {
    serde_json::from_slice(body)
        .map_err(|error| SourceError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> SourceError {
    let error = error.without_url();
    if error.is_timeout() {
        SourceError::timeout(error.to_string())
    } else {
        SourceError::transport(error.to_string())
    }
}

pub(crate) fn map_status_error(status: StatusCode, body: &[u8]) -> SourceError {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        reason.to_owned()
    } else {
        format!("{reason}: {preview}")
    };

    if matches!(
        status,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT
    ) {
        SourceError::timeout(format!("status {}: {message}", status.as_u16()))
    } else {
        SourceError::status(status.as_u16(), message)
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    compact.chars().take(PREVIEW_CHAR_LIMIT).collect()
}
