//! Reqwest-backed exchange rate adapter.
//!
//! The access key travels in the request path, so the adapter never logs
//! URLs and its `Debug` output hides the key.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::LatestRatesDto;
use crate::domain::ports::{ConversionRates, ExchangeRateSource, SourceError};
use crate::outbound::http_support::{build_client, get_json};

/// Public v6 endpoint; `{key}/latest/{code}` is appended per request.
pub const DEFAULT_EXCHANGE_RATE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Exchange rate source authenticated with a path-embedded access key.
pub struct ExchangeRateHttpSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ExchangeRateHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
            api_key: api_key.into(),
        })
    }
}

impl fmt::Debug for ExchangeRateHttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeRateHttpSource")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ExchangeRateSource for ExchangeRateHttpSource {
    async fn latest_rates(&self, base_currency: &str) -> Result<ConversionRates, SourceError> {
        let url = latest_url(&self.endpoint, &self.api_key, base_currency)?;
        let response: LatestRatesDto = get_json(&self.client, url, "exchange_rate").await?;
        response.into_domain()
    }
}

fn latest_url(endpoint: &Url, api_key: &str, base_currency: &str) -> Result<Url, SourceError> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::transport("rate endpoint cannot take a path"))?
        .pop_if_empty()
        .extend([api_key, "latest", base_currency]);
    Ok(url)
}
