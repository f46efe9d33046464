//! Reqwest-backed country lookup adapter.
//!
//! One request per match strategy: exact matches add `fullText=true`, partial
//! matches leave it off.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::CountryDto;
use crate::domain::ports::{CountryMatch, CountryRecord, CountrySource, SourceError};
use crate::outbound::http_support::{build_client, get_json};

/// Public name-lookup endpoint; the country name is appended as a path segment.
pub const DEFAULT_REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/name";

/// Country source backed by the REST Countries name endpoint.
pub struct RestCountriesHttpSource {
    client: Client,
    endpoint: Url,
}

impl RestCountriesHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint,
        })
    }
}

#[async_trait]
impl CountrySource for RestCountriesHttpSource {
    async fn find_by_name(
        &self,
        name: &str,
        strategy: CountryMatch,
    ) -> Result<Vec<CountryRecord>, SourceError> {
        let url = lookup_url(&self.endpoint, name, strategy)?;
        let countries: Vec<CountryDto> = get_json(&self.client, url, "rest_countries").await?;
        Ok(countries.into_iter().map(CountryDto::into_domain).collect())
    }
}

fn lookup_url(endpoint: &Url, name: &str, strategy: CountryMatch) -> Result<Url, SourceError> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::transport(format!("endpoint {endpoint} cannot take a path")))?
        .pop_if_empty()
        .push(name);
    if strategy == CountryMatch::Exact {
        url.query_pairs_mut().append_pair("fullText", "true");
    }
    Ok(url)
}
