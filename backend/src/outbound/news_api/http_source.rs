//! Reqwest-backed news search adapter.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::SearchResponseDto;
use crate::domain::ports::{NewsArticleRecord, NewsSource, SourceError};
use crate::outbound::http_support::{build_client, get_json};

/// Public article search endpoint.
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

const PAGE_SIZE: &str = "20";

/// News source searching English-language headlines, newest first.
pub struct NewsApiHttpSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl NewsApiHttpSource {
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

impl fmt::Debug for NewsApiHttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiHttpSource")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl NewsSource for NewsApiHttpSource {
    async fn search_titles(&self, query: &str) -> Result<Vec<NewsArticleRecord>, SourceError> {
        let url = search_url(&self.endpoint, &self.api_key, query);
        let response: SearchResponseDto = get_json(&self.client, url, "news_api").await?;
        response.into_domain()
    }
}

fn search_url(endpoint: &Url, api_key: &str, query: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("qInTitle", query)
        .append_pair("language", "en")
        .append_pair("pageSize", PAGE_SIZE)
        .append_pair("sortBy", "publishedAt")
        .append_pair("apiKey", api_key);
    url
}
