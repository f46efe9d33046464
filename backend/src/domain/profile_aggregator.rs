//! Profile aggregation service.
//!
//! Implements [`ProfileQuery`] by chaining the upstream sources:
//!
//! ```text
//! user -> country (exact, then partial) -> { exchange rates, news } -> result
//! ```
//!
//! The user and country stages are fatal; their failures become a single
//! [`Error`]. Rates and news degrade into notes on their own slice of the
//! result and run concurrently once the country is known.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::ports::{
    CountryMatch, CountrySource, ExchangeRateSource, NewsArticleRecord, NewsSource, ProfileQuery,
    RandomUserSource, SourceError,
};
use super::{AggregateResult, Article, CountryInfo, Error, ExchangeRates, NewsDigest, UserProfile};

/// Note set when no exchange rate credential is configured.
pub const MISSING_RATE_KEY_NOTE: &str = "Missing EXCHANGE_RATE_API_KEY in .env";
/// Note set when the exchange rate lookup fails.
pub const RATE_LOOKUP_FAILED_NOTE: &str = "ExchangeRate API error";
/// Note set when no news credential is configured.
pub const MISSING_NEWS_KEY_NOTE: &str = "Missing NEWS_API_KEY in .env";
/// Note set when no article survives the title filter.
pub const NO_NEWS_NOTE: &str = "No news found";
/// Note set when the news search fails.
pub const NEWS_UNAVAILABLE_NOTE: &str = "News API unavailable";
/// Upper bound on articles in a digest.
pub const MAX_ARTICLES: usize = 5;

/// Country match strategies, tried in order until one yields a record.
const COUNTRY_MATCH_STRATEGIES: [CountryMatch; 2] = [CountryMatch::Exact, CountryMatch::Partial];

/// Aggregator over the four upstream sources.
///
/// A `None` rate or news source means its credential is not configured; the
/// matching slice then carries the missing-credential note.
pub struct ProfileAggregator<U, C, R, N> {
    users: Arc<U>,
    countries: Arc<C>,
    rates: Option<Arc<R>>,
    news: Option<Arc<N>>,
}

impl<U, C, R, N> Clone for ProfileAggregator<U, C, R, N> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            countries: Arc::clone(&self.countries),
            rates: self.rates.clone(),
            news: self.news.clone(),
        }
    }
}

impl<U, C, R, N> ProfileAggregator<U, C, R, N> {
    /// Create an aggregator from its sources.
    pub fn new(
        users: Arc<U>,
        countries: Arc<C>,
        rates: Option<Arc<R>>,
        news: Option<Arc<N>>,
    ) -> Self {
        Self {
            users,
            countries,
            rates,
            news,
        }
    }
}

impl<U, C, R, N> ProfileAggregator<U, C, R, N>
where
    U: RandomUserSource,
    C: CountrySource,
    R: ExchangeRateSource,
    N: NewsSource,
{
    async fn fetch_user(&self) -> Result<UserProfile, Error> {
        let user = self
            .users
            .fetch_random_user()
            .await
            .map_err(|error| Error::upstream(format!("random user lookup failed: {error}")))?;
        Ok(UserProfile::from(user))
    }

    async fn fetch_country(&self, name: &str) -> Result<CountryInfo, Error> {
        let mut last_error = SourceError::empty(format!("country '{name}'"));
        for strategy in COUNTRY_MATCH_STRATEGIES {
            match self.countries.find_by_name(name, strategy).await {
                Ok(records) => match records.into_iter().next() {
                    Some(record) => return Ok(CountryInfo::from_record(record, name)),
                    None => {
                        last_error = SourceError::empty(format!("country '{name}'"));
                    }
                },
                Err(error) => {
                    last_error = error;
                }
            }
            warn!(
                country = %name,
                ?strategy,
                error = %last_error,
                "country lookup strategy failed"
            );
        }
        Err(Error::upstream(format!(
            "country lookup failed: {last_error}"
        )))
    }

    async fn fetch_exchange_rates(&self, currency_code: Option<&str>) -> ExchangeRates {
        let rates = ExchangeRates::unavailable(currency_code);
        let Some(source) = self.rates.as_ref() else {
            return rates.with_note(MISSING_RATE_KEY_NOTE);
        };
        let Some(code) = currency_code else {
            debug!("country has no currency; skipping exchange rate lookup");
            return rates;
        };

        match source.latest_rates(code).await {
            Ok(conversion) => ExchangeRates {
                usd: conversion.usd.into(),
                kzt: conversion.kzt.into(),
                ..rates
            },
            Err(error) => {
                warn!(base = %code, %error, "exchange rate lookup failed");
                rates.with_note(RATE_LOOKUP_FAILED_NOTE)
            }
        }
    }

    async fn fetch_news(&self, query: String) -> NewsDigest {
        let Some(source) = self.news.as_ref() else {
            return NewsDigest::with_note(query, MISSING_NEWS_KEY_NOTE);
        };

        match source.search_titles(&query).await {
            Ok(records) => {
                let articles = select_articles(records, &query);
                if articles.is_empty() {
                    NewsDigest::with_note(query, NO_NEWS_NOTE)
                } else {
                    NewsDigest {
                        query,
                        articles,
                        note: None,
                    }
                }
            }
            Err(error) => {
                warn!(query = %query, %error, "news search failed");
                NewsDigest::with_note(query, NEWS_UNAVAILABLE_NOTE)
            }
        }
    }
}

#[async_trait]
impl<U, C, R, N> ProfileQuery for ProfileAggregator<U, C, R, N>
where
    U: RandomUserSource,
    C: CountrySource,
    R: ExchangeRateSource,
    N: NewsSource,
{
    async fn fetch_profile(&self) -> Result<AggregateResult, Error> {
        let user = self.fetch_user().await?;
        let country = self.fetch_country(&user.country).await?;

        let query = if country.name.is_empty() {
            user.country.clone()
        } else {
            country.name.clone()
        };
        let (exchange_rates, news) = tokio::join!(
            self.fetch_exchange_rates(country.currency_code.as_deref()),
            self.fetch_news(query),
        );

        Ok(AggregateResult {
            user,
            country,
            exchange_rates,
            news,
        })
    }
}

/// Keep articles whose title mentions `query` case-insensitively, in
/// upstream order, up to [`MAX_ARTICLES`].
///
/// Upstream already searches titles; the filter is re-applied locally.
pub(crate) fn select_articles(records: Vec<NewsArticleRecord>, query: &str) -> Vec<Article> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record
                .title
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle)
        })
        .take(MAX_ARTICLES)
        .map(Article::from)
        .collect()
}

#[cfg(test)]
#[path = "profile_aggregator_tests.rs"]
mod tests;
