//! Builders wiring the outbound adapters into HTTP state.

use std::sync::Arc;

use tracing::{info, warn};

use profile_aggregator::domain::ProfileAggregator;
use profile_aggregator::domain::ports::ProfileQuery;
use profile_aggregator::inbound::http::state::HttpState;
use profile_aggregator::outbound::exchange_rate::ExchangeRateHttpSource;
use profile_aggregator::outbound::news_api::NewsApiHttpSource;
use profile_aggregator::outbound::random_user::RandomUserHttpSource;
use profile_aggregator::outbound::rest_countries::RestCountriesHttpSource;

use super::AppConfig;

type HttpProfileAggregator = ProfileAggregator<
    RandomUserHttpSource,
    RestCountriesHttpSource,
    ExchangeRateHttpSource,
    NewsApiHttpSource,
>;

/// Build the HTTP state backed by the reqwest adapters.
///
/// Keyed sources are only constructed when their credential is configured;
/// otherwise the aggregator reports the missing key in the response.
///
/// # Errors
///
/// Returns an error when a reqwest client cannot be constructed.
pub fn build_http_state(config: &AppConfig) -> Result<HttpState, reqwest::Error> {
    let timeout = config.upstream_timeout;
    let endpoints = &config.endpoints;

    let users = Arc::new(RandomUserHttpSource::new(
        endpoints.random_user.clone(),
        timeout,
    )?);
    let countries = Arc::new(RestCountriesHttpSource::new(
        endpoints.rest_countries.clone(),
        timeout,
    )?);
    let rates = match &config.exchange_rate_key {
        Some(key) => Some(Arc::new(ExchangeRateHttpSource::new(
            endpoints.exchange_rate.clone(),
            key.expose(),
            timeout,
        )?)),
        None => {
            warn!("EXCHANGE_RATE_API_KEY not set; exchange rates will be reported as missing");
            None
        }
    };
    let news = match &config.news_api_key {
        Some(key) => Some(Arc::new(NewsApiHttpSource::new(
            endpoints.news_api.clone(),
            key.expose(),
            timeout,
        )?)),
        None => {
            warn!("NEWS_API_KEY not set; news will be reported as missing");
            None
        }
    };
    info!(
        exchange_rate_key = rates.is_some(),
        news_api_key = news.is_some(),
        timeout_secs = timeout.as_secs(),
        "upstream sources configured"
    );

    let aggregator: HttpProfileAggregator = ProfileAggregator::new(users, countries, rates, news);
    let profile: Arc<dyn ProfileQuery> = Arc::new(aggregator);
    Ok(HttpState::new(profile))
}
