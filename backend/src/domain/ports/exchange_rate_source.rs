//! Driven port for currency conversion rates.

use async_trait::async_trait;

use super::SourceError;

/// Conversion rates from one base currency to the currencies the profile shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionRates {
    /// Units of USD per one unit of the base currency.
    pub usd: Option<f64>,
    /// Units of KZT per one unit of the base currency.
    pub kzt: Option<f64>,
}

/// Port for fetching the latest rates for a base currency.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExchangeRateSource: Send + Sync {
    /// Fetch the latest rates keyed by `base_currency`.
    async fn latest_rates(&self, base_currency: &str) -> Result<ConversionRates, SourceError>;
}

/// Fixture implementation returning constant rates for any base.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureExchangeRateSource;

#[async_trait]
impl ExchangeRateSource for FixtureExchangeRateSource {
    async fn latest_rates(&self, _base_currency: &str) -> Result<ConversionRates, SourceError> {
        Ok(ConversionRates {
            usd: Some(1.08),
            kzt: Some(1.1),
        })
    }
}
