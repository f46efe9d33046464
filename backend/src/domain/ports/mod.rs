//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports describe the four upstream sources the aggregator depends
//! on; the driving port ([`ProfileQuery`]) is what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod country_source;
mod exchange_rate_source;
mod news_source;
mod profile_query;
mod random_user_source;
mod source_error;

#[cfg(test)]
pub use country_source::MockCountrySource;
pub use country_source::{
    CountryMatch, CountryRecord, CountrySource, CurrencyRecord, FixtureCountrySource,
};
#[cfg(test)]
pub use exchange_rate_source::MockExchangeRateSource;
pub use exchange_rate_source::{ConversionRates, ExchangeRateSource, FixtureExchangeRateSource};
#[cfg(test)]
pub use news_source::MockNewsSource;
pub use news_source::{FixtureNewsSource, NewsArticleRecord, NewsSource};
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::ProfileQuery;
#[cfg(test)]
pub use random_user_source::MockRandomUserSource;
pub use random_user_source::{FixtureRandomUserSource, RandomUser, RandomUserSource};
pub use source_error::SourceError;
