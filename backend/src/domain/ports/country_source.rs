//! Driven port for country metadata lookups by name.
//!
//! The aggregator owns the match strategy order; adapters only translate one
//! strategy into one upstream request.

use async_trait::async_trait;

use super::SourceError;

/// How a country name is matched upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryMatch {
    /// Only records whose full name equals the lookup key.
    Exact,
    /// Any record whose name contains the lookup key.
    Partial,
}

/// One currency entry in upstream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRecord {
    /// ISO 4217 code, e.g. `EUR`.
    pub code: String,
    /// Display name, when upstream provides one.
    pub name: Option<String>,
}

/// Raw country record as returned by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryRecord {
    /// Common name, when present.
    pub common_name: Option<String>,
    /// Capital cities; usually zero or one entry.
    pub capitals: Vec<String>,
    /// Language display names in upstream map order.
    pub languages: Vec<String>,
    /// Currencies in upstream map order.
    pub currencies: Vec<CurrencyRecord>,
    /// PNG flag URL, when present.
    pub flag_png: Option<String>,
}

/// Port for looking up country metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Return every record matching `name` under `strategy`, in upstream order.
    async fn find_by_name(
        &self,
        name: &str,
        strategy: CountryMatch,
    ) -> Result<Vec<CountryRecord>, SourceError>;
}

/// Fixture implementation that knows a single country, France.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCountrySource;

#[async_trait]
impl CountrySource for FixtureCountrySource {
    async fn find_by_name(
        &self,
        name: &str,
        strategy: CountryMatch,
    ) -> Result<Vec<CountryRecord>, SourceError> {
        let matches = match strategy {
            CountryMatch::Exact => name.eq_ignore_ascii_case("France"),
            CountryMatch::Partial => "france".contains(&name.to_lowercase()),
        };
        if !matches {
            return Err(SourceError::status(404_u16, "Not Found"));
        }
        Ok(vec![CountryRecord {
            common_name: Some("France".to_owned()),
            capitals: vec!["Paris".to_owned()],
            languages: vec!["French".to_owned()],
            currencies: vec![CurrencyRecord {
                code: "EUR".to_owned(),
                name: Some("Euro".to_owned()),
            }],
            flag_png: Some("https://flagcdn.com/w320/fr.png".to_owned()),
        }])
    }
}
