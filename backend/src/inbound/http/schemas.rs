//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON produced by the domain types'
//! `Serialize` implementations but live in the inbound adapter layer where
//! framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::UserProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserProfileSchema {
    #[schema(example = "Louise")]
    first_name: String,
    #[schema(example = "Girard")]
    last_name: String,
    #[schema(example = "female")]
    gender: String,
    #[schema(example = 34)]
    age: u32,
    /// Large portrait URL.
    #[schema(example = "https://randomuser.me/api/portraits/women/44.jpg")]
    picture: String,
    #[schema(example = "Lyon")]
    city: String,
    /// Country name used as the country lookup key.
    #[schema(example = "France")]
    country: String,
    /// Street name, one space, street number.
    #[schema(example = "Rue de la Republique 12")]
    full_address: String,
}

/// OpenAPI schema for [`crate::domain::CountryInfo`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CountryInfo, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CountryInfoSchema {
    #[schema(example = "France")]
    name: String,
    /// First capital, or `N/A`.
    #[schema(example = "Paris")]
    capital: String,
    /// Language names in upstream order; may be empty.
    languages: Vec<String>,
    /// `null` only when the country lists no currencies.
    #[schema(example = "EUR")]
    currency_code: Option<String>,
    #[schema(example = "Euro")]
    currency_name: String,
    #[schema(example = "https://flagcdn.com/w320/fr.png")]
    flag: Option<String>,
}

/// OpenAPI schema for [`crate::domain::ExchangeRates`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ExchangeRates)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExchangeRatesSchema {
    /// Currency code, or `N/A`.
    #[schema(example = "EUR")]
    base: String,
    /// Number, or the string `N/A`.
    #[schema(example = 1.08)]
    usd: serde_json::Value,
    /// Number, or the string `N/A`.
    #[schema(example = 512.4)]
    kzt: serde_json::Value,
    /// Present only when the credential is missing or the lookup failed.
    #[schema(example = "ExchangeRate API error")]
    note: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Article`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Article)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ArticleSchema {
    #[schema(example = "France unveils new rail plan")]
    title: String,
    url: String,
    /// Publisher name, or an empty string.
    source: String,
    image: Option<String>,
}

/// OpenAPI schema for [`crate::domain::NewsDigest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewsDigest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NewsDigestSchema {
    /// Text every article title contains, case-insensitively.
    #[schema(example = "France")]
    query: String,
    /// At most five articles.
    articles: Vec<ArticleSchema>,
    /// Present only when no articles are listed.
    #[schema(example = "No news found")]
    note: Option<String>,
}

/// OpenAPI schema for [`crate::domain::AggregateResult`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AggregateResult, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AggregateResultSchema {
    user: UserProfileSchema,
    country: CountryInfoSchema,
    exchange_rates: ExchangeRatesSchema,
    news: NewsDigestSchema,
}
