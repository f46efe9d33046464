//! Profile value objects returned by `GET /api/profile`.
//!
//! Every value is built fresh per request from upstream records and dropped
//! once the response is written. Serialisation is the JSON contract consumed
//! by the presenter: camelCase keys, `null` for absent URLs and currency
//! codes, and the literal `"N/A"` for unavailable rates.

use serde::{Serialize, Serializer};

use super::ports::{CountryRecord, NewsArticleRecord, RandomUser};

/// Placeholder rendered for values an upstream could not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Title substituted for articles without one.
pub const UNTITLED_ARTICLE: &str = "No title";

/// Person profile derived from the random user generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: u32,
    pub picture: String,
    pub city: String,
    /// Country name used as the country lookup key.
    pub country: String,
    /// Street name, one space, street number.
    pub full_address: String,
}

impl From<RandomUser> for UserProfile {
    fn from(user: RandomUser) -> Self {
        let full_address = format!("{} {}", user.street_name, user.street_number);
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            gender: user.gender,
            age: user.age,
            picture: user.picture,
            city: user.city,
            country: user.country,
            full_address,
        }
    }
}

/// Country metadata for the user's country.
///
/// ## Invariants
/// - `currency_code` is `None` only when upstream listed no currencies, in
///   which case `currency_name` is [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub name: String,
    pub capital: String,
    pub languages: Vec<String>,
    pub currency_code: Option<String>,
    pub currency_name: String,
    pub flag: Option<String>,
}

impl CountryInfo {
    /// Derive country info from the first matching upstream record.
    ///
    /// Blank upstream strings count as absent, so the name falls back to
    /// `lookup_name` and the flag to `None`.
    ///
    /// # Examples
    /// ```
    /// use profile_aggregator::domain::CountryInfo;
    /// use profile_aggregator::domain::ports::CountryRecord;
    ///
    /// let info = CountryInfo::from_record(CountryRecord::default(), "Atlantis");
    /// assert_eq!(info.name, "Atlantis");
    /// assert_eq!(info.capital, "N/A");
    /// assert!(info.currency_code.is_none());
    /// ```
    pub fn from_record(record: CountryRecord, lookup_name: &str) -> Self {
        let CountryRecord {
            common_name,
            capitals,
            languages,
            currencies,
            flag_png,
        } = record;

        let (currency_code, currency_name) = match currencies.into_iter().next() {
            Some(currency) => (
                Some(currency.code),
                non_blank(currency.name).unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            ),
            None => (None, NOT_AVAILABLE.to_owned()),
        };

        Self {
            name: non_blank(common_name).unwrap_or_else(|| lookup_name.to_owned()),
            capital: capitals
                .into_iter()
                .next()
                .unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
            languages,
            currency_code,
            currency_name,
            flag: non_blank(flag_png),
        }
    }
}

/// A conversion rate, or the marker that none could be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RateValue {
    /// Units of the target currency per one unit of the base.
    Rate(f64),
    /// Serialised as `"N/A"`.
    #[default]
    NotAvailable,
}

impl From<Option<f64>> for RateValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NotAvailable, Self::Rate)
    }
}

impl Serialize for RateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Rate(value) => serializer.serialize_f64(*value),
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl std::fmt::Display for RateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rate(value) => write!(f, "{value}"),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Exchange rates from the country's currency.
///
/// ## Invariants
/// - `note` is set only when the lookup was skipped for a missing credential
///   or failed; in both cases `usd` and `kzt` stay [`RateValue::NotAvailable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRates {
    /// Currency code, or [`NOT_AVAILABLE`].
    pub base: String,
    pub usd: RateValue,
    pub kzt: RateValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExchangeRates {
    /// Rates with both values unavailable and no note.
    pub fn unavailable(currency_code: Option<&str>) -> Self {
        Self {
            base: currency_code.unwrap_or(NOT_AVAILABLE).to_owned(),
            usd: RateValue::NotAvailable,
            kzt: RateValue::NotAvailable,
            note: None,
        }
    }

    /// Attach a degradation note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// One news article shown in the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub image: Option<String>,
}

impl From<NewsArticleRecord> for Article {
    fn from(record: NewsArticleRecord) -> Self {
        Self {
            title: non_blank(record.title).unwrap_or_else(|| UNTITLED_ARTICLE.to_owned()),
            url: record.url.unwrap_or_default(),
            source: record.source_name.unwrap_or_default(),
            image: non_blank(record.image_url),
        }
    }
}

/// Recent articles mentioning the country.
///
/// ## Invariants
/// - At most five articles.
/// - `note` and a non-empty `articles` list never appear together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDigest {
    pub query: String,
    pub articles: Vec<Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewsDigest {
    /// An empty digest carrying a degradation note.
    pub fn with_note(query: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            articles: Vec::new(),
            note: Some(note.into()),
        }
    }
}

/// The full response contract for one profile request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub user: UserProfile,
    pub country: CountryInfo,
    pub exchange_rates: ExchangeRates,
    pub news: NewsDigest,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    //! Mapping and serialisation rules for profile values.

    use super::*;
    use crate::domain::ports::CurrencyRecord;
    use rstest::rstest;
    use serde_json::json;

    fn random_user(street_name: &str, street_number: i64) -> RandomUser {
        RandomUser {
            first_name: "Aigerim".to_owned(),
            last_name: "Sadykova".to_owned(),
            gender: "female".to_owned(),
            age: 29,
            picture: "https://randomuser.me/api/portraits/women/5.jpg".to_owned(),
            city: "Almaty".to_owned(),
            country: "Kazakhstan".to_owned(),
            street_name: street_name.to_owned(),
            street_number,
        }
    }

    #[rstest]
    #[case("Abay Avenue", 150, "Abay Avenue 150")]
    #[case("Rue de l'Abbaye", 7, "Rue de l'Abbaye 7")]
    #[case("", 0, " 0")]
    fn full_address_joins_street_name_and_number(
        #[case] street_name: &str,
        #[case] street_number: i64,
        #[case] expected: &str,
    ) {
        let profile = UserProfile::from(random_user(street_name, street_number));
        assert_eq!(profile.full_address, expected);
    }

    #[test]
    fn country_info_takes_first_currency_and_capital() {
        let record = CountryRecord {
            common_name: Some("Switzerland".to_owned()),
            capitals: vec!["Bern".to_owned(), "Zurich".to_owned()],
            languages: vec!["French".to_owned(), "German".to_owned()],
            currencies: vec![
                CurrencyRecord {
                    code: "CHF".to_owned(),
                    name: Some("Swiss franc".to_owned()),
                },
                CurrencyRecord {
                    code: "EUR".to_owned(),
                    name: Some("Euro".to_owned()),
                },
            ],
            flag_png: Some("https://flagcdn.com/w320/ch.png".to_owned()),
        };

        let info = CountryInfo::from_record(record, "Switzerland");
        assert_eq!(info.capital, "Bern");
        assert_eq!(info.currency_code.as_deref(), Some("CHF"));
        assert_eq!(info.currency_name, "Swiss franc");
        assert_eq!(info.languages, vec!["French", "German"]);
    }

    #[test]
    fn country_info_falls_back_when_fields_are_missing() {
        let record = CountryRecord {
            common_name: Some(String::new()),
            currencies: vec![CurrencyRecord {
                code: "XYZ".to_owned(),
                name: None,
            }],
            flag_png: Some(String::new()),
            ..CountryRecord::default()
        };

        let info = CountryInfo::from_record(record, "Freedonia");
        assert_eq!(info.name, "Freedonia");
        assert_eq!(info.capital, NOT_AVAILABLE);
        assert!(info.languages.is_empty());
        assert_eq!(info.currency_code.as_deref(), Some("XYZ"));
        assert_eq!(info.currency_name, NOT_AVAILABLE);
        assert!(info.flag.is_none());
    }

    #[test]
    fn country_info_serialises_null_currency_and_flag() {
        let info = CountryInfo::from_record(CountryRecord::default(), "Antarctica");
        let value = serde_json::to_value(&info).expect("serialise country");
        assert_eq!(
            value,
            json!({
                "name": "Antarctica",
                "capital": "N/A",
                "languages": [],
                "currencyCode": null,
                "currencyName": "N/A",
                "flag": null,
            })
        );
    }

    #[test]
    fn rate_values_serialise_as_number_or_placeholder() {
        let rates = ExchangeRates {
            base: "EUR".to_owned(),
            usd: RateValue::Rate(1.08),
            kzt: RateValue::NotAvailable,
            note: None,
        };
        let value = serde_json::to_value(&rates).expect("serialise rates");
        assert_eq!(value, json!({ "base": "EUR", "usd": 1.08, "kzt": "N/A" }));
    }

    #[test]
    fn unavailable_rates_with_note_keep_placeholders() {
        let rates = ExchangeRates::unavailable(None).with_note("ExchangeRate API error");
        let value = serde_json::to_value(&rates).expect("serialise rates");
        assert_eq!(
            value,
            json!({
                "base": "N/A",
                "usd": "N/A",
                "kzt": "N/A",
                "note": "ExchangeRate API error",
            })
        );
    }

    #[rstest]
    #[case(RateValue::Rate(1.08), "1.08")]
    #[case(RateValue::Rate(470.0), "470")]
    #[case(RateValue::NotAvailable, "N/A")]
    fn rate_value_display_matches_json_text(#[case] value: RateValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn article_defaults_missing_fields() {
        let article = Article::from(NewsArticleRecord {
            title: Some(String::new()),
            url: None,
            source_name: None,
            image_url: Some(String::new()),
        });
        assert_eq!(article.title, UNTITLED_ARTICLE);
        assert_eq!(article.url, "");
        assert_eq!(article.source, "");
        assert!(article.image.is_none());
    }

    #[test]
    fn aggregate_result_uses_camel_case_keys() {
        let result = AggregateResult {
            user: UserProfile::from(random_user("Abay Avenue", 150)),
            country: CountryInfo::from_record(CountryRecord::default(), "Kazakhstan"),
            exchange_rates: ExchangeRates::unavailable(None),
            news: NewsDigest::with_note("Kazakhstan", "No news found"),
        };
        let value = serde_json::to_value(&result).expect("serialise result");
        let object = value.as_object().expect("object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["country", "exchangeRates", "news", "user"]);
        assert_eq!(value["user"]["fullAddress"], json!("Abay Avenue 150"));
        assert_eq!(value["news"]["articles"], json!([]));
    }
}
