//! DTOs for decoding country lookup responses.
//!
//! Language and currency maps are decoded as JSON objects so upstream key
//! order survives into the domain record.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::ports::{CountryRecord, CurrencyRecord};

#[derive(Debug, Deserialize)]
pub(super) struct CountryDto {
    name: Option<CountryNameDto>,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    languages: Map<String, Value>,
    #[serde(default)]
    currencies: Map<String, Value>,
    flags: Option<FlagsDto>,
}

#[derive(Debug, Deserialize)]
struct CountryNameDto {
    common: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlagsDto {
    png: Option<String>,
}

impl CountryDto {
    pub(super) fn into_domain(self) -> CountryRecord {
        let languages = self
            .languages
            .into_iter()
            .filter_map(|(_, name)| name.as_str().map(str::to_owned))
            .collect();
        let currencies = self
            .currencies
            .into_iter()
            .map(|(code, details)| CurrencyRecord {
                name: details
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                code,
            })
            .collect();

        CountryRecord {
            common_name: self.name.and_then(|name| name.common),
            capitals: self.capital,
            languages,
            currencies,
            flag_png: self.flags.and_then(|flags| flags.png),
        }
    }
}
