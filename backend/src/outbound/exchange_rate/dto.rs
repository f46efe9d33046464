//! DTOs for decoding latest-rate responses.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::ports::{ConversionRates, SourceError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(super) struct LatestRatesDto {
    result: Option<String>,
    error_type: Option<String>,
    #[serde(rename = "conversion_rates")]
    conversion_rates: Option<BTreeMap<String, f64>>,
}

impl LatestRatesDto {
    /// Convert to domain rates, treating an in-band error result as a failure.
    pub(super) fn into_domain(self) -> Result<ConversionRates, SourceError> {
        if self.result.as_deref() == Some("error") {
            let kind = self.error_type.as_deref().unwrap_or("unknown-error");
            return Err(SourceError::decode(format!(
                "rate service reported an error: {kind}"
            )));
        }
        let rates = self.conversion_rates.unwrap_or_default();
        Ok(ConversionRates {
            usd: rates.get("USD").copied(),
            kzt: rates.get("KZT").copied(),
        })
    }
}
