//! Exchange rate outbound adapter.
//!
//! Thin HTTP implementation of the `ExchangeRateSource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_EXCHANGE_RATE_URL, ExchangeRateHttpSource};
