//! REST Countries outbound adapter.
//!
//! Thin HTTP implementation of the `CountrySource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_REST_COUNTRIES_URL, RestCountriesHttpSource};
