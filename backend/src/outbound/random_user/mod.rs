//! Random user generator outbound adapter.
//!
//! Thin HTTP implementation of the `RandomUserSource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_RANDOM_USER_URL, RandomUserHttpSource};
