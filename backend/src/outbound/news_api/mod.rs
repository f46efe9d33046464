//! News search outbound adapter.
//!
//! Thin HTTP implementation of the `NewsSource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_NEWS_API_URL, NewsApiHttpSource};
