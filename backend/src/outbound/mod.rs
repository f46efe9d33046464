//! Outbound adapters implementing the upstream source ports.
//!
//! Each adapter is a thin translator between one public JSON API and the
//! domain records its port expects. Adapters contain no aggregation logic:
//!
//! - **random_user**: random user generator
//! - **rest_countries**: country lookup by name
//! - **exchange_rate**: latest conversion rates (keyed)
//! - **news_api**: headline search (keyed)

mod http_support;

pub mod exchange_rate;
pub mod news_api;
pub mod random_user;
pub mod rest_countries;
