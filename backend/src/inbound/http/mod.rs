//! HTTP inbound adapter exposing the profile endpoints.

pub mod error;
pub mod health;
pub mod page;
pub mod profile;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
