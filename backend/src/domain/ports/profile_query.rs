//! Driving port for assembling one aggregated profile.

use async_trait::async_trait;

use crate::domain::{AggregateResult, Error};

/// Use-case port consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Assemble a fresh profile from the upstream sources.
    ///
    /// Returns an [`Error`] only when the user or country stage fails; rate
    /// and news failures degrade into notes on the result.
    async fn fetch_profile(&self) -> Result<AggregateResult, Error>;
}
