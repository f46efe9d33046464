//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving port and remain testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::ProfileQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub profile: Arc<dyn ProfileQuery>,
}

impl HttpState {
    /// Construct state from the profile use-case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use profile_aggregator::domain::ProfileAggregator;
    /// use profile_aggregator::domain::ports::{
    ///     FixtureCountrySource, FixtureExchangeRateSource, FixtureNewsSource,
    ///     FixtureRandomUserSource,
    /// };
    /// use profile_aggregator::inbound::http::state::HttpState;
    ///
    /// let aggregator = ProfileAggregator::new(
    ///     Arc::new(FixtureRandomUserSource),
    ///     Arc::new(FixtureCountrySource),
    ///     Some(Arc::new(FixtureExchangeRateSource)),
    ///     Some(Arc::new(FixtureNewsSource)),
    /// );
    /// let state = HttpState::new(Arc::new(aggregator));
    /// let _profile = state.profile.clone();
    /// ```
    pub fn new(profile: Arc<dyn ProfileQuery>) -> Self {
        Self { profile }
    }
}
