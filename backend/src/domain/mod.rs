//! Domain primitives, ports and the aggregation service.
//!
//! Purpose: define the transient profile value objects, the ports the
//! aggregator drives, and the aggregation policy itself. Nothing here knows
//! about HTTP or any particular upstream wire format.
//!
//! Public surface:
//! - [`ProfileAggregator`]: implements [`ports::ProfileQuery`].
//! - [`AggregateResult`] and its parts: the JSON response contract.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod profile;
pub mod profile_aggregator;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::profile::{
    AggregateResult, Article, CountryInfo, ExchangeRates, NOT_AVAILABLE, NewsDigest, RateValue,
    UNTITLED_ARTICLE, UserProfile,
};
pub use self::profile_aggregator::{
    MAX_ARTICLES, MISSING_NEWS_KEY_NOTE, MISSING_RATE_KEY_NOTE, NEWS_UNAVAILABLE_NOTE,
    NO_NEWS_NOTE, ProfileAggregator, RATE_LOOKUP_FAILED_NOTE,
};
pub use self::trace_id::TraceId;
