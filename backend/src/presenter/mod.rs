//! Server-side presenter for the profile page.
//!
//! Consumes an [`AggregateResult`](crate::domain::AggregateResult), or a
//! failure message, and renders the user, country and news regions
//! independently.

mod escape;
mod regions;
mod view;

pub use escape::{escape_attribute, escape_html};
pub use regions::{
    LOADING_TEXT, NO_ARTICLES_TEXT, NO_NEWS_DATA_TEXT, render_country, render_failure,
    render_news, render_user,
};
pub use view::{ProfileView, Region, RegionKind, ViewRegions};
