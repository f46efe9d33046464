//! Server-rendered profile page.
//!
//! ```text
//! GET /profile
//! ```
//!
//! Runs the same aggregation as `GET /api/profile` and renders it through the
//! presenter. A fatal error is shown in the page's error state, so the page
//! itself always answers 200.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::warn;

use crate::inbound::http::state::HttpState;
use crate::presenter::{ProfileView, ViewRegions};

const PAGE_TITLE: &str = "Random profile";

#[get("/profile")]
pub async fn profile_page(state: web::Data<HttpState>) -> HttpResponse {
    let mut view = ProfileView::new(ViewRegions::default());
    match state.profile.fetch_profile().await {
        Ok(result) => view.show_result(&result),
        Err(error) => {
            warn!(message = error.message(), "profile page rendered in error state");
            view.show_failure(error.message());
        }
    }
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(view.into_document(PAGE_TITLE))
}
