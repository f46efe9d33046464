//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::AppConfig;
pub use state_builders::build_http_state;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use profile_aggregator::Trace;
#[cfg(debug_assertions)]
use profile_aggregator::doc::ApiDoc;
use profile_aggregator::inbound::http::health::{HealthState, live, ready};
use profile_aggregator::inbound::http::page::profile_page;
use profile_aggregator::inbound::http::profile::get_profile;
use profile_aggregator::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the application with every route and the trace middleware.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .wrap(Trace)
        .service(get_profile)
        .service(profile_page)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
