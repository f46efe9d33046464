//! Service entry-point: reads configuration, wires the upstream adapters and
//! serves the profile endpoints.

mod server;

use actix_web::{HttpServer, web};
use color_eyre::eyre::WrapErr;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use profile_aggregator::inbound::http::health::HealthState;
use server::{AppConfig, build_app, build_http_state};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env(&DefaultEnv::new()).wrap_err("invalid configuration")?;
    let http_state = web::Data::new(
        build_http_state(&config).wrap_err("failed to construct upstream HTTP clients")?,
    );
    let health_state = web::Data::new(HealthState::new());

    // Clone for the server factory so the readiness flag stays reachable here.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(http_state.clone(), server_health_state.clone()))
        .bind((config.bind_host.as_str(), config.port))
        .wrap_err_with(|| format!("failed to bind {}:{}", config.bind_host, config.port))?;

    info!(host = %config.bind_host, port = config.port, "profile aggregator listening");
    health_state.mark_ready();
    server.run().await.wrap_err("server terminated with an error")
}
