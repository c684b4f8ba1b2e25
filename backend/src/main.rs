//! Backend entry-point: seeds the registry, then serves REST, RPC and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use academic_backend::domain::AcademicRecordsService;
use academic_backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use academic_backend::inbound::http::health::HealthState;
use academic_registry::AcademicRegistry;
use server::{ServerConfig, ServerSettings, create_server, drain_on_shutdown, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let server_settings = ServerSettings::load_from_iter(std::env::args_os().take(1))
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let example_data = ExampleDataSettings::load_from_iter(std::env::args_os().take(1))
        .map_err(|e| std::io::Error::other(format!("failed to load example data settings: {e}")))?;
    let config = ServerConfig::try_from(&server_settings)?;

    let registry = Arc::new(AcademicRegistry::default());
    let service = Arc::new(AcademicRecordsService::new(registry));
    let health_state = web::Data::new(HealthState::new());

    info!(addr = %config.bind_addr(), "starting server");
    let server = create_server(health_state.clone(), &service, config)?;

    seed_example_data_on_startup(&example_data, service.as_ref())
        .await
        .map_err(std::io::Error::other)?;
    health_state.mark_ready();

    actix_web::rt::spawn(drain_on_shutdown(
        health_state,
        server.handle(),
        shutdown_signal(),
    ));
    server.await
}
