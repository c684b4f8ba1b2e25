//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use academic_backend::Trace;
#[cfg(debug_assertions)]
use academic_backend::doc::ApiDoc;
use academic_backend::domain::AcademicRecordsService;
use academic_backend::inbound::http::api_scope;
use academic_backend::inbound::http::health::{HealthState, live, ready};
use academic_backend::inbound::http::state::HttpState;
use academic_backend::inbound::rpc;
use academic_backend::inbound::rpc::state::RpcState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    rpc_state: web::Data<RpcState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        rpc_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(rpc_state)
        .wrap(Trace)
        .service(api_scope())
        .service(rpc::rpc_entry)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server over the shared records service.
///
/// # Parameters
/// - `health_state`: shared readiness state, marked ready by the caller once
///   seeding completes.
/// - `service`: the records service every adapter dispatches to.
/// - `config`: pre-built [`ServerConfig`] carrying the bind address.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. Signal handling is
/// disabled; pair the server with [`drain_on_shutdown`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    service: &Arc<AcademicRecordsService>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let deps = AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::from_service(service)),
        rpc_state: web::Data::new(RpcState::from_service(service)),
    };
    let ServerConfig { bind_addr } = config;

    let server = HttpServer::new(move || build_app(deps.clone()))
        .disable_signals()
        .bind(bind_addr)?
        .run();
    Ok(server)
}

/// Resolve on SIGINT or SIGTERM.
///
/// # Errors
/// Propagates [`std::io::Error`] when a signal listener cannot be installed.
#[cfg(unix)]
pub async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

/// Resolve on Ctrl-C.
///
/// # Errors
/// Propagates [`std::io::Error`] when the listener cannot be installed.
#[cfg(not(unix))]
pub async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Wait for `shutdown`, fail the liveness probe, then stop the server
/// gracefully so in-flight requests finish.
///
/// A failed signal listener leaves the server running.
pub async fn drain_on_shutdown<F>(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    shutdown: F,
) where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = shutdown.await {
        warn!(%error, "shutdown signal listener failed");
        return;
    }
    info!("shutdown requested, draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}
