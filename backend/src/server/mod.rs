//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServiceSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use contacts::Trace;
#[cfg(debug_assertions)]
use contacts::doc::ApiDoc;
use contacts::domain::ContactService;
use contacts::inbound::http::contacts::configure as configure_contacts;
use contacts::inbound::http::health::{HealthState, live, ready};
use contacts::inbound::http::state::HttpState;
use contacts::outbound::memory::InMemoryContactRepository;
use contacts::outbound::persistence::DieselContactRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build handler state over the configured contact store.
///
/// A database pool selects the PostgreSQL adapter; otherwise contacts live in
/// process memory and vanish on restart.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "contact store selected");
            let repo = Arc::new(DieselContactRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(ContactService::new(repo)))
        }
        None => {
            info!(store = "memory", "contact store selected");
            let repo = Arc::new(InMemoryContactRepository::new());
            HttpState::from_service(Arc::new(ContactService::new(repo)))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_contacts)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The store is built once and shared by every worker, so all workers see the
/// same contacts.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "contacts server listening");
    health_state.mark_ready();
    Ok(server)
}
