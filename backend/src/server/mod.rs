//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use emr::Trace;
#[cfg(debug_assertions)]
use emr::doc::ApiDoc;
use emr::domain::{DefaultPasswordPolicy, DefaultUiFormatter};
use emr::inbound::http::accounts::validate_account;
use emr::inbound::http::health::{HealthState, live, ready};
use emr::inbound::http::state::{HttpState, HttpStatePorts};
use emr::inbound::http::visits::get_visit_details;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_http_state(config: &ServerConfig) -> HttpState {
    HttpState::new(HttpStatePorts {
        users: config.directory.clone(),
        providers: config.directory.clone(),
        password_policy: Arc::new(DefaultPasswordPolicy::new(config.password_rules.clone())),
        visits: config.visits.clone(),
        formatter: Arc::new(DefaultUiFormatter),
    })
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
    } = deps;

    let api = web::scope("/api/v1")
        .service(validate_account)
        .service(get_visit_details);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness flag is raised once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests;
