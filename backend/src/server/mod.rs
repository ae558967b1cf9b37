//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use auth_gate::Trace;
#[cfg(debug_assertions)]
use auth_gate::doc::openapi_for_prefix;
use auth_gate::domain::AuthenticationService;
use auth_gate::inbound::http::accounts::{forget_password, login, register};
use auth_gate::inbound::http::error::json_config;
use auth_gate::inbound::http::health::{HealthState, live, ready};
use auth_gate::inbound::http::resource::get_resource;
use auth_gate::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    api_prefix: String,
}

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = AuthenticationService::new(Arc::clone(&config.repository));
    web::Data::new(HttpState::new(
        Arc::new(service),
        Arc::new(config.codec.clone()),
    ))
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
        api_prefix,
    } = deps;

    // Every route under the prefix other than the account operations sits
    // behind the gate, including unknown paths.
    let gated = web::scope("")
        .wrap(http_state.require_bearer())
        .service(get_resource);
    let api = web::scope(&api_prefix)
        .service(login)
        .service(register)
        .service(forget_password)
        .service(gated);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}")
            .url("/api-docs/openapi.json", openapi_for_prefix(&api_prefix)),
    );

    app.service(api)
}

/// Construct an Actix HTTP server from `config`.
///
/// Readiness turns on once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let health_state = web::Data::new(HealthState::new(Arc::clone(&config.repository)));
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        api_prefix,
        ..
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            api_prefix: api_prefix.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_listening();
    Ok(server)
}
