//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::path::PathBuf;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use user_directory::Trace;
#[cfg(debug_assertions)]
use user_directory::doc::ApiDoc;
use user_directory::inbound::http::cities::users_by_city;
use user_directory::inbound::http::health::{HealthState, live, ready};
use user_directory::inbound::http::home::home;
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::static_files::mount_static_files;
use user_directory::inbound::http::users::{get_user, list_users};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    serve_dir: PathBuf,
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
        serve_dir,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(home)
        .service(list_users)
        .service(get_user)
        .service(users_by_city)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(|cfg| mount_static_files(cfg, &serve_dir))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Actix's own signal handling is disabled; the caller owns shutdown through
/// the returned server's handle.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        serve_dir,
        request_timeout,
        users,
    } = config;
    let http_state = web::Data::new(HttpState::new(users));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            serve_dir: serve_dir.clone(),
        })
    })
    .client_request_timeout(request_timeout)
    .disable_signals()
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}
