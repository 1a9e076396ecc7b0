//! Service entry-point: loads settings, builds the record store, serves HTTP
//! and drains on Ctrl-C.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_directory::config::DirectorySettings;
use user_directory::domain::RecordStore;
use user_directory::inbound::http::health::HealthState;

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

    let settings = load_settings(std::env::args_os())?;
    let store = RecordStore::seeded();
    info!(records = store.len(), "user directory loaded");

    let config = ServerConfig::from_settings(&settings, Arc::new(store)).map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    info!(bind_addr = %config.bind_addr(), "starting server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(stop_on_ctrl_c(server.handle(), health_state));

    server.await?;
    info!("server stopped");
    Ok(())
}

/// Load layered settings from the given command line, the environment and
/// any config file.
fn load_settings<I>(args: I) -> std::io::Result<DirectorySettings>
where
    I: IntoIterator<Item = OsString>,
{
    DirectorySettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))
}

/// Wait for Ctrl-C, flip liveness and drain in-flight requests.
async fn stop_on_ctrl_c(handle: ServerHandle, health_state: web::Data<HealthState>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, server going down"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            return;
        }
    }
    health_state.mark_unhealthy();
    handle.stop(true).await;
}
