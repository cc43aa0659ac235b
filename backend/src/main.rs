//! Service entry-point: loads settings, wires the in-memory store and starts
//! the HTTP server.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use profile_api::domain::UserDirectoryService;
use profile_api::example_data::seed_example_data;
use profile_api::inbound::http::health::HealthState;
use profile_api::inbound::http::state::HttpState;
use profile_api::outbound::memory::InMemoryUserRepository;
use profile_api::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let clock = Arc::new(DefaultClock);
    let directory = Arc::new(UserDirectoryService::new(
        Arc::new(InMemoryUserRepository::new()),
        clock.clone(),
    ));
    seed_example_data(directory.as_ref(), settings.seed_example_data)
        .await
        .map_err(|e| std::io::Error::other(format!("example data seeding failed: {e}")))?;

    let http_state = web::Data::new(HttpState::new(directory, clock));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, ServerConfig::from(&settings))?;

    info!("user profile service started");
    server.await
}
