mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use homeward::{access::Gate, repository::Repository, tables::Tables};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("Loading tables...");
    let now = Instant::now();
    let repository = match &config.tables_dir {
        Some(dir) => {
            let source = Tables::default().from_dir(dir.clone());
            match Repository::new().load_tables(source) {
                Ok(repository) => repository,
                Err(err) => {
                    error!("Failed to load tables from {}: {err}", dir.display());
                    std::process::exit(1);
                }
            }
        }
        None => Repository::builtin(),
    };
    info!(
        "Loading {} townships and {} dates took {:?}",
        repository.townships.len(),
        repository.dates.len(),
        now.elapsed()
    );

    let state = Arc::new(AppState::new(repository, Gate::new(config.password)));
    let app = api::router(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
