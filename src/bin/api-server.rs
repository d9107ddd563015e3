//! Credit evaluation API server
//!
//! Serves `POST /api/evaluate` to the dashboard plus health, metrics and
//! policy introspection endpoints. The risk model is loaded once at startup.

use creditgate::config::{get_environment, Config};
use creditgate::core::http::start_server;
use creditgate::logging;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let env = get_environment();
    info!("Starting credit evaluation API server");
    info!(environment = %env, "Environment");
    info!(
        min_fico = config.policy.thresholds.min_fico,
        max_dti = config.policy.thresholds.max_dti,
        decision = ?config.policy.decision,
        "Active credit policy"
    );

    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!(port = port, "API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
