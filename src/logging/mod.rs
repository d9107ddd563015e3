//! Logging initialization with environment-based formatters
//!
//! - Production: structured JSON, one evaluation per line
//! - Anything else: colored, human-readable output

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let env = get_environment();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    }
}
