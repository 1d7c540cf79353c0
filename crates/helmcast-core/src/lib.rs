pub mod config;

pub use config::{AdvisorConfig, Config, ValidationResult, WeatherConfig};

use anyhow::Result;

/// Initialize tracing/logging for the application
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Helmcast core initialized");
    Ok(())
}
