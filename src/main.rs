//! Contact Assistant - Main entry point

use anyhow::Result;
use contact_assistant::{repl, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Logs go to stderr so they never interleave with the conversation
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Birthday window: {} days, help column width: {}",
        config.upcoming_days, config.help_column_width
    );

    let mut assistant = Assistant::new(config);
    let stdin = io::stdin();
    repl::run(&mut assistant, stdin.lock(), io::stdout().lock())?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
