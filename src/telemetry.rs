use crate::{Error, Result};
use std::env;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            Error::config(format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            ))
        })?;
    Ok(())
}

/// Installs the global subscriber on stderr. `RUST_LOG` overrides `default_level`;
/// `LOG_FORMAT=json` switches to structured output.
pub fn init(default_level: &str) -> Result<()> {
    validate_log_level(default_level)?;

    let filter = match env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(&directives)
            .map_err(|e| Error::config(format!("Invalid RUST_LOG '{}': {}", directives, e)))?,
        Err(_) => EnvFilter::new(default_level),
    };

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| Error::internal(format!("Failed to install tracing subscriber: {}", e)))
}
