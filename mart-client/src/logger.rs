//! Logging setup for binaries

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize console logging
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_file(false).with_line_number(false))
            .try_init()?;
    }
    Ok(())
}
