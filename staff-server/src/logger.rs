//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::BoxError;

const DEFAULT_FILTER: &str = "staff_server=info,tower_http=info";

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default filter. `json_format` writes one JSON
/// object per line, otherwise human-readable output.
pub fn init_logger(json_format: bool) -> Result<(), BoxError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).compact())
            .try_init()?;
    }

    Ok(())
}
