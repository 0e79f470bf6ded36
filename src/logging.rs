//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter, e.g. `TWIG_LOG=debug`.
pub const LOG_ENV_VAR: &str = "TWIG_LOG";

/// Install a stderr subscriber. Logging is off unless `TWIG_LOG` is set, so
/// stdout only ever carries the tree.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
