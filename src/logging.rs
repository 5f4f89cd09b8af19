//! Diagnostic logging.
//!
//! Generation itself never logs; this only carries the CLI's debug trail.
//! Set `PWGENIE_LOG` (e.g. `PWGENIE_LOG=debug`) to see it.

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "PWGENIE_LOG";

pub fn init(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
