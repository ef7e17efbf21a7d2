//! Logging setup for the `sidebar` binary.
//!
//! Filter directives come from `SIDEBAR_LOG`; without it only warnings are
//! printed. Logs go to stderr so stdout stays clean JSON.
//!
//! ```bash
//! SIDEBAR_LOG=debug sidebar plan --detail
//! SIDEBAR_LOG=sidebar_layout=trace,warn sidebar grid
//! ```

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "SIDEBAR_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Call once, before running a command.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
