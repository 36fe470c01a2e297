// src/log.rs
use tracing_subscriber::EnvFilter;

use crate::config::consts::LOG_ENV;

/// Level used when `REC_SCHED_LOG` is unset: warn, then debug (`-v`),
/// then trace (`-vv` and up).
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Only the binary calls this.
pub fn init(verbosity: u8) -> Result<(), String> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}
