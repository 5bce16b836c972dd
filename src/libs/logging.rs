use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise see [`default_filter`].
pub fn init_logging(verbose: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, is_debug_mode())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Filter used when `RUST_LOG` is unset. In debug mode user-facing messages
/// are info events, so the filter must let them through.
pub fn default_filter(verbose: bool, debug_mode: bool) -> &'static str {
    if verbose || debug_mode {
        "tasklist=debug,warn"
    } else {
        "tasklist=warn"
    }
}
