use tracing_subscriber::{EnvFilter, fmt};

/// Initialise logging to stdout. `RUST_LOG` overrides the default `info`
/// filter.
///
/// Call once, at startup.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
