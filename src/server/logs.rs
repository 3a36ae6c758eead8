use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter: info for everything, debug for this crate.
const DEFAULT_FILTER: &str = "info,roster=debug";

/// Initializes `tracing_subscriber` with a stdout layer.
///
/// Log levels are controlled by the `RUST_LOG` environment variable, falling back to
/// `info,roster=debug` when it is unset or unparsable.
pub fn setup_logging() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
