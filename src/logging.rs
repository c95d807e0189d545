use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system.
///
/// All diagnostics go to stderr so that redirecting stdout captures only the
/// JSON output.
pub fn init_logging() {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("tome_scraper=info".parse().unwrap()))
        .with(stderr_layer)
        .init();
}
