//! Tracing setup for the command line binary

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{DEFAULT_LOG_DIRECTIVE, LogFormat};

/// Install the global subscriber writing to stderr.
///
/// The returned guard flushes buffered log lines when dropped and must be
/// kept alive until the program exits.
pub fn init(format: LogFormat) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let registry = tracing_subscriber::registry()
        .with(env_filter(std::env::var("RUST_LOG").ok().as_deref()));

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(writer).with_target(false))
            .init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_writer(writer)).init(),
    }

    guard
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}
