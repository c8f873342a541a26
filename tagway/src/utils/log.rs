//! Diagnostics go to stderr, stdout is reserved for the status lines.
use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parses one of `error`, `warn`, `info`, `debug` or `trace`, ignoring case.
#[must_use]
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// `RUST_LOG` directives take precedence over `level`.
pub fn get_subscriber(level: LevelFilter) -> impl Subscriber {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
}

/// Installs the global subscriber with the configured level.
pub fn setup_logging(level: &str) {
    let parsed = parse_log_level(level);
    let subscriber = get_subscriber(parsed.unwrap_or(DEFAULT_LEVEL));
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if parsed.is_none() {
        tracing::warn!("Unknown log level `{level}`, falling back to {DEFAULT_LEVEL}");
    }
}
