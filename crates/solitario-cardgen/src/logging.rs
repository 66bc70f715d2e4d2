use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is unset; quiet enough that a normal run logs nothing.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Keeps the background stderr writer alive; drop it last in `main`.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Route `tracing` events to stderr. Stdout is reserved for card markup.
pub fn init_logging(level: Level) -> LoggingGuard {
    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(std::io::stderr());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);

    LoggingGuard { _guard: guard }
}
