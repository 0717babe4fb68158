//! # Logging Setup
//!
//! Builds a `tracing` dispatcher from an explicit verbosity and output sink. Nothing is
//! installed globally: callers scope the dispatcher to their work, e.g. with
//! `tracing::instrument::WithSubscriber::with_subscriber`.

use tracing::{level_filters::LevelFilter, Dispatch};
use tracing_subscriber::{fmt, fmt::MakeWriter, EnvFilter};

/// Verbosity and sink for diagnostics.
#[derive(Debug, Clone)]
pub struct LogConfig<W> {
    /// Raises the default level from `warn` to `info`.
    pub verbose: bool,
    pub writer: W,
}

impl LogConfig<fn() -> std::io::Stderr> {
    /// Logs to standard error, keeping standard output free for results.
    pub fn stderr(verbose: bool) -> Self {
        Self {
            verbose,
            writer: std::io::stderr,
        }
    }
}

impl<W> LogConfig<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    pub fn default_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::INFO
        } else {
            LevelFilter::WARN
        }
    }

    /// Builds the dispatcher. `RUST_LOG` directives are applied on top of the default level.
    pub fn into_dispatch(self) -> Dispatch {
        let filter = EnvFilter::builder()
            .with_default_directive(self.default_level().into())
            .from_env_lossy();

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(self.writer)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();

        Dispatch::new(subscriber)
    }
}
