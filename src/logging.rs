//! Tracing setup for the command-line tool.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber; stdout stays reserved for the documents.
///
/// The level follows the `-v` count unless `RUST_LOG` is set.
pub fn init(verbosity: u8) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
}

#[cfg(test)]
pub(crate) use capture::capture_logs;
