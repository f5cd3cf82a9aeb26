//! Logging setup for the tagdeploy binary.
//!
//! Logs go to stderr only; stdout carries the published path (or the JSON
//! event stream) and nothing else.

use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter used for a given `-v` count when `RUST_LOG` is not set
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "tagdeploy=info,warn",
        2 => "tagdeploy=debug,info",
        _ => "trace",
    }
}

/// Initialize tracing with a stderr writer.
///
/// `RUST_LOG` wins over the verbosity count.
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(verbose > 1)
                .with_filter(filter),
        )
        .try_init()?;

    Ok(())
}
