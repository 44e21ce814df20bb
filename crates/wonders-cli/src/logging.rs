//! Log output for both modes.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr so the game's own
/// output on stdout stays clean.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `warn` when `quiet`.
pub fn init(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn default_directive(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}
