//! Diagnostic tracing, written to stderr.
//!
//! Messages meant for the operator (usage errors, failed `cd`) go through
//! [`crate::io::Streams`] and are printed whatever the filter says.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter such as `minish=debug`.
pub const LOG_ENV: &str = "MINISH_LOG";

/// Installs the global subscriber. `MINISH_LOG` wins over `default_filter`.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
