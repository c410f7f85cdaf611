//! Logging setup for `boardwire-proxy`.
//!
//! Relay sessions log open/close at `info`, per-chunk activity at `debug`,
//! and skipped records at `warn`; [`DEFAULT_FILTER`] keeps the first and last
//! visible when `RUST_LOG` is unset.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "boardwire_proxy=info,boardwire_core=info";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter`. With `log_json` every event is one
/// JSON object per line, so relay logs can be shipped next to the NDJSON
/// they describe.
pub fn init_tracing(default_filter: &str, log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(env_filter);
    if log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
