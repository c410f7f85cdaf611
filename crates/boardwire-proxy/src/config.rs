//! Runtime configuration injected into the dispatcher and relay engine.

use boardwire_core::UpstreamConfig;
use boardwire_core::ndjson::DEFAULT_MAX_LINE_BYTES;

/// Default number of chunks queued towards a slow caller.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Per-session relay tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaySettings {
    /// Largest partial NDJSON line kept before it is dropped.
    pub max_line_bytes: usize,
    /// Chunks buffered towards the caller before upstream reads pause.
    pub channel_capacity: usize,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Complete proxy configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub upstream: UpstreamConfig,
    pub relay: RelaySettings,
}
