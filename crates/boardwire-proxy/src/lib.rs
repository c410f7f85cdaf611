//! `Boardwire` proxy.
//!
//! Local HTTP front for a remote board game API: classifies inbound requests
//! into typed commands, forwards them with the configured bearer credential,
//! and relays live NDJSON game streams to the caller.

pub mod command;
pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod upstream;

pub use command::{Command, Route};
pub use config::{ProxyConfig, RelaySettings};
pub use error::ProxyError;
pub use relay::{BoardObserver, LoggingObserver, RecordPipeline, RelayEngine};
pub use routes::{AppState, build_router};
pub use upstream::{LichessClient, UpstreamReply};
