//! `Boardwire` Core Library
//!
//! Transport-free pieces shared by the proxy:
//! - NDJSON line buffering for chunked upstream bodies
//! - Board game stream record decoding
//! - Credential and upstream configuration values
//! - Common error types

pub mod config;
pub mod error;
pub mod ndjson;
pub mod tracing_init;

pub use config::{Credential, UpstreamConfig};
pub use error::{Error, Result};
