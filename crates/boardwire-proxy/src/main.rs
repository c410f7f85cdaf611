//! Boardwire proxy server
//!
//! Relays a remote board game stream and game commands to local clients.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use boardwire_core::config::DEFAULT_API_BASE;
use boardwire_core::ndjson::DEFAULT_MAX_LINE_BYTES;
use boardwire_core::tracing_init::{DEFAULT_FILTER, init_tracing};
use boardwire_core::{Credential, UpstreamConfig};
use boardwire_proxy::config::DEFAULT_CHANNEL_CAPACITY;
use boardwire_proxy::{AppState, LoggingObserver, ProxyConfig, RelaySettings, build_router};

#[derive(Parser, Debug)]
#[command(name = "boardwire-proxy")]
#[command(version, about = "Boardwire proxy - board game stream and command relay")]
struct Args {
    /// Bearer token for the remote API.
    #[arg(long, env = "LICHESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:3001", env = "LISTEN_ADDR")]
    addr: SocketAddr,

    /// Remote API origin.
    #[arg(long, default_value = DEFAULT_API_BASE, env = "LICHESS_API_BASE")]
    api_base: String,

    /// Largest partial NDJSON line buffered per stream, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_BYTES, env = "BOARDWIRE_MAX_LINE_BYTES")]
    max_line_bytes: usize,

    /// Chunks queued towards a slow caller before upstream reads pause.
    #[arg(long, default_value_t = DEFAULT_CHANNEL_CAPACITY)]
    relay_buffer: usize,

    /// Output logs as JSON (for structured log aggregation).
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(DEFAULT_FILTER, args.log_json);

    let credential = match Credential::new(args.token.as_deref()) {
        Ok(credential) => credential,
        Err(e) => {
            error!(error = %e, "Missing credential");
            return Err(e.into());
        }
    };

    let config = ProxyConfig {
        upstream: UpstreamConfig::new(&args.api_base, credential)?,
        relay: RelaySettings {
            max_line_bytes: args.max_line_bytes,
            channel_capacity: args.relay_buffer,
        },
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %args.addr,
        api_base = %config.upstream.api_base,
        "Starting boardwire-proxy"
    );

    let state = AppState::new(&config, Arc::new(LoggingObserver))?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}
