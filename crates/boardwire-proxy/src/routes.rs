//! HTTP front: the command dispatcher.

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info, warn};

use crate::command::{Command, Route};
use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::relay::{BoardObserver, RelayEngine};
use crate::upstream::{LichessClient, UpstreamReply};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<LichessClient>,
    pub relay: Arc<RelayEngine>,
}

impl AppState {
    /// Build the client and relay engine from configuration.
    pub fn new(config: &ProxyConfig, observer: Arc<dyn BoardObserver>) -> Result<Self, ProxyError> {
        let client = Arc::new(LichessClient::new(&config.upstream)?);
        let relay = Arc::new(RelayEngine::new(
            Arc::clone(&client),
            observer,
            config.relay,
        ));
        Ok(Self { client, relay })
    }
}

/// Build the router. All routing goes through [`Route::classify`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}

async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    match Route::classify(&method, uri.path()) {
        Route::Preflight => StatusCode::NO_CONTENT.into_response(),
        Route::NotFound => {
            debug!(%method, path = uri.path(), "No route");
            (StatusCode::NOT_FOUND, axum::Json(json!({ "error": "not found" }))).into_response()
        }
        Route::Command(command) => run_command(&state, command, &body).await,
    }
}

async fn run_command(state: &AppState, command: Command, body: &Bytes) -> Response {
    let operation = command.operation();
    let result = match command {
        Command::StreamOpen { game_id } => {
            info!(operation, game_id = %game_id, "Opening relay");
            return state.relay.open(&game_id).await;
        }
        Command::MoveSubmit { game_id, mv } => {
            info!(operation, game_id = %game_id, mv = %mv, "Forwarding move");
            state.client.make_move(&game_id, &mv).await
        }
        Command::ChallengeAi => match json_body(body) {
            Ok(payload) => state.client.challenge_ai(payload).await,
            Err(e) => Err(e),
        },
        Command::ChallengeOpen => match json_body(body) {
            Ok(payload) => state.client.challenge_open(payload).await,
            Err(e) => Err(e),
        },
        Command::AccountPlaying => state.client.account_playing().await,
        Command::Account => state.client.account().await,
    };

    respond(operation, result)
}

fn respond(operation: &str, result: Result<UpstreamReply, ProxyError>) -> Response {
    match result {
        Ok(reply) => {
            debug!(operation, status = %reply.status, bytes = reply.body.len(), "Relaying reply");
            reply.into_response()
        }
        Err(e) => {
            warn!(operation, error = %e, "Command failed");
            e.into_response()
        }
    }
}

/// Validate an optional JSON object body, returning the original bytes.
fn json_body(body: &Bytes) -> Result<Option<Bytes>, ProxyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ProxyError::BadRequest(format!("invalid JSON body: {e}")))?;
    if !value.is_object() {
        return Err(ProxyError::BadRequest("JSON body must be an object".into()));
    }
    Ok(Some(body.clone()))
}
