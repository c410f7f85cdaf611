//! Remote board game REST API client.
//!
//! Uses reqwest with the bearer credential as a default header. Command
//! calls read the whole reply; the game stream is handed back unread so the
//! relay engine can pull it chunk by chunk.

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use boardwire_core::UpstreamConfig;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap};
use tracing::debug;

use crate::error::ProxyError;

const JSON: &str = "application/json";

/// Remote API client.
#[derive(Debug)]
pub struct LichessClient {
    http: reqwest::Client,
    base: Url,
}

/// A fully read upstream reply, relayed to the caller as-is.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl UpstreamReply {
    /// Read status, content type and body from an upstream response.
    ///
    /// A body that fails to arrive is relayed as empty; the status still
    /// reaches the caller.
    pub async fn read(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let content_type = resp.headers().get(CONTENT_TYPE).cloned();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, %status, "Upstream body unavailable");
                Bytes::new()
            }
        };
        Self {
            status,
            content_type,
            body,
        }
    }
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static(JSON));
        (self.status, [(CONTENT_TYPE, content_type)], self.body).into_response()
    }
}

impl LichessClient {
    /// Create a new client for the configured API origin.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        let base = Url::parse(&config.api_base)
            .map_err(|e| ProxyError::Config(format!("invalid api base: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ProxyError::Config(format!(
                "api base cannot carry a path: {base}"
            )));
        }

        let mut headers = HeaderMap::new();
        let mut token_val = HeaderValue::from_str(&config.credential.bearer())
            .map_err(|_| ProxyError::Config("Invalid token format".into()))?;
        token_val.set_sensitive(true);
        headers.insert(AUTHORIZATION, token_val);

        // reqwest is built with rustls-no-provider; install ring once.
        // `Err` only means a provider is already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base })
    }

    /// Build `{base}/api/{segments...}`, percent-encoding each segment.
    pub(crate) fn api_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    /// Open the board game event stream. The body is left unread.
    pub async fn open_game_stream(&self, game_id: &str) -> Result<reqwest::Response, ProxyError> {
        let url = self.api_url(&["board", "game", "stream", game_id]);
        debug!(%url, "Opening game stream");
        Ok(self.http.get(url).send().await?)
    }

    /// Submit a move token for a game.
    pub async fn make_move(&self, game_id: &str, mv: &str) -> Result<UpstreamReply, ProxyError> {
        let url = self.api_url(&["board", "game", game_id, "move", mv]);
        let resp = self.http.post(url).send().await?;
        Ok(UpstreamReply::read(resp).await)
    }

    /// Challenge the computer opponent.
    pub async fn challenge_ai(&self, body: Option<Bytes>) -> Result<UpstreamReply, ProxyError> {
        self.post_json(&["challenge", "ai"], body).await
    }

    /// Create an open challenge anyone can join.
    pub async fn challenge_open(&self, body: Option<Bytes>) -> Result<UpstreamReply, ProxyError> {
        self.post_json(&["challenge", "open"], body).await
    }

    /// Games the account is currently playing.
    pub async fn account_playing(&self) -> Result<UpstreamReply, ProxyError> {
        self.get(&["account", "playing"]).await
    }

    /// Account profile.
    pub async fn account(&self) -> Result<UpstreamReply, ProxyError> {
        self.get(&["account"]).await
    }

    async fn get(&self, segments: &[&str]) -> Result<UpstreamReply, ProxyError> {
        let resp = self.http.get(self.api_url(segments)).send().await?;
        Ok(UpstreamReply::read(resp).await)
    }

    async fn post_json(
        &self,
        segments: &[&str],
        body: Option<Bytes>,
    ) -> Result<UpstreamReply, ProxyError> {
        let mut req = self.http.post(self.api_url(segments));
        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, JSON).body(body);
        }
        let resp = req.send().await?;
        Ok(UpstreamReply::read(resp).await)
    }
}
