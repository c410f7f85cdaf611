//! Per-session upstream pump.

use std::io;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info, warn};

use super::observer::BoardObserver;
use super::pipeline::RecordPipeline;
use crate::config::RelaySettings;
use crate::upstream::{LichessClient, UpstreamReply};

/// Content type of a relayed game stream.
pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Opens game streams and owns nothing per session: every stream gets its
/// own pump task, buffer and channel.
pub struct RelayEngine {
    client: Arc<LichessClient>,
    observer: Arc<dyn BoardObserver>,
    settings: RelaySettings,
}

impl RelayEngine {
    pub fn new(
        client: Arc<LichessClient>,
        observer: Arc<dyn BoardObserver>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            client,
            observer,
            settings,
        }
    }

    /// Open the upstream stream for `game_id` and return the caller's response.
    ///
    /// Connection failures and non-success statuses end the session here;
    /// otherwise a pump task is spawned and the response body streams until
    /// either side closes.
    pub async fn open(&self, game_id: &str) -> Response {
        let upstream = match self.client.open_game_stream(game_id).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(game_id, error = %e, "Game stream connection failed");
                return e.into_response();
            }
        };

        let status = upstream.status();
        if !status.is_success() {
            warn!(game_id, %status, "Game stream rejected upstream");
            return UpstreamReply::read(upstream).await.into_response();
        }

        let (tx, rx) = mpsc::channel(self.settings.channel_capacity.max(1));
        let session = RelaySession {
            game_id: game_id.to_string(),
            upstream,
            pipeline: RecordPipeline::new(
                game_id,
                self.settings.max_line_bytes,
                Arc::clone(&self.observer),
            ),
            tx,
        };
        tokio::spawn(session.run());

        (
            [(CONTENT_TYPE, NDJSON_CONTENT_TYPE)],
            Body::from_stream(ReceiverStream::new(rx)),
        )
            .into_response()
    }
}

/// State owned by one pump task.
struct RelaySession {
    game_id: String,
    upstream: reqwest::Response,
    pipeline: RecordPipeline,
    tx: mpsc::Sender<io::Result<Bytes>>,
}

enum Stop {
    CallerGone,
    UpstreamEnded,
    UpstreamFailed(reqwest::Error),
}

impl RelaySession {
    async fn run(mut self) {
        info!(game_id = %self.game_id, "Relay session started");
        let mut relayed: u64 = 0;

        let stop = loop {
            let next = tokio::select! {
                () = self.tx.closed() => break Stop::CallerGone,
                chunk = self.upstream.chunk() => chunk,
            };

            let chunk = match next {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break Stop::UpstreamEnded,
                Err(e) => break Stop::UpstreamFailed(e),
            };

            debug!(game_id = %self.game_id, bytes = chunk.len(), "Upstream chunk");
            relayed += chunk.len() as u64;
            self.pipeline.feed(&chunk);

            // Waits while the caller's queue is full, pausing upstream reads.
            if self.tx.send(Ok(chunk)).await.is_err() {
                break Stop::CallerGone;
            }
        };

        if let Some(tail) = self.pipeline.finish() {
            debug!(game_id = %self.game_id, bytes = tail, "Discarding incomplete trailing record");
        }

        match stop {
            Stop::CallerGone => {
                info!(game_id = %self.game_id, relayed, "Caller disconnected, closing upstream");
            }
            Stop::UpstreamEnded => {
                info!(game_id = %self.game_id, relayed, "Upstream stream ended");
            }
            Stop::UpstreamFailed(e) => {
                warn!(game_id = %self.game_id, relayed, error = %e, "Upstream stream failed");
            }
        }
        // Dropping `tx` ends the caller's body cleanly.
    }
}
