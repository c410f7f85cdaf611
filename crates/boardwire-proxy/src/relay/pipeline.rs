//! Chunk-to-record decoding for one relay session.

use std::sync::Arc;

use boardwire_core::ndjson::{GameEvent, LineBuffer, parse_line};
use tracing::warn;

use super::observer::BoardObserver;

/// Owns a session's line buffer and feeds decoded records to the observer.
pub struct RecordPipeline {
    game_id: String,
    lines: LineBuffer,
    observer: Arc<dyn BoardObserver>,
}

impl RecordPipeline {
    pub fn new(game_id: &str, max_line_bytes: usize, observer: Arc<dyn BoardObserver>) -> Self {
        Self {
            game_id: game_id.to_string(),
            lines: LineBuffer::with_max_line(max_line_bytes),
            observer,
        }
    }

    /// Consume one upstream chunk.
    ///
    /// Returns one decode outcome per complete non-empty line, in order.
    /// Failed lines are logged and skipped; later lines still decode.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<boardwire_core::Result<GameEvent>> {
        self.lines
            .push(chunk)
            .into_iter()
            .map(|line| {
                let decoded = parse_line(&line);
                match &decoded {
                    Ok(event) => self.deliver(event),
                    Err(e) => warn!(
                        game_id = %self.game_id,
                        error = %e,
                        line_len = line.len(),
                        "Skipping undecodable record"
                    ),
                }
                decoded
            })
            .collect()
    }

    /// End of stream; returns the size of any incomplete trailing line.
    pub fn finish(&mut self) -> Option<usize> {
        self.lines.finish().map(|tail| tail.len())
    }

    fn deliver(&self, event: &GameEvent) {
        match event.board_update(&self.game_id) {
            Some(update) => self.observer.on_board_update(&update),
            None => self.observer.on_unhandled(&self.game_id, event),
        }
    }
}
