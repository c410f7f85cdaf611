//! Consumers of decoded game stream records.

use boardwire_core::ndjson::{BoardUpdate, GameEvent};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Receives structured records from a relay session.
///
/// Called from the session's pump task; implementations must not block.
pub trait BoardObserver: Send + Sync {
    /// A live-update record carrying the move history arrived.
    fn on_board_update(&self, update: &BoardUpdate);

    /// A record of any other kind arrived. Ignored unless overridden.
    fn on_unhandled(&self, _game_id: &str, _event: &GameEvent) {}
}

/// Logs every update; the binary's default consumer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl BoardObserver for LoggingObserver {
    fn on_board_update(&self, update: &BoardUpdate) {
        info!(
            game_id = %update.game_id,
            ply = update.moves.len(),
            last_move = update.moves.last().map_or("", String::as_str),
            status = %update.status,
            "Board update"
        );
    }

    fn on_unhandled(&self, game_id: &str, event: &GameEvent) {
        debug!(game_id, kind = event.kind(), "Unhandled record kind");
    }
}

impl BoardObserver for mpsc::UnboundedSender<BoardUpdate> {
    fn on_board_update(&self, update: &BoardUpdate) {
        // A dropped receiver only means nobody is listening any more.
        let _ = self.send(update.clone());
    }
}
