//! Events emitted by the game state for score and status sinks.

use serde::Serialize;

/// Something a host may want to display or log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Score changed (also sent after a reset)
    ScoreChanged { score: u32 },
    /// The active piece was written into the grid
    PieceLocked { lines_cleared: u32 },
    /// A freshly spawned piece collided; the session is over
    GameOver { final_score: u32 },
}
