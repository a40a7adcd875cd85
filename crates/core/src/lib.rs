//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every game rule and all mutable game state. It has no
//! terminal, timer, or I/O dependencies:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Headless**: rendering goes through a pure [`Frame`] description
//! - **Host-clocked**: gravity advances only when the host calls [`GameState::tick`]
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 playfield with collision, placement, and row clearing
//! - [`pieces`]: shape matrices, the 7-piece catalogue, and rotation
//! - [`game_state`]: the session object (spawn, move, rotate, drop, lock, score)
//! - [`gravity`]: host-driven gravity timer
//! - [`frame`]: serializable render description
//! - [`events`]: score and game-over notifications
//! - [`rng`]: seeded uniform piece selection
//! - [`config`]: tunables and their validation
//!
//! # Game Rules
//!
//! - Pieces spawn at the top row, horizontally centered
//! - Rotation is a 90° clockwise transpose; a blocked rotation is discarded (no kicks)
//! - A piece that cannot move down locks immediately (no lock delay)
//! - Every full row is cleared and scores a fixed amount (10 by default)
//! - The game ends when a freshly spawned piece collides; further input is ignored
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::with_seed(12345));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One gravity interval later the next piece has fallen a row.
//! assert_eq!(game.tick(500), 1);
//! assert_eq!(game.active().y, 1);
//! ```

pub mod config;
pub mod events;
pub mod frame;
pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use events::GameEvent;
pub use frame::{Frame, PieceView};
pub use game_state::{GameState, MAX_PENDING_EVENTS};
pub use gravity::GravityClock;
pub use grid::Grid;
pub use pieces::{get_shape, Piece, Shape};
pub use rng::SimpleRng;
