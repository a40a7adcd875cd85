//! Terminal input module.
//!
//! Maps `crossterm` key events into [`InputCommand`]s. Anything the game does
//! not bind is ignored.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key_event, InputCommand};
