//! Terminal front end.
//!
//! Renders core [`Frame`](blockfall_core::Frame)s into a simple framebuffer and
//! flushes that to a crossterm backend. The view is pure; only the renderer
//! touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
