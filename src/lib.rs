//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, integration
//! tests, and benchmarks share one import path.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
