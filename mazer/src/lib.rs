//! Driver layer for mazer.
//!
//! The algorithmic crates are stateless; this crate holds the state a
//! presentation front end needs (current maze, current search result,
//! current algorithm) and exposes the user commands as plain calls:
//!
//! - [`commands`]: solve / clear / randomize / next-algorithm as pure
//!   functions,
//! - [`Session`]: the same commands applied to explicitly owned state,
//! - [`Playback`]: step-at-a-time replay of a search for animation,
//! - [`render`]: a plain-text view used by the `mazer` binary.

pub mod commands;
pub mod playback;
pub mod render;
pub mod session;

pub use mazer_core::{ConfigError, ConfigResult, Grid, Position};
pub use mazer_gen::MazeConfig;
pub use mazer_paths::{Algorithm, SearchResult};
pub use playback::Playback;
pub use session::{Command, Session};
