//! **mazer-core** — core types for grid mazes.
//!
//! This crate provides the foundational types used across the *mazer*
//! workspace: geometry primitives, the passable/blocked occupancy
//! [`Grid`], and the [`ConfigError`] reported for degenerate setups.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{ConfigError, ConfigResult};
pub use geom::{Position, Range};
pub use grid::Grid;
