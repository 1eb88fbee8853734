//! Random maze generation for mazer: configuration and a
//! regenerate-until-solvable generator.

pub mod config;
pub mod mapgen;

pub use config::MazeConfig;
pub use mapgen::{generate, generate_maze, MazeGen};
