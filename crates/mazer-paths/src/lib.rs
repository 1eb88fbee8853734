//! Path search on grid mazes.
//!
//! This crate provides the algorithmic core of *mazer*:
//!
//! - a **reachability check** ([`is_solvable`]) used to accept or reject
//!   generated mazes,
//! - a unified **search engine** ([`search`], [`Search`]) running
//!   depth-first, breadth-first, A\* or Dijkstra over one loop, with the
//!   pop discipline chosen by a frontier selected once per search,
//! - **path reconstruction** from the predecessor map built during search.
//!
//! Searches report their exploration order so a presentation layer can
//! animate progress; [`Search`] is a lazy iterator over visit events for
//! callers that want to pull steps at their own pace.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | reachability |
//! | [`WeightedPather`] : [`Pather`] | cost bookkeeping |
//! | [`AstarPather`] : [`WeightedPather`] | the search engine |
//!
//! [`Grid`](mazer_core::Grid) implements all three with unit step costs and
//! the Manhattan heuristic.

mod algorithm;
mod frontier;
mod heuristic;
mod reach;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use heuristic::manhattan;
pub use reach::{distance, is_solvable, reachable};
pub use search::{Search, SearchResult, SearchStatus, reconstruct_path, search};
pub use traits::{AstarPather, Pather, WeightedPather};
