//! Generic graph search over user supplied state spaces.
//!
//! Two strategies are provided, [`dfs`] and [`a_star`]. Both take a start state, a goal predicate
//! and a move generator, A* also takes a [`Heuristic`](heuristic::Heuristic). A successful search
//! returns a [`Solution`], from which [`select_path`] rebuilds the path from the start to the goal.
//!
//! [`grid`] contains a rectangular maze with blocked cells that can be searched this way.

pub mod array;
pub mod dims;
pub mod frontier;
pub mod grid;
pub mod heuristic;
pub mod node;
pub mod progress;
pub mod search;

pub use search::{a_star, dfs, select_path, SearchError, Searcher, Solution};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub(crate) mod collections {
    #[cfg(feature = "hashbrown")]
    pub use hashbrown::{HashMap, HashSet};
    #[cfg(not(feature = "hashbrown"))]
    pub use std::collections::{HashMap, HashSet};
}
