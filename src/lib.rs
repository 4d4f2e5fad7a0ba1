//! # grid_search
//!
//! Six classic search strategies on a bounded 4-connected grid of free and wall cells:
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [greedy best-first](https://en.wikipedia.org/wiki/Best-first_search),
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), a bounded
//! [iterative deepening A*](https://en.wikipedia.org/wiki/Iterative_deepening_A*) and a random
//! walk. All of them expand neighbours in the order Up, Left, Down, Right and share the same
//! bookkeeping, so their visited logs and paths can be compared directly.
//!
//! The informed strategies use the Manhattan distance to the goal as heuristic and never
//! reopen a cell once it has been reached: the first route found to a cell is the one kept.
//!
//! ```
//! use grid_search::{search, Algorithm, Grid};
//! use grid_util::point::Point;
//!
//! let grid = Grid::builder(3, 3)
//!     .start(Point::new(0, 0))
//!     .goal(Point::new(2, 2))
//!     .wall(Point::new(1, 1))
//!     .build()
//!     .unwrap();
//! let result = search(&grid, Point::new(2, 2), Algorithm::AStar).unwrap();
//! assert_eq!(result.path.len(), 5);
//! ```
pub mod algorithm;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod loader;
pub mod node;
pub mod visited;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use config::SearchConfig;
pub use direction::Move;
pub use engine::{
    search, search_all_goals, Outcome, PathStep, SearchEngine, SearchResult, SearchState,
};
pub use error::{GridError, LoadError};
pub use grid::{Grid, GridBuilder, Target};
pub use node::{NodeArena, NodeId, SearchNode};
pub use visited::VisitedSet;
