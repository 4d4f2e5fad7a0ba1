//! Error types. A search that finds nothing is not an error; these only cover grids and goal
//! selections that should never have reached the engine.

use grid_util::point::Point;
use thiserror::Error;

/// An invalid grid configuration, rejected before any search starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have a non-zero width and height, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no goal cells")]
    NoGoals,

    #[error("{what} {point} lies outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("start cell {0} is a wall")]
    StartOnWall(Point),

    #[error("goal cell {0} is a wall")]
    GoalOnWall(Point),

    #[error("{0} is not one of the grid's goals")]
    UnknownGoal(Point),

    #[error("goal index {index} out of range, grid has {count} goals")]
    GoalIndexOutOfRange { index: usize, count: usize },
}

/// Failure to read an environment description.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read environment file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid environment: {0}")]
    Grid(#[from] GridError),
}
