use core::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The search strategies the engine can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    AStar,
    IterativeDeepeningAStar,
    RandomWalk,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
        Algorithm::IterativeDeepeningAStar,
        Algorithm::RandomWalk,
    ];

    /// Short tag used on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
            Algorithm::GreedyBestFirst => "GBFS",
            Algorithm::AStar => "AS",
            Algorithm::IterativeDeepeningAStar => "IDAS",
            Algorithm::RandomWalk => "RW",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "Depth First Search",
            Algorithm::BreadthFirst => "Breadth First Search",
            Algorithm::GreedyBestFirst => "Greedy Best First Search",
            Algorithm::AStar => "A* Search",
            Algorithm::IterativeDeepeningAStar => "Iterative Depth A* Search",
            Algorithm::RandomWalk => "Random Walk Search",
        }
    }

    /// Whether two runs on the same grid and goal always produce the same result.
    pub fn is_deterministic(self) -> bool {
        self != Algorithm::RandomWalk
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown search method '{0}', expected one of DFS, BFS, GBFS, AS, IDAS, RW")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses a tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
