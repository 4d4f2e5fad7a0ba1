//! Runs the search strategies of [Algorithm] against a [Target] and reports what they found.
//!
//! Every strategy logs the nodes it creates in a [NodeArena]; parents are stored as
//! [NodeId]s, so reconstructing a path is a walk over indices. The uninformed and informed
//! queue-based strategies share one expansion loop, parameterized by the
//! frontier and the child key formula.
mod best_first;
mod depth_first;
mod random_walk;

use crate::algorithm::Algorithm;
use crate::config::SearchConfig;
use crate::direction::Move;
use crate::error::GridError;
use crate::frontier::{FifoFrontier, PriorityFrontier};
use crate::grid::{Grid, Target};
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::visited::VisitedSet;
use best_first::Expansion;
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Lifecycle of a [SearchEngine] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached; the path is non-empty.
    Succeeded,
    /// The frontier, step budget or depth ceiling ran out; the path is empty.
    Failed,
}

/// One cell of a found path, with the move that led into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStep {
    pub cell: Point,
    /// [None] for the start cell.
    pub direction: Option<Move>,
    pub cost: f64,
}

impl From<SearchNode> for PathStep {
    fn from(node: SearchNode) -> Self {
        PathStep {
            cell: node.cell,
            direction: node.direction,
            cost: node.cost,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub goal: Point,
    pub outcome: Outcome,
    /// Nodes in the order they were logged as visited.
    pub visited: Vec<SearchNode>,
    /// Start to goal inclusive, or empty on failure.
    pub path: Vec<PathStep>,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }
    pub fn states_explored(&self) -> usize {
        self.visited.len()
    }
    pub fn path_cells(&self) -> Vec<Point> {
        self.path.iter().map(|s| s.cell).collect_vec()
    }
    pub fn visited_cells(&self) -> Vec<Point> {
        self.visited.iter().map(|n| n.cell).collect_vec()
    }
    /// The moves that walk the path from the start, one fewer than the path length.
    pub fn moves(&self) -> Vec<Move> {
        self.path.iter().filter_map(|s| s.direction).collect_vec()
    }
}

/// Runs searches. All per-run state is cleared at the start of each run, so one engine can
/// serve any number of searches in sequence.
pub struct SearchEngine {
    config: SearchConfig,
    rng: StdRng,
    arena: NodeArena,
    visited: VisitedSet,
    state: SearchState,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::with_config(SearchConfig::default())
    }
}

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine::default()
    }
    pub fn with_config(config: SearchConfig) -> SearchEngine {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        SearchEngine {
            config,
            rng,
            arena: NodeArena::new(),
            visited: VisitedSet::new(),
            state: SearchState::Initialized,
        }
    }
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
    pub fn state(&self) -> SearchState {
        self.state
    }

    fn reset(&mut self) {
        self.arena.clear();
        self.visited.clear();
        self.state = SearchState::Initialized;
    }

    /// Searches from the grid's start towards the target's goal using `algorithm`.
    pub fn run(&mut self, target: &Target, algorithm: Algorithm) -> SearchResult {
        self.reset();
        self.state = SearchState::Running;
        info!("{} from {} to {}", algorithm, target.start(), target.goal());
        let found = match algorithm {
            Algorithm::DepthFirst => self.expand_depth_first(target),
            Algorithm::BreadthFirst => {
                let mut frontier = FifoFrontier::new();
                self.expand(target, &mut frontier, Expansion::Uniform).goal
            }
            Algorithm::GreedyBestFirst => {
                let mut frontier: PriorityFrontier<f64> = PriorityFrontier::new();
                self.expand(target, &mut frontier, Expansion::Greedy).goal
            }
            Algorithm::AStar => {
                let mut frontier: PriorityFrontier<f64> = PriorityFrontier::new();
                self.expand(target, &mut frontier, Expansion::AStar).goal
            }
            Algorithm::IterativeDeepeningAStar => self.expand_iterative_deepening(target),
            Algorithm::RandomWalk => self.walk(target),
        };
        self.finish(target, algorithm, found)
    }

    pub fn depth_first(&mut self, target: &Target) -> SearchResult {
        self.run(target, Algorithm::DepthFirst)
    }
    pub fn breadth_first(&mut self, target: &Target) -> SearchResult {
        self.run(target, Algorithm::BreadthFirst)
    }
    pub fn greedy_best_first(&mut self, target: &Target) -> SearchResult {
        self.run(target, Algorithm::GreedyBestFirst)
    }
    pub fn astar(&mut self, target: &Target) -> SearchResult {
        self.run(target, Algorithm::AStar)
    }
    pub fn iterative_deepening_astar(&mut self, target: &Target) -> SearchResult {
        self.run(target, Algorithm::IterativeDeepeningAStar)
    }
    pub fn random_walk(&mut self, target: &Target) -> SearchResult {
        self.run(target, Algorithm::RandomWalk)
    }

    fn finish(
        &mut self,
        target: &Target,
        algorithm: Algorithm,
        found: Option<NodeId>,
    ) -> SearchResult {
        // The walk revisits cells freely, so its log is the walk itself rather than the set.
        let visited = if algorithm == Algorithm::RandomWalk {
            self.arena.nodes().to_vec()
        } else {
            self.visited.log().map(|id| *self.arena.get(id)).collect_vec()
        };
        let (outcome, path) = match found {
            Some(goal_node) => {
                self.state = SearchState::Succeeded;
                let path = self
                    .arena
                    .reconstruct(goal_node)
                    .into_iter()
                    .map(PathStep::from)
                    .collect_vec();
                info!(
                    "{} reached {} in {} steps, {} states explored",
                    algorithm,
                    target.goal(),
                    path.len() - 1,
                    visited.len()
                );
                (Outcome::Succeeded, path)
            }
            None => {
                self.state = SearchState::Failed;
                warn!(
                    "{} found no path to {} after exploring {} states",
                    algorithm,
                    target.goal(),
                    visited.len()
                );
                (Outcome::Failed, Vec::new())
            }
        };
        SearchResult {
            algorithm,
            goal: target.goal(),
            outcome,
            visited,
            path,
        }
    }
}

/// Runs `algorithm` on a fresh engine towards `goal`, which must be one of the grid's goals.
pub fn search(grid: &Grid, goal: Point, algorithm: Algorithm) -> Result<SearchResult, GridError> {
    let target = grid.target(goal)?;
    Ok(SearchEngine::new().run(&target, algorithm))
}

/// Searches for every goal of the grid in turn, in declaration order.
pub fn search_all_goals(grid: &Grid, algorithm: Algorithm) -> Vec<SearchResult> {
    let mut engine = SearchEngine::new();
    grid.targets()
        .map(|target| engine.run(&target, algorithm))
        .collect_vec()
}
