use super::SearchEngine;
use crate::direction::Move;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::grid::Target;
use crate::node::{NodeId, SearchNode};
use grid_util::point::Point;
use log::debug;
use num_traits::Zero;

/// How a child's cost and frontier key are derived from its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) enum Expansion {
    /// Cost is the step count; the key is unused by the FIFO frontier.
    Uniform,
    /// Key and cost are both the child's heuristic plus the move tie-break.
    Greedy,
    /// Step count plus heuristic plus tie-break.
    AStar,
    /// As [Expansion::AStar], but children whose step count plus heuristic is not below the
    /// bound are dropped.
    Bounded(f64),
}

impl Expansion {
    /// Returns `(cost, key)` for a child, or [None] if the bound rejects it.
    fn child(
        self,
        target: &Target,
        parent: &SearchNode,
        mv: Move,
        cell: Point,
    ) -> Option<(f64, f64)> {
        let h = target.heuristic(cell) as f64;
        let steps = parent.cost + 1.0;
        match self {
            Expansion::Uniform => Some((steps, steps)),
            Expansion::Greedy => {
                let key = h + mv.tiebreak();
                Some((key, key))
            }
            Expansion::AStar => Some((steps, steps + h + mv.tiebreak())),
            Expansion::Bounded(bound) => {
                let estimate = steps + h;
                (estimate < bound).then(|| (steps, estimate + mv.tiebreak()))
            }
        }
    }
}

pub(super) struct Expanded {
    pub goal: Option<NodeId>,
    /// Whether any child was dropped by a bound.
    pub pruned: bool,
}

impl SearchEngine {
    /// Pops nodes until the goal is popped or the frontier runs dry. Children are logged as
    /// visited when pushed, so each cell enters the frontier at most once.
    pub(super) fn expand<F>(
        &mut self,
        target: &Target,
        frontier: &mut F,
        expansion: Expansion,
    ) -> Expanded
    where
        F: Frontier<Key = f64>,
    {
        let start = target.start();
        let root = self.arena.push(SearchNode::root(start));
        self.visited.insert(start, root);
        frontier.push(root, Zero::zero());

        let mut pruned = false;
        while let Some(id) = frontier.pop() {
            let node = *self.arena.get(id);
            if target.is_goal(node.cell) {
                return Expanded {
                    goal: Some(id),
                    pruned,
                };
            }
            for (mv, cell) in target.neighbors(node.cell) {
                if self.visited.contains(&cell) {
                    continue;
                }
                let Some((cost, key)) = expansion.child(target, &node, mv, cell) else {
                    pruned = true;
                    continue;
                };
                let child = self.arena.push(SearchNode {
                    cell,
                    parent: Some(id),
                    cost,
                    direction: Some(mv),
                });
                self.visited.insert(cell, child);
                frontier.push(child, key);
            }
        }
        Expanded { goal: None, pruned }
    }

    /// Bounded passes with bounds 1, 2, 3, ... below the configured ceiling. Each failed pass
    /// clears the visited log. A pass that dropped nothing has seen every reachable cell, so
    /// larger bounds cannot help and the search gives up early.
    pub(super) fn expand_iterative_deepening(&mut self, target: &Target) -> Option<NodeId> {
        let mut frontier: PriorityFrontier<f64> = PriorityFrontier::new();
        for bound in 1..self.config.depth_ceiling {
            debug!("Iterative deepening pass with bound {}", bound);
            let pass = self.expand(target, &mut frontier, Expansion::Bounded(bound as f64));
            if pass.goal.is_some() {
                return pass.goal;
            }
            self.arena.clear();
            self.visited.clear();
            frontier.clear();
            if !pass.pruned {
                debug!("Bound {} pruned nothing, goal is unreachable", bound);
                break;
            }
        }
        None
    }
}
