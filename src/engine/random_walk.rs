use super::SearchEngine;
use crate::grid::Target;
use crate::node::{NodeId, SearchNode};
use itertools::Itertools;
use log::warn;
use rand::seq::SliceRandom;

impl SearchEngine {
    /// Moves to a uniformly chosen open neighbour at every step, revisits allowed, until the
    /// goal is reached or the step budget is spent. The goal test happens before each move, so
    /// a goal first entered by the final budgeted move is not recognised. Every step becomes a
    /// node whose parent is the previous step, so the reconstructed path is the walk itself.
    pub(super) fn walk(&mut self, target: &Target) -> Option<NodeId> {
        let mut current = self.arena.push(SearchNode::root(target.start()));
        for _ in 0..self.config.step_budget {
            let node = *self.arena.get(current);
            if target.is_goal(node.cell) {
                return Some(current);
            }
            let moves = target.neighbors(node.cell).collect_vec();
            let Some(&(mv, cell)) = moves.choose(&mut self.rng) else {
                warn!("Random walk is boxed in at {}", node.cell);
                return None;
            };
            current = self.arena.push(SearchNode {
                cell,
                parent: Some(current),
                cost: node.cost + 1.0,
                direction: Some(mv),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::grid::Grid;
    use grid_util::point::Point;

    #[test]
    fn walk_stays_on_free_adjacent_cells() {
        let grid = Grid::builder(4, 4)
            .start(Point::new(0, 0))
            .goal(Point::new(3, 3))
            .wall_rect(1, 1, 2, 2)
            .build()
            .unwrap();
        let target = grid.target_index(0).unwrap();
        let mut engine = SearchEngine::with_config(SearchConfig::default().with_seed(7));
        engine.walk(&target);
        let nodes = engine.arena.nodes();
        assert!(nodes.len() <= engine.config.step_budget + 1);
        for pair in nodes.windows(2) {
            let (a, b) = (pair[0].cell, pair[1].cell);
            assert!(!grid.is_wall(b));
            assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
        }
    }

    #[test]
    fn walk_gives_up_after_budget() {
        // The goal is sealed off, so the walk can only run out of steps.
        let grid = Grid::builder(5, 1)
            .start(Point::new(0, 0))
            .goal(Point::new(4, 0))
            .wall(Point::new(3, 0))
            .build()
            .unwrap();
        let target = grid.target_index(0).unwrap();
        let config = SearchConfig {
            step_budget: 50,
            ..SearchConfig::default()
        };
        let mut engine = SearchEngine::with_config(config.with_seed(1));
        assert_eq!(engine.walk(&target), None);
        assert_eq!(engine.arena.len(), 51);
    }

    #[test]
    fn goal_reached_by_last_move_is_not_counted() {
        // Right is the only move out of the start.
        let grid = Grid::builder(2, 1)
            .start(Point::new(0, 0))
            .goal(Point::new(1, 0))
            .build()
            .unwrap();
        let target = grid.target_index(0).unwrap();
        let budget = |step_budget| SearchConfig {
            step_budget,
            ..SearchConfig::default()
        };

        let mut engine = SearchEngine::with_config(budget(1).with_seed(3));
        assert_eq!(engine.walk(&target), None);
        assert_eq!(engine.arena.len(), 2);

        let mut engine = SearchEngine::with_config(budget(2).with_seed(3));
        let goal = engine.walk(&target).unwrap();
        assert_eq!(engine.arena.get(goal).cell, Point::new(1, 0));
        assert_eq!(engine.arena.len(), 2);

        let mut engine = SearchEngine::with_config(budget(0).with_seed(3));
        assert_eq!(engine.walk(&target), None);
        assert_eq!(engine.arena.len(), 1);
    }

    #[test]
    fn boxed_in_start_fails_at_once() {
        let grid = Grid::builder(3, 1)
            .start(Point::new(0, 0))
            .goal(Point::new(2, 0))
            .wall(Point::new(1, 0))
            .build()
            .unwrap();
        let target = grid.target_index(0).unwrap();
        let mut engine = SearchEngine::new();
        assert_eq!(engine.walk(&target), None);
        assert_eq!(engine.arena.len(), 1);
    }
}
