use super::SearchEngine;
use crate::direction::Move;
use crate::grid::Target;
use crate::node::{NodeId, SearchNode};

impl SearchEngine {
    /// Depth-first search with an explicit stack of `(node, next move index)` frames. A newly
    /// reached cell is logged and entered before its siblings are looked at, which gives the
    /// same visiting order as expanding recursively.
    pub(super) fn expand_depth_first(&mut self, target: &Target) -> Option<NodeId> {
        let start = target.start();
        let root = self.arena.push(SearchNode::root(start));
        self.visited.insert(start, root);
        if target.is_goal(start) {
            return Some(root);
        }

        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let Some(&mv) = Move::ALL.get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let node = *self.arena.get(id);
            let cell = mv.apply(node.cell);
            if target.grid().is_wall(cell) || self.visited.contains(&cell) {
                continue;
            }
            let child = self.arena.push(SearchNode {
                cell,
                parent: Some(id),
                cost: node.cost + 1.0,
                direction: Some(mv),
            });
            self.visited.insert(cell, child);
            if target.is_goal(cell) {
                return Some(child);
            }
            stack.push((child, 0));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use grid_util::point::Point;

    #[test]
    fn backtracks_out_of_dead_ends() {
        // S..G
        // .###
        // ...#
        let grid = Grid::builder(4, 3)
            .start(Point::new(0, 0))
            .goal(Point::new(3, 0))
            .wall_rect(1, 1, 3, 1)
            .wall(Point::new(3, 2))
            .build()
            .unwrap();
        let target = grid.target_index(0).unwrap();
        let mut engine = SearchEngine::new();
        let goal = engine.expand_depth_first(&target).unwrap();
        let cells: Vec<Point> = engine
            .arena
            .reconstruct(goal)
            .iter()
            .map(|n| n.cell)
            .collect();
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
        // The pocket below the start is explored fully before turning right.
        let visited: Vec<Point> = engine
            .visited
            .log()
            .map(|id| engine.arena.get(id).cell)
            .collect();
        assert_eq!(
            visited,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
    }

    #[test]
    fn long_corridor_does_not_recurse() {
        let n = 200_000;
        let grid = Grid::builder(n, 1)
            .start(Point::new(0, 0))
            .goal(Point::new(n as i32 - 1, 0))
            .build()
            .unwrap();
        let target = grid.target_index(0).unwrap();
        let mut engine = SearchEngine::new();
        let goal = engine.expand_depth_first(&target).unwrap();
        assert_eq!(engine.arena.get(goal).cost, (n - 1) as f64);
    }
}
