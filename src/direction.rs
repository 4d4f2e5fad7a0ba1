use core::fmt;
use grid_util::point::Point;

/// A single cardinal step on the grid. The y axis grows downwards, so [Move::Up] decreases y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Expansion order shared by every strategy. Changing it changes which of several
    /// equal-cost paths is reported.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Move::Up => (0, -1),
            Move::Left => (-1, 0),
            Move::Down => (0, 1),
            Move::Right => (1, 0),
        }
    }

    /// The cell reached by taking this step from `from`, without any bounds check.
    pub fn apply(self, from: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(from.x + dx, from.y + dy)
    }

    /// Small per-direction offset added to priority keys so that children with equal keys
    /// are always dequeued Up, Left, Down, Right. Carries no cost meaning.
    pub fn tiebreak(self) -> f64 {
        match self {
            Move::Up => 0.1,
            Move::Left => 0.2,
            Move::Down => 0.3,
            Move::Right => 0.4,
        }
    }

    /// The move leading from `from` to the adjacent cell `to`, if they are adjacent.
    pub fn between(from: Point, to: Point) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.apply(from) == to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Left => "left",
            Move::Down => "down",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiebreak_follows_expansion_order() {
        let keys: Vec<f64> = Move::ALL.iter().map(|m| m.tiebreak()).collect();
        assert_eq!(keys, vec![0.1, 0.2, 0.3, 0.4]);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn between_inverts_apply() {
        let p = Point::new(3, 3);
        for m in Move::ALL {
            assert_eq!(Move::between(p, m.apply(p)), Some(m));
        }
        assert_eq!(Move::between(p, Point::new(4, 4)), None);
        assert_eq!(Move::between(p, p), None);
    }
}
