use crate::direction::Move;
use crate::error::GridError;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid as _};
use grid_util::point::Point;
use grid_util::rect::Rect;
use log::info;
use petgraph::unionfind::UnionFind;

/// Collects walls, start and goals, then validates them into a [Grid]. Walls can be added
/// one cell at a time or as rectangles, matching how environment files describe them.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    walls: BoolGrid,
    start: Option<Point>,
    goals: Vec<Point>,
    out_of_bounds_wall: Option<Point>,
}

impl GridBuilder {
    pub fn new(width: usize, height: usize) -> GridBuilder {
        GridBuilder {
            walls: BoolGrid::new(width, height, false),
            start: None,
            goals: Vec::new(),
            out_of_bounds_wall: None,
        }
    }
    pub fn start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }
    /// Appends a goal. Goal order is kept and is the order [Grid::targets] yields them in.
    pub fn goal(mut self, goal: Point) -> Self {
        self.goals.push(goal);
        self
    }
    pub fn wall(mut self, point: Point) -> Self {
        self.set_wall(point, true);
        self
    }
    /// Marks the `w` by `h` rectangle whose top-left corner is `(x, y)` as walls. A rectangle
    /// reaching outside the grid sets nothing and makes [GridBuilder::build] fail with the
    /// first corner that lies outside.
    pub fn wall_rect(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        if w <= 0 || h <= 0 {
            return self;
        }
        let origin = Point::new(x, y);
        if !self.walls.point_in_bounds(origin) {
            self.record_out_of_bounds(origin);
            return self;
        }
        let far = Point::new(x.saturating_add(w - 1), y.saturating_add(h - 1));
        if self.walls.point_in_bounds(far) {
            self.walls.set_rectangle(&Rect::new(x, y, w, h), true);
        } else {
            self.record_out_of_bounds(far);
        }
        self
    }
    pub fn set_wall(&mut self, point: Point, blocked: bool) {
        if self.walls.point_in_bounds(point) {
            self.walls.set_point(point, blocked);
        } else {
            self.record_out_of_bounds(point);
        }
    }
    fn record_out_of_bounds(&mut self, point: Point) {
        self.out_of_bounds_wall.get_or_insert(point);
    }

    pub fn build(self) -> Result<Grid, GridError> {
        let (width, height) = (self.walls.width(), self.walls.height());
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let out_of_bounds = |what, point| GridError::OutOfBounds {
            what,
            point,
            width,
            height,
        };
        if let Some(point) = self.out_of_bounds_wall {
            return Err(out_of_bounds("wall", point));
        }
        let start = self.start.ok_or(GridError::MissingStart)?;
        if self.goals.is_empty() {
            return Err(GridError::NoGoals);
        }
        if !self.walls.point_in_bounds(start) {
            return Err(out_of_bounds("start", start));
        }
        let is_wall = |p: Point| self.walls.get_point(p);
        if is_wall(start) {
            return Err(GridError::StartOnWall(start));
        }
        for &goal in &self.goals {
            if !self.walls.point_in_bounds(goal) {
                return Err(out_of_bounds("goal", goal));
            }
            if is_wall(goal) {
                return Err(GridError::GoalOnWall(goal));
            }
        }
        let mut grid = Grid {
            walls: self.walls,
            start,
            goals: self.goals,
            components: UnionFind::new(width * height),
        };
        grid.generate_components();
        Ok(grid)
    }
}

/// A bounded 4-connected grid of free and wall cells with one start and one or more goals.
/// Nothing about a [Grid] changes after [GridBuilder::build]; the goal a search aims for is
/// picked per run through [Grid::target], so several searches towards different goals can
/// share one grid.
#[derive(Clone, Debug)]
pub struct Grid {
    walls: BoolGrid,
    start: Point,
    goals: Vec<Point>,
    components: UnionFind<usize>,
}

impl Grid {
    pub fn builder(width: usize, height: usize) -> GridBuilder {
        GridBuilder::new(width, height)
    }
    pub fn width(&self) -> usize {
        self.walls.width()
    }
    pub fn height(&self) -> usize {
        self.walls.height()
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goals(&self) -> &[Point] {
        &self.goals
    }
    pub fn in_bounds(&self, p: Point) -> bool {
        self.walls.point_in_bounds(p)
    }
    fn get_ix_point(&self, p: &Point) -> usize {
        self.walls.get_ix_point(p)
    }
    /// Out-of-bounds cells count as walls.
    pub fn is_wall(&self, p: Point) -> bool {
        !self.in_bounds(p) || self.walls.get_point(p)
    }
    pub fn is_start(&self, p: Point) -> bool {
        p == self.start
    }

    /// Every in-bounds, non-wall neighbour of `cell`, in the order Up, Left, Down, Right.
    pub fn neighbors(&self, cell: Point) -> impl Iterator<Item = (Move, Point)> + '_ {
        Move::ALL
            .into_iter()
            .map(move |m| (m, m.apply(cell)))
            .filter(move |(_, p)| !self.is_wall(*p))
    }

    /// Selects `goal` as the search target. Fails if `goal` is not one of this grid's goals.
    pub fn target(&self, goal: Point) -> Result<Target<'_>, GridError> {
        if self.goals.contains(&goal) {
            Ok(Target { grid: self, goal })
        } else {
            Err(GridError::UnknownGoal(goal))
        }
    }
    /// Selects the goal at `index` (0-based, in declaration order).
    pub fn target_index(&self, index: usize) -> Result<Target<'_>, GridError> {
        self.goals
            .get(index)
            .map(|&goal| Target { grid: self, goal })
            .ok_or(GridError::GoalIndexOutOfRange {
                index,
                count: self.goals.len(),
            })
    }
    /// One target per goal, in declaration order.
    pub fn targets(&self) -> impl Iterator<Item = Target<'_>> + '_ {
        self.goals.iter().map(move |&goal| Target { grid: self, goal })
    }

    /// Checks if `a` and `b` are free cells on the same connected component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        if self.is_wall(*a) || self.is_wall(*b) {
            return false;
        }
        self.components
            .equiv(self.get_ix_point(a), self.get_ix_point(b))
    }

    /// Links every free cell to its free right and lower neighbours in a fresh [UnionFind].
    fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width(),
            self.height()
        );
        let mut components = UnionFind::new(self.width() * self.height());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let point = Point::new(x, y);
                if self.is_wall(point) {
                    continue;
                }
                let ix = self.get_ix_point(&point);
                for n in [Move::Down.apply(point), Move::Right.apply(point)] {
                    if !self.is_wall(n) {
                        components.union(ix, self.get_ix_point(&n));
                    }
                }
            }
        }
        self.components = components;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let p = Point::new(x, y);
                let c = if self.is_start(p) {
                    'S'
                } else if self.goals.contains(&p) {
                    'G'
                } else if self.is_wall(p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A [Grid] paired with the one goal a search run is aiming for.
#[derive(Clone, Copy, Debug)]
pub struct Target<'a> {
    grid: &'a Grid,
    goal: Point,
}

impl<'a> Target<'a> {
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    pub fn start(&self) -> Point {
        self.grid.start
    }
    pub fn is_goal(&self, p: Point) -> bool {
        p == self.goal
    }
    pub fn is_start(&self, p: Point) -> bool {
        self.grid.is_start(p)
    }
    pub fn neighbors(&self, cell: Point) -> impl Iterator<Item = (Move, Point)> + 'a {
        self.grid.neighbors(cell)
    }
    /// Manhattan distance to the goal, ignoring walls.
    pub fn heuristic(&self, p: Point) -> i32 {
        (p.x - self.goal.x).abs() + (p.y - self.goal.y).abs()
    }
    pub fn reachable(&self) -> bool {
        self.grid.reachable(&self.grid.start, &self.goal)
    }
}
