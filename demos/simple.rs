use grid_search::{search, Algorithm, Grid};
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// S...
// .##.
// ...G
// S marks the start
// G marks the goal
fn main() {
    let grid = Grid::builder(4, 3)
        .start(Point::new(0, 0))
        .goal(Point::new(3, 2))
        .wall_rect(1, 1, 2, 1)
        .build()
        .unwrap();
    print!("{grid}");
    for algorithm in [Algorithm::BreadthFirst, Algorithm::AStar] {
        let result = search(&grid, Point::new(3, 2), algorithm).unwrap();
        println!("{algorithm}: {} states explored", result.states_explored());
        for step in &result.path {
            match step.direction {
                Some(mv) => println!("  {} ({mv})", step.cell),
                None => println!("  {} (start)", step.cell),
            }
        }
    }
}
