use grid_search::{Algorithm, Grid, SearchEngine};
use grid_util::point::Point;

// Every goal of a grid is searched in turn on one engine. The grid has shape
// S.#G
// ..#.
// G...
// with the goal on the right only reachable around the wall.
fn main() {
    let grid = Grid::builder(4, 3)
        .start(Point::new(0, 0))
        .goal(Point::new(3, 0))
        .goal(Point::new(0, 2))
        .wall_rect(2, 0, 1, 2)
        .build()
        .unwrap();
    print!("{grid}");
    let mut engine = SearchEngine::new();
    for target in grid.targets() {
        for algorithm in [Algorithm::DepthFirst, Algorithm::GreedyBestFirst] {
            let result = engine.run(&target, algorithm);
            println!(
                "{} -> {}: {algorithm}, {} moves, {} states explored",
                target.start(),
                target.goal(),
                result.moves().len(),
                result.states_explored()
            );
        }
    }
}
