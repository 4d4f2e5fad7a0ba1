use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Algorithm, Grid, SearchConfig, SearchEngine};
use grid_util::point::Point;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// A square grid with scattered walls whose start and goal sit in opposite corners and are
/// connected.
fn bench_grid(n: usize, density: f64, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        let start = Point::new(0, 0);
        let goal = Point::new(n as i32 - 1, n as i32 - 1);
        let mut builder = Grid::builder(n, n).start(start).goal(goal);
        for x in 0..n as i32 {
            for y in 0..n as i32 {
                builder.set_wall(Point::new(x, y), rng.gen_bool(density));
            }
        }
        builder.set_wall(start, false);
        builder.set_wall(goal, false);
        let grid = builder.build().unwrap();
        if grid.reachable(&start, &goal) {
            return grid;
        }
    }
}

fn compare_algorithms(c: &mut Criterion) {
    for (n, density) in [(32, 0.2), (64, 0.25)] {
        let grid = bench_grid(n, density, 0);
        let target = grid.target_index(0).unwrap();
        let mut engine = SearchEngine::with_config(SearchConfig::default().with_seed(0));
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{n}x{n}, {}", algorithm.tag()).as_str(), |b| {
                b.iter(|| black_box(engine.run(&target, algorithm)))
            });
        }
    }
}

criterion_group!(benches, compare_algorithms);
criterion_main!(benches);
