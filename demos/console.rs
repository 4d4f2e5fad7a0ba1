use grid_search::{loader, search_all_goals, Algorithm};
use std::env;
use std::process::ExitCode;

// Searches every goal of an environment file and prints, per goal, the file name, the
// algorithm, the number of cells on the path and the cells themselves.
//
//   cargo run --example console -- environment.txt BFS
fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <environment file> <DFS|BFS|GBFS|AS|IDAS|RW>", args[0]);
        return ExitCode::FAILURE;
    }
    let algorithm: Algorithm = match args[2].parse() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let grid = match loader::load(&args[1]) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    for result in search_all_goals(&grid, algorithm) {
        println!("{}", args[1]);
        println!("{}", result.algorithm);
        println!("{}", result.path.len());
        for step in &result.path {
            println!("[{}, {}]", step.cell.x, step.cell.y);
        }
    }
    ExitCode::SUCCESS
}
