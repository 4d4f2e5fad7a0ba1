//! Reads environment descriptions of the form
//!
//! ```text
//! [5,11]
//! (0,1)
//! (7,0) | (10,3)
//! (2,0,2,2)
//! (8,0,1,2)
//! ```
//!
//! The first line gives rows and columns, the second the start cell, the third the goals in
//! order, and every remaining line a wall rectangle `(x,y,width,height)`.
use crate::error::LoadError;
use crate::grid::{Grid, GridBuilder};
use grid_util::point::Point;
use log::info;
use std::fs;
use std::path::Path;

pub fn load(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    info!("Loading environment from {}", path.display());
    parse(&text)
}

pub fn parse(text: &str) -> Result<Grid, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut next_line = |what: &str| {
        lines.next().ok_or_else(|| LoadError::Parse {
            line: 0,
            message: format!("missing {what}"),
        })
    };

    let (line, size) = next_line("grid size")?;
    let [rows, cols] = numbers::<2>(line, size)?;
    let (rows, cols) = (to_usize(line, rows)?, to_usize(line, cols)?);
    let mut builder = GridBuilder::new(cols, rows);

    let (line, start) = next_line("start cell")?;
    let [x, y] = numbers::<2>(line, start)?;
    builder = builder.start(Point::new(x, y));

    let (line, goals) = next_line("goal cells")?;
    for goal in goals.split('|') {
        let [x, y] = numbers::<2>(line, goal)?;
        builder = builder.goal(Point::new(x, y));
    }

    for (line, wall) in lines {
        let [x, y, w, h] = numbers::<4>(line, wall)?;
        if w < 0 || h < 0 {
            return Err(parse_error(line, format!("negative wall size in '{wall}'")));
        }
        builder = builder.wall_rect(x, y, w, h);
    }
    let grid = builder.build()?;
    info!(
        "Loaded {}x{} environment with {} goals",
        grid.width(),
        grid.height(),
        grid.goals().len()
    );
    Ok(grid)
}

fn parse_error(line: usize, message: String) -> LoadError {
    LoadError::Parse { line, message }
}

/// Extracts exactly `N` integers from a bracketed, comma separated group such as `(3, 4)`.
fn numbers<const N: usize>(line: usize, text: &str) -> Result<[i32; N], LoadError> {
    let fields: Vec<&str> = text
        .split(|c: char| matches!(c, '(' | ')' | '[' | ']' | ','))
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();
    if fields.len() != N {
        return Err(parse_error(
            line,
            format!("expected {N} numbers in '{text}', found {}", fields.len()),
        ));
    }
    let mut out = [0; N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = field
            .parse()
            .map_err(|_| parse_error(line, format!("'{field}' is not an integer")))?;
    }
    Ok(out)
}

fn to_usize(line: usize, value: i32) -> Result<usize, LoadError> {
    usize::try_from(value).map_err(|_| parse_error(line, format!("negative grid size {value}")))
}
