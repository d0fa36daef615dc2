pub mod renderer;

use std::{
    io::Write,
    time::{Duration, Instant},
};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};
use rand::Rng;
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    config::MazeConfig,
    error::CliError,
    maze::{Direction, Maze, StepOutcome},
    solvers::{Solver, solve_maze},
};
use renderer::Raster;

pub const USAGE: &str =
    "usage: spanmaze <rows> <columns> [--seed N] [--solve bfs|dfs] [--moves udlr...]";

/// What to do with one generated maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub config: MazeConfig,
    pub solver: Option<Solver>,
    pub moves: Vec<Direction>,
}

/// Parse the command line, without the executable name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, CliError> {
    let mut args = args.into_iter();
    let mut dims = Vec::with_capacity(2);
    let mut seed = None;
    let mut solver = None;
    let mut moves = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(value.parse::<u64>().map_err(|_| {
                    CliError::Usage(format!("--seed expects a number, got '{}'", value))
                })?);
            }
            "--solve" => {
                let value = next_value(&mut args, "--solve")?;
                solver = Some(value.parse::<Solver>().map_err(CliError::Usage)?);
            }
            "--moves" => {
                let value = next_value(&mut args, "--moves")?;
                moves = value
                    .chars()
                    .map(|c| c.to_string().parse::<Direction>())
                    .collect::<Result<_, _>>()
                    .map_err(CliError::Usage)?;
            }
            _ => {
                let n = arg.parse::<usize>().map_err(|_| {
                    CliError::Usage(format!("unexpected argument '{}'\n{}", arg, USAGE))
                })?;
                dims.push(n);
            }
        }
    }

    let &[rows, columns] = dims.as_slice() else {
        return Err(CliError::Usage(format!(
            "expected two dimensions, got {}\n{}",
            dims.len(),
            USAGE
        )));
    };

    let mut config = MazeConfig::new(rows, columns);
    config.seed = seed;
    config.validate()?;
    Ok(Args {
        config,
        solver,
        moves,
    })
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{} expects a value\n{}", flag, USAGE)))
}

/// Generate the maze described by `args`, apply the solver and the cursor moves,
/// and print the result to `out` once.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<Maze, CliError> {
    // Always run seeded so the printed seed reproduces the maze
    let seed = args.config.seed.unwrap_or_else(|| rand::rng().random());
    let mut maze = Maze::generate(&args.config.with_seed(seed))?;

    let mut status = vec![format!(
        "{}x{} seed {}",
        maze.rows(),
        maze.columns(),
        seed
    )];

    if let Some(solver) = args.solver {
        let path = solve_maze(&mut maze, solver)?;
        status.push(format!("{}: {} cells", solver, path.len()));
    }

    if !args.moves.is_empty() {
        let mut blocked = 0;
        for &direction in &args.moves {
            match maze.step(direction) {
                StepOutcome::Blocked => blocked += 1,
                StepOutcome::Moved(_) => {}
                StepOutcome::Finished => break,
            }
        }
        status.push(if maze.is_finished() {
            "exit reached".to_string()
        } else {
            format!("cursor at {:?}, {} blocked", maze.cells()[maze.cursor()].coord(), blocked)
        });
    }

    let raster = Raster::from_maze(&maze);
    raster.write_to(out)?;

    let line = status.join(" | ");
    let (line, _) = line.unicode_truncate(raster.display_width());
    queue!(
        out,
        style::PrintStyledContent(line.with(Color::Green).attribute(Attribute::Bold)),
        style::Print("\n")
    )?;
    out.flush()?;
    Ok(maze)
}

/// Generate and solve `num_iters` mazes of the given size and report the average time of each phase.
pub fn profile<W: Write>(
    rows: usize,
    columns: usize,
    solver: Solver,
    num_iters: Option<usize>,
    out: &mut W,
) -> Result<(), CliError> {
    let num_iters = num_iters.unwrap_or(10).max(1);
    let config = MazeConfig::new(rows, columns);
    let mut generate_time = Duration::ZERO;
    let mut solve_time = Duration::ZERO;

    for iter in 0..num_iters {
        let start = Instant::now();
        let mut maze = Maze::generate(&config.with_seed(iter as u64))?;
        generate_time += start.elapsed();

        let start = Instant::now();
        solve_maze(&mut maze, solver)?;
        solve_time += start.elapsed();
    }

    tracing::info!(
        "[profile] {} iterations, generate {:?}, solve {:?}",
        num_iters,
        generate_time,
        solve_time
    );
    writeln!(
        out,
        "{}x{} over {} runs: generate {:?}/run, {} {:?}/run",
        rows,
        columns,
        num_iters,
        generate_time / num_iters as u32,
        solver,
        solve_time / num_iters as u32
    )?;
    Ok(())
}
