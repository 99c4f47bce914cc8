//! CLI for maze carving and solving

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use perfect_maze::{Maze, Point};
use tracing::{info, Level};

/// Generate a perfect maze and show the path between two cells
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows, greater than 1 [default: 10]
    #[arg(requires = "columns")]
    rows: Option<usize>,

    /// Number of columns, greater than 1 [default: 10]
    columns: Option<usize>,

    /// Start cell as `row,column`. Random if omitted.
    #[arg(requires = "goal")]
    start: Option<Point>,

    /// Goal cell as `row,column`. Random if omitted.
    goal: Option<Point>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the solved maze
    #[arg(long)]
    solution_only: bool,

    /// More log output on stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const DEFAULT_SIZE: usize = 10;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Print one stage of the run, unless only the solution is wanted
fn show(out: &mut impl Write, args: &Args, banner: &str, maze: &Maze) -> io::Result<()> {
    if !args.solution_only {
        writeln!(out, "\n\n~~~{banner}~~~")?;
        writeln!(out, "{}", maze.snapshot())?;
    }
    Ok(())
}

/// Carve, pick endpoints, solve and print each stage to `out`
///
/// All arguments are checked before anything is written.
fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let rows = args.rows.unwrap_or(DEFAULT_SIZE);
    let columns = args.columns.unwrap_or(DEFAULT_SIZE);
    let mut maze = Maze::new(rows, columns, args.seed).context("Invalid maze size")?;
    let endpoints = match (args.start, args.goal) {
        (Some(start), Some(goal)) => {
            maze
                .check_endpoints(start, goal)
                .context("Invalid start and goal cells")?;
            Some((start, goal))
        }
        _ => None,
    };

    show(out, args, "ORIGINAL ROW x COLUMN GRID", &maze)?;
    maze.carve();
    show(out, args, "GRID CONVERTED TO MAZE", &maze)?;

    match endpoints {
        Some((start, goal)) => maze
            .set_goal(start, goal)
            .context("Invalid start and goal cells")?,
        None => {
            let (start, goal) = maze.set_random_goal()?;
            info!(%start, %goal, "picked random endpoints");
        }
    }
    show(out, args, "START AND GOAL CELLS IDENTIFIED", &maze)?;

    let path = maze.solve()?;
    info!(steps = path.len() - 1, "found solution");
    if args.solution_only {
        write!(out, "{}", maze.snapshot())?;
    } else {
        show(out, args, "SOLUTION PATH", &maze)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args, &mut io::stdout().lock())
}
