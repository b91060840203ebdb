use anyhow::{bail, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use maze_solver::{solve_with, Maze, Rendering, Search, Strategy};
use rayon::prelude::*;

const USAGE: &str =
    "Usage: maze-solver <maze-file> [--wall <char>] [--explored] [--plain] [dfs|bfs|greedy|astar ...]";

#[derive(Debug)]
struct Args {
    path: String,
    wall: char,
    show_explored: bool,
    colored: bool,
    strategies: Vec<Strategy>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut path = None;
        let mut wall = '#';
        let mut show_explored = false;
        let mut colored = true;
        let mut strategies = Vec::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--explored" => show_explored = true,
                "--plain" => colored = false,
                "--wall" => {
                    let value = args.next().context("Missing value for --wall")?;
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => wall = ch,
                        _ => bail!("Wall must be a single character, got {value:?}"),
                    }
                }
                "-h" | "--help" => bail!("{USAGE}"),
                _ if arg.starts_with("--") => bail!("Unknown option {arg:?}\n{USAGE}"),
                _ if path.is_none() => path = Some(arg),
                _ => strategies.push(arg.parse::<Strategy>()?),
            }
        }
        if strategies.is_empty() {
            strategies = Strategy::ALL.to_vec();
        }
        Ok(Self {
            path: path.context(USAGE)?,
            wall,
            show_explored,
            colored,
            strategies,
        })
    }
}

fn report(maze: &Maze, search: &Search, args: &Args) {
    let name = style(search.strategy.name().to_uppercase()).bold();
    match &search.solution {
        Some(solution) => println!(
            "{name} solution: {solution} ({} steps, {} states explored)",
            solution.len(),
            search.num_explored,
        ),
        None => println!(
            "{name}: no solution ({} states explored)",
            search.num_explored,
        ),
    }
    let rendering = Rendering::new(maze)
        .search(search)
        .show_explored(args.show_explored)
        .colored(args.colored);
    println!("{rendering}\n");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse(std::env::args().skip(1))?;
    if !args.colored {
        console::set_colors_enabled(false);
    }

    let map_data = std::fs::read_to_string(&args.path).context("Failed to read the maze")?;
    let maze = Maze::parse_with_wall(&map_data, args.wall).context("Failed to parse the maze")?;
    info!(
        "Loaded {}x{} maze from {}, start {} goal {}",
        maze.height(),
        maze.width(),
        args.path,
        maze.start(),
        maze.goal(),
    );

    let progress = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template("{spinner} {pos} states explored")?);

    // Each run owns its frontier, explored set and tree.
    let searches = args
        .strategies
        .par_iter()
        .map(|&strategy| solve_with(&maze, strategy, || progress.inc(1)))
        .collect::<Vec<_>>();
    progress.finish_and_clear();

    for search in &searches {
        report(&maze, search, &args);
    }

    Ok(())
}
