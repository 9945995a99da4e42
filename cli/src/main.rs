use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::Verbosity;
use mazejog_core::*;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about = "Generate and inspect MazeJoggers mazes")]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze with explicit dimensions
    Generate(GenerateArgs),
    /// Generate the maze a session would use for one of its levels
    Level(LevelArgs),
    /// Print the default session configuration as JSON
    Config,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value_t = 25)]
    cols: Coord,
    #[arg(long, default_value_t = 20)]
    rows: Coord,
    #[arg(long, default_value_t = 15)]
    traps: CellCount,
    /// Fail instead of placing fewer traps than requested
    #[arg(long)]
    strict: bool,
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args, Debug)]
struct LevelArgs {
    /// Session configuration JSON, missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// One-based level number
    #[arg(long, default_value_t = 1)]
    level: u8,
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Overlay the shortest start-to-exit path
    #[arg(long)]
    show_path: bool,
    /// Draw traps instead of hiding them as open floor
    #[arg(long)]
    show_traps: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct MazeReport<'a> {
    seed: u64,
    size: Coord2,
    start: Coord2,
    exit: Coord2,
    traps: CellCount,
    solution: &'a [Coord2],
    rows: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Level(args) => level(args),
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&SessionConfig::default())?);
            Ok(())
        }
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let policy = if args.strict {
        TrapPolicy::Strict
    } else {
        TrapPolicy::Saturate
    };

    let maze = BacktrackMazeGenerator::new(seed)
        .with_trap_policy(policy)
        .generate(MazeConfig::new((args.cols, args.rows), args.traps))
        .context("failed to generate maze")?;
    log::info!(
        "Generated {}x{} maze with {} traps from seed {}",
        maze.cols(),
        maze.rows(),
        maze.trap_count(),
        seed
    );

    print_maze(&maze, seed, &args.render)
}

fn level(args: LevelArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<SessionConfig>(&text)
                .with_context(|| format!("invalid session config in {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    let index = level_index(&config, args.level)?;
    let seed = args.seed.unwrap_or_else(random_seed);
    let maze = config
        .generate_level(seed, index)
        .with_context(|| format!("failed to generate level {}", args.level))?;
    log::info!(
        "Level {}: {} traps, {}s on the clock",
        args.level,
        maze.trap_count(),
        config.time_limit_for_level(index).as_secs()
    );

    print_maze(&maze, seed, &args.render)
}

/// Maps a 1-based level number to its index; a zero level count still plays one level.
fn level_index(config: &SessionConfig, level: u8) -> Result<u8> {
    let total_levels = config.total_levels.max(1);
    ensure!(
        (1..=total_levels).contains(&level),
        "level must be between 1 and {}",
        total_levels
    );
    Ok(level - 1)
}

fn print_maze(maze: &Maze, seed: u64, render: &RenderArgs) -> Result<()> {
    let rows = render_rows(maze, render);
    match render.format {
        Format::Text => {
            for row in &rows {
                println!("{row}");
            }
        }
        Format::Json => {
            let report = MazeReport {
                seed,
                size: maze.size(),
                start: maze.start(),
                exit: maze.exit(),
                traps: maze.trap_count(),
                solution: maze.solution(),
                rows,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn render_rows(maze: &Maze, render: &RenderArgs) -> Vec<String> {
    let path: HashSet<Coord2> = if render.show_path {
        maze.solution().iter().copied().collect()
    } else {
        HashSet::new()
    };

    (0..maze.rows())
        .map(|y| {
            (0..maze.cols())
                .map(|x| {
                    let coords = (x, y);
                    match maze.cell_at(coords) {
                        _ if coords == maze.start() => 'S',
                        _ if coords == maze.exit() => 'E',
                        _ if path.contains(&coords) => '*',
                        Cell::Trap if !render.show_traps => Cell::Open.to_char(),
                        cell => cell.to_char(),
                    }
                })
                .collect()
        })
        .collect()
}

fn random_seed() -> u64 {
    rand::random()
}
