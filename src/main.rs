//! Eight-Puzzle Solver
//!
//! Solves the 3x3 sliding-tile puzzle with breadth-first, depth-limited
//! depth-first, greedy best-first and A* search, then prints each solution
//! step by step together with search metrics.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use eight_puzzle::grid::format_path;
use eight_puzzle::heuristic::manhattan;
use eight_puzzle::{Algorithm, Board, SearchOutcome, DEFAULT_MAX_DEPTH};

/// Board solved when no state is given.
const DEFAULT_STATE: &str = "1 3 6 5 2 0 4 7 8";

/// Solves the 8-puzzle with four search strategies.
#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the given board.
    Solve {
        /// Nine tiles 0-8, separated by spaces or commas (0 is the blank).
        state: Vec<String>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Solve a randomly shuffled solvable board.
    Random {
        /// Seed for a reproducible board.
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Report whether a board is solvable and its Manhattan distance.
    Check {
        /// Nine tiles 0-8, separated by spaces or commas (0 is the blank).
        #[arg(required = true)]
        state: Vec<String>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Which strategy to run.
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::All)]
    algorithm: AlgorithmChoice,
    /// Depth limit for depth-first search.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,
    /// Print every board along the solution.
    #[arg(long)]
    steps: bool,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmChoice::All,
            max_depth: DEFAULT_MAX_DEPTH,
            steps: true,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmChoice {
    All,
    Bfs,
    Dfs,
    Greedy,
    Astar,
}

impl SearchArgs {
    fn algorithms(&self) -> Vec<Algorithm> {
        let depth = Algorithm::Depth {
            max_depth: Some(self.max_depth),
        };
        match self.algorithm {
            AlgorithmChoice::All => vec![
                Algorithm::Breadth,
                depth,
                Algorithm::Greedy,
                Algorithm::AStar,
            ],
            AlgorithmChoice::Bfs => vec![Algorithm::Breadth],
            AlgorithmChoice::Dfs => vec![depth],
            AlgorithmChoice::Greedy => vec![Algorithm::Greedy],
            AlgorithmChoice::Astar => vec![Algorithm::AStar],
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve { state, search }) => {
            parse_state(&state).map(|board| run_searches(board, &search))
        }
        Some(Command::Random { seed, search }) => {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            run_searches(Board::random_solvable(&mut rng), &search);
            Ok(())
        }
        Some(Command::Check { state }) => parse_state(&state).map(run_check),
        None => parse_state(&[]).map(|board| run_searches(board, &SearchArgs::default())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Invalid board: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Joins the positional tile arguments and parses them, falling back to the
/// default board when none were given.
fn parse_state(tokens: &[String]) -> eight_puzzle::Result<Board> {
    if tokens.is_empty() {
        DEFAULT_STATE.parse()
    } else {
        tokens.join(" ").parse()
    }
}

/// Runs each selected strategy on `board` and prints its report.
fn run_searches(board: Board, search: &SearchArgs) {
    println!("Initial state: {:?}", board.tiles());
    println!("{}", board);

    if !board.is_solvable() {
        tracing::warn!(
            inversions = board.inversions(),
            "board has odd parity; the goal is unreachable"
        );
    }

    for algorithm in search.algorithms() {
        let outcome = algorithm.run(board);
        print!("{}", report(algorithm, &outcome, search.steps));
    }
}

/// Prints solvability and heuristic information for a board.
fn run_check(board: Board) {
    println!("{}", board);
    println!("Inversions: {}", board.inversions());
    println!("Solvable: {}", if board.is_solvable() { "yes" } else { "no" });
    println!("Manhattan distance: {}", manhattan(&board));
}

/// Formats the outcome of one search: header, optional path, metrics.
fn report(algorithm: Algorithm, outcome: &SearchOutcome, show_steps: bool) -> String {
    let rule = "=".repeat(40);
    let mut output = format!("{rule}\n--- {} ---\n{rule}\n", algorithm.name());

    match outcome.path() {
        Some(path) => {
            if show_steps {
                output.push_str(&format_path(&path));
                output.push('\n');
            }
            output.push_str(&format!("Nodes generated: {}\n", outcome.nodes_generated));
            output.push_str(&format!("Time: {:.4}s\n", outcome.elapsed_secs()));
            output.push_str(&format!("Path cost: {}\n", path.len() - 1));
        }
        None => {
            output.push_str("No solution found.\n");
            output.push_str(&format!("Nodes generated: {}\n", outcome.nodes_generated));
            output.push_str(&format!("Time: {:.4}s\n", outcome.elapsed_secs()));
        }
    }
    output.push('\n');

    output
}
