//! Terminal maze demo.
//!
//! Run: cargo run --bin mazer -- --algorithm astar

use clap::Parser;
use mazer::render::render;
use mazer::{Algorithm, MazeConfig, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "mazer")]
#[command(version, about = "Generate a random solvable maze and solve it")]
struct Cli {
    /// Number of rows
    #[arg(short, long, default_value_t = 20)]
    rows: i32,

    /// Number of columns
    #[arg(short, long, default_value_t = 20)]
    cols: i32,

    /// Search algorithm: dfs, bfs, astar or dijkstra
    #[arg(short, long, default_value_t = Algorithm::Dfs)]
    algorithm: Algorithm,

    /// Run every algorithm on the same maze and compare
    #[arg(long)]
    all: bool,

    /// Random seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Chance of each cell being a wall, in [0, 1)
    #[arg(short = 'p', long, default_value_t = MazeConfig::DEFAULT_BLOCKED_PROBABILITY)]
    blocked: f64,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = MazeConfig::new(cli.rows, cli.cols).with_blocked_probability(cli.blocked);
    let mut session = Session::with_rng(config, StdRng::seed_from_u64(seed))?;
    println!("seed {seed}, start {}, goal {}", config.start, config.goal);

    let algorithms: Vec<Algorithm> = if cli.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![cli.algorithm]
    };

    for algorithm in algorithms {
        session.set_algorithm(algorithm);
        session.solve();
        let result = session.result();
        println!();
        println!(
            "{algorithm}: visited {}, path {}",
            result.exploration.len(),
            result
                .path_len()
                .map_or_else(|| "none".to_string(), |n| format!("{n} steps")),
        );
        print!(
            "{}",
            render(
                session.grid(),
                &result.exploration,
                &result.path,
                config.start,
                config.goal
            )
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
