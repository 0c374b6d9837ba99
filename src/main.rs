//! Polyomino Placement Puzzle Solver
//!
//! Finds every way the twelve pentominoes can tile a rectangular board,
//! saves the solutions for the application's persistence layer, and derives
//! playable levels from saved solutions.

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use polypack::levels::build_level;
use polypack::{persistence, solver, BoardDims, PieceSet, SolveConfig, CLASSIC_DIMS};

/// Solves a pentomino placement puzzle and exports the solutions.
#[derive(Parser)]
#[command(name = "polypack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and save solutions to disk.
    Solve {
        /// Board width in cells.
        #[arg(long, default_value_t = CLASSIC_DIMS.width)]
        width: usize,

        /// Board height in cells.
        #[arg(long, default_value_t = CLASSIC_DIMS.height)]
        height: usize,

        /// Stop after this many solutions.
        #[arg(long)]
        max_solutions: Option<usize>,

        /// Stop after this many seconds of searching.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Show the number of saved solutions.
    Count,
    /// Derive levels from saved solutions and write levels.json.
    Levels {
        /// Number of levels to derive.
        #[arg(long, default_value_t = 4)]
        count: u32,

        /// Seed for reproducible piece selection.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve {
            width,
            height,
            max_solutions,
            timeout_secs,
        }) => run_solver(BoardDims::new(width, height), max_solutions, timeout_secs),
        Some(Command::Count) => run_count(),
        Some(Command::Levels { count, seed }) => run_levels(count, seed),
        None => run_solver(CLASSIC_DIMS, None, None),
    }
}

/// Solves the puzzle and saves solutions to disk.
fn run_solver(dims: BoardDims, max_solutions: Option<usize>, timeout_secs: Option<u64>) {
    let pieces = PieceSet::standard();
    let config = SolveConfig {
        max_solutions,
        deadline: timeout_secs.map(Duration::from_secs),
    };

    let solutions = solver::solve(&pieces, &pieces.ids(), dims, &config).unwrap_or_else(|e| {
        eprintln!("Solve failed: {e}");
        process::exit(1);
    });

    println!(
        "Found {} solutions on a {}x{} board",
        solutions.len(),
        dims.width,
        dims.height
    );

    if let Err(e) = persistence::save(&pieces, dims, &solutions) {
        eprintln!("Failed to save solutions: {e}");
        process::exit(1);
    }
    println!("Wrote solutions.json and solutions.txt");
}

/// Prints the count of saved solutions.
fn run_count() {
    match persistence::count() {
        Some(count) => println!("{count} solutions"),
        None => {
            eprintln!("No solutions.json found. Run 'polypack solve' first.");
            process::exit(1);
        }
    }
}

/// Derives levels from saved solutions, cycling through them in order.
fn run_levels(count: u32, seed: Option<u64>) {
    let Some(file) = persistence::load_all() else {
        eprintln!("No solutions.json found. Run 'polypack solve' first.");
        process::exit(1);
    };
    if file.solutions.is_empty() {
        eprintln!("solutions.json contains no solutions");
        process::exit(1);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let levels: Vec<_> = (1..=count)
        .map(|id| {
            let solution = &file.solutions[(id as usize - 1) % file.solutions.len()];
            build_level(id, solution, &mut rng)
        })
        .collect();

    let json = serde_json::to_string_pretty(&levels).unwrap_or_else(|e| {
        eprintln!("Failed to serialize levels: {e}");
        process::exit(1);
    });
    if let Err(e) = std::fs::write("levels.json", json) {
        eprintln!("Failed to write levels.json: {e}");
        process::exit(1);
    }
    println!("Wrote {} levels to levels.json", levels.len());
}

#[cfg(test)]
mod tests {
    use polypack::{persistence, solve_all, BoardDims, Piece, PieceSet, Shape};

    #[test]
    fn test_rendered_solution_snapshot() {
        let pieces = PieceSet::new(vec![Piece {
            id: 1,
            label: 'O',
            shape: Shape::from_matrix(&[&[1, 1], &[1, 1]]).unwrap(),
        }])
        .unwrap();
        let dims = BoardDims::new(2, 2);
        let solutions = solve_all(&pieces, dims).unwrap();
        assert_eq!(solutions.len(), 1);

        let rendered = persistence::format_solution(dims, &solutions[0], &pieces);
        insta::assert_snapshot!(rendered, @r"
        OO
        OO
        ");
    }
}
