use clap::Parser;

use budget_search_rs::cli::{Cli, Command};
use budget_search_rs::error::Result;
use budget_search_rs::interface::render;
use budget_search_rs::problem::{load_problem, OutputMode, SearchKind};
use budget_search_rs::search::{build_tree, hill_climb, iterative_deepening};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::HillClimb { file, seed } => cmd_hill_climb(&file, seed),
        Command::TreeSearch { file } => cmd_tree_search(&file),
    }
}

/// Random-restart hill climbing. Always yields some local minimum;
/// a positive final error means no feasible target-meeting selection
/// was found by any restart.
fn cmd_hill_climb(file: &str, seed: Option<u64>) -> Result<()> {
    let problem = load_problem(file, SearchKind::HillClimbing)?;

    let config = hill_climb::HillClimbConfig {
        restarts: problem.num_restarts.unwrap_or(0),
        seed,
    };
    let best = hill_climb::run(&problem, &config)?;

    match problem.output {
        OutputMode::Compact => println!("{}", render::name_list(&best)),
        OutputMode::Verbose => println!(
            "\nFound Solution: {}",
            render::selection_line_with_error(&best, problem.target, problem.budget)
        ),
    }

    Ok(())
}

/// Iterative deepening over the materialized budget-feasible subset
/// tree. "No solution" is a normal outcome, not an error.
fn cmd_tree_search(file: &str) -> Result<()> {
    let problem = load_problem(file, SearchKind::TreeSearch)?;

    let root = build_tree(&problem.items, problem.budget);
    let found = iterative_deepening(&root, problem.target, problem.output);

    match (problem.output, found) {
        (OutputMode::Compact, Some(selection)) => println!("{}", render::name_list(selection)),
        (OutputMode::Verbose, Some(selection)) => println!(
            "\nFound Solution: {}",
            render::selection_line(selection)
        ),
        (_, None) => println!("\nNo Solution"),
    }

    Ok(())
}
