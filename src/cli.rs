use clap::{Parser, Subcommand};

/// BudgetSearch — blind-search solvers for budgeted value-target selection.
#[derive(Parser, Debug)]
#[command(name = "budget_search")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Random-restart hill climbing over single add/remove moves.
    HillClimb {
        /// Path to the problem definition file.
        #[arg(short, long, default_value = "hill_climbing_input.txt")]
        file: String,

        /// Seed for the restart RNG. Omit for a fresh seed each run.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Iterative deepening DFS over the budget-feasible subset tree.
    TreeSearch {
        /// Path to the problem definition file.
        #[arg(short, long, default_value = "iterative_deepening_input.txt")]
        file: String,
    },
}
