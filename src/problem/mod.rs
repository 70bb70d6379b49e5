mod parser;

pub use parser::{load_problem, parse_problem};

use crate::models::Item;

/// Which solver the problem file is written for. Hill-climbing files
/// carry a fourth header field (restart count); tree-search files do
/// not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    HillClimbing,
    TreeSearch,
}

/// How much to print while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Only the final answer (item names).
    Compact,
    /// Full trace of every state visited, then the final answer.
    Verbose,
}

impl OutputMode {
    pub fn is_verbose(self) -> bool {
        matches!(self, OutputMode::Verbose)
    }
}

/// One problem definition: the value target, the cost budget, the
/// output mode, the restart count (hill climbing only), and the item
/// catalog. Immutable once parsed.
#[derive(Debug)]
pub struct Problem {
    pub target: u64,
    pub budget: u64,
    pub output: OutputMode,
    pub num_restarts: Option<u64>,
    pub items: Vec<Item>,
}
