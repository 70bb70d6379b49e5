pub mod hill_climb;
pub mod tree;

pub use hill_climb::{climb, generate_neighbors, random_initial, HillClimbConfig};
pub use tree::{build_tree, iterative_deepening, Node, MAX_DEPTH};
