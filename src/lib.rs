pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod problem;
pub mod search;

pub use error::{Result, SearchError};
pub use models::{Item, Selection};
