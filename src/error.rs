use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number: {0}")]
    Parse(#[from] std::num::ParseIntError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No items in catalog")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, SearchError>;
