use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    #[error("Unsupported relation: {0}")]
    Unsupported(String),

    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("Table '{0}' already exists")]
    TableExists(String),

    #[error("Table '{0}' not found")]
    TableNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

impl From<std::io::Error> for DbError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
