use thiserror::Error;

#[derive(Debug, Error)]
pub enum FreezerError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("invalid unit ordinal: {0}")]
    InvalidUnitOrdinal(u64),
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FreezerError>;
