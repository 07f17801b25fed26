use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaunagenError {
    /// A record is missing a required field (name, first location).
    /// Indicates a broken data source, not a filterable absence.
    #[error("Malformed animal record: {0}")]
    Shape(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API_KEY is not set; required when querying the lookup API")]
    ApiKeyMissing,

    #[error("{0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, FaunagenError>;
