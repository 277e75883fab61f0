use thiserror::Error;

/// Failure to obtain the item list from the remote source
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to fetch data: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("Parse error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
