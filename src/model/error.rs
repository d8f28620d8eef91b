use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Deadline of {0:?} exceeded")]
    Timeout(Duration),

    #[error("Unexpected quotation payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Insert failed: {0}")]
    Persist(#[from] rusqlite::Error),

    #[error("No database connection available: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Route not found")]
    NotFound,

    #[error("Received non-OK response: {0}")]
    NonOkResponse(u16),
}

impl Error {
    /// Splits deadline expiry off the other transport failures.
    pub fn from_transport(e: reqwest::Error, deadline: Duration) -> Error {
        if e.is_timeout() {
            Error::Timeout(deadline)
        } else {
            Error::Network(e)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}
