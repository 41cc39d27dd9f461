use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum TintError {
    #[error("settings error: {0}")]
    Settings(String),

    #[error("board error: {0}")]
    Board(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = TintError> = std::result::Result<T, E>;
