//! Error types for the terminal client.

/// Top-level error type for the terminal search client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Terminal setup, rendering, or input error.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
