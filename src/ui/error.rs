//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal setup, drawing or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// User input could not be read from an interactive prompt
    #[error("Failed to read input: {0}")]
    PromptError(#[from] dialoguer::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
