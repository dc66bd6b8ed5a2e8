use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Database not found: {}", path.display())]
    DbNotFound { path: PathBuf },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid day \"{input}\" (expected Monday..Thursday or Mon..Thu)")]
    InvalidDay { input: String },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Serve(String),
}
