// src/error.rs

use thiserror::Error;

/// Errores del hub. Casi todo lo demás son no-ops silenciosos.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("question index {index} out of range (total {total})")]
    OutOfRange { index: usize, total: usize },

    #[error("option {option} not valid for question {index} ({count} options)")]
    InvalidOption {
        index: usize,
        option: usize,
        count: usize,
    },

    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, HubError>;

/// Mensaje genérico que ve el usuario ante cualquier fallo no controlado.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please refresh the page.";
