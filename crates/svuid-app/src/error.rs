use thiserror::Error;

/// Why a snapshot document could not be turned into declarations.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid declaration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported declaration schema: {found} (expected {expected})")]
    UnsupportedSchema {
        found: String,
        expected: &'static str,
    },

    #[error("declaration document must be a JSON object")]
    NotAnObject,
}
