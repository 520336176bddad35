use thiserror::Error;

/// Errors that can occur while loading a forest from disk or from JSON.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pipeline JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when converting a custom export format into a `Forest`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid pipeline data: {0}")]
    Validation(String),
}
