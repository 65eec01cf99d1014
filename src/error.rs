use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Raised by the driver while executing a find, aggregate or write.
    /// Passed through untouched.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sampling was requested on a model whose schema has no seed path.
    #[error("'{field}' is not part of the '{model}' schema")]
    SchemaMismatch { model: String, field: String },

    /// The bulk seed update that follows a sample failed.
    #[error("Seed reassignment failed on '{namespace}': {source}")]
    Reassignment {
        namespace: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Validation failed for '{path}': {message}")]
    Validation { path: String, message: String },

    #[error("Plugin '{plugin}' is already installed on schema '{schema}' with different options")]
    AlreadyInstalled { plugin: String, schema: String },

    #[error("Path '{path}' on schema '{schema}' was not defined by plugin '{plugin}'")]
    FieldConflict { plugin: String, schema: String, path: String },

    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;
