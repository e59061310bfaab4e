//! Unified error types for the htmlembed toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during htmlembed operations.
#[derive(Error, Debug)]
pub enum EmbedError {
    // --- Configuration ---

    /// The configuration file (`htmlembed.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized for writing.
    #[error("failed to serialize config for {path}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `init` was asked to write a config over an existing one without `--force`.
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),

    /// A configured name that is emitted as JavaScript is not a valid identifier.
    #[error("invalid {field}: '{value}' is not a JavaScript identifier")]
    InvalidIdentifier { field: &'static str, value: String },

    // --- Sources ---

    /// A listed source file exists but could not be read.
    #[error("failed to read source {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A listed source file is not valid UTF-8.
    #[error("source is not valid UTF-8: {path}")]
    SourceDecode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, EmbedError>`.
pub type Result<T> = std::result::Result<T, EmbedError>;
