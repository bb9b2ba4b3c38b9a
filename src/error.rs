use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Command-line input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error(
        "One or both parameters were null or blank. File Path: {file_path}\nNumber of View Points: {count}"
    )]
    Blank { file_path: String, count: String },

    #[error("Provided numberOfViewPoints could not be parsed into an integer.")]
    NotAnInteger { count: String },

    #[error(
        "The provided path does not lead to a file or does not point to a regular file. Resolved path: {}",
        .path.display()
    )]
    NotARegularFile { path: PathBuf },

    #[error("Provided path could not be processed and seems to be invalid.")]
    InvalidPath { file_path: String },

    #[error("The numberOfViewPoints must be 0 or a positive integer")]
    Negative { count: i64 },
}

/// Errors reading or decoding a mesh document.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("failed to read mesh file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid mesh JSON. `src` keeps the text so the
    /// failing location can be shown.
    #[error("failed to parse mesh document {origin}: {source}")]
    Parse {
        origin: String,
        src: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
