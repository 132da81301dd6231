//! CLI error types.

use std::path::PathBuf;

use meshcore_codec::CodecError;
use thiserror::Error;

/// Errors surfaced by `mccodec`.
#[derive(Error, Debug)]
pub enum CliError {
    /// Job file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML job file did not parse.
    #[error("invalid YAML job file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON job file did not parse, or output could not be rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Job file extension is neither YAML nor JSON.
    #[error("unsupported job file format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// Encoding failed.
    #[error("encode failed: {0}")]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, CliError>;
