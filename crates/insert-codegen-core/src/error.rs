//! Unified error types for insert-codegen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating insertion code.
#[derive(Error, Debug)]
pub enum CodegenError {
    // --- Expansion ---

    /// The constant table is shorter than the requested depth.
    #[error("no empty-subtree constant for level {index} (table length {len})")]
    MissingConstant { index: usize, len: usize },

    /// A strict template does not contain one of the substitution markers.
    #[error("template is missing the {marker} marker")]
    MissingMarker { marker: &'static str },

    /// A strict template is empty.
    #[error("template is empty")]
    EmptyTemplate,

    // --- Insertion path ---

    /// The leaf index does not fit in a tree of the given depth.
    #[error("leaf index {index} does not fit in a tree of depth {depth}")]
    TreeFull { index: u64, depth: usize },

    /// The depth exceeds what a `u64` leaf index can address.
    #[error("tree depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: usize, max: usize },

    // --- Configuration ---

    /// The configuration file was not found.
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

    /// The configuration could not be serialized.
    #[error("failed to serialize config")]
    ConfigSerialize(#[from] serde_json::Error),

    /// Refused to overwrite an existing configuration file.
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),

    /// A template file referenced by the config or command line could not be read.
    #[error("template file not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, CodegenError>`.
pub type Result<T> = std::result::Result<T, CodegenError>;
