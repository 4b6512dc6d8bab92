//! Error types for palette storage and interchange.

use std::io;
use std::path::PathBuf;

use swatch_color::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("palette store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store file exists but is not a valid palette list.
    #[error("palette store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No palette with the given id.
    #[error("no palette with id {0}")]
    NotFound(i64),

    /// A color value failed to parse.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// JSON (de)serialization failed outside of opening the store.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Imported JSON parsed but matched none of the accepted shapes.
    #[error("unrecognized import format: {0}")]
    UnrecognizedImport(String),

    /// Export format name not recognized.
    #[error("unknown export format: {0:?}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
