use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombError {
    // file name isn't <bank>-<slot>-...
    #[error("invalid pad name format: {name}")]
    Naming { name: String },

    #[error("{op} {path}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("incompatible WAV files: {first} and {other} ({detail})")]
    Incompatible {
        first: PathBuf,
        other: PathBuf,
        detail: String,
    },

    #[error("{path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl CombError {
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombError::Io { op, path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, CombError>;
