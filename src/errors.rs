//! Error types for the command-line front end
//!
//! Recorders and containers never fail: invalid structural requests come
//! back as sentinels (`None`, an empty frame list). [`StepvizError`] covers
//! what can go wrong around them: unreadable settings, malformed arguments,
//! and requests the recorders refused.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepvizError {
    #[error("unknown sorting algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown graph algorithm '{0}'")]
    UnknownTraversal(String),

    #[error("unknown array preset '{0}' (expected random, sorted, reverse or nearly)")]
    UnknownPreset(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("flag '{0}' expects a value")]
    MissingValue(String),

    #[error("invalid value '{value}' for '{flag}'")]
    InvalidValue { flag: String, value: String },

    #[error("invalid edge '{0}' (expected FROM-TO or FROM-TO:WEIGHT)")]
    InvalidEdge(String),

    #[error("no usable numbers in '{0}'")]
    EmptyArray(String),

    #[error("vertex '{0}' is not in the graph")]
    VertexNotFound(String),

    #[error("cycle index {index} is out of range for a list of {len} node(s)")]
    InvalidCycleIndex { index: usize, len: usize },

    #[error("nothing to record: {0}")]
    EmptyTrace(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize trace: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StepvizError>;
