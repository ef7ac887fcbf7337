//! Load/save boundary for network files
//!
//! Readers parse a serialized network into a fresh [`SocialGraph`] plus a
//! parallel profile collection; writers serialize the current adjacency
//! list and profiles back out. Loading is all-or-nothing: a malformed file
//! returns [`ParseError`] and produces no graph and no profiles.
//!
//! Two formats are supported, chosen by file extension:
//! - JSON: the full network document (profiles and connections)
//! - CSV: the profile table only (no edge stream)

pub mod csv;
pub mod json;

pub use self::csv::{load_csv, save_csv};
pub use self::json::{load_json, save_json};

use crate::graph::SocialGraph;
use crate::profile::UserProfile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the load/save boundary
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON network document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV table: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("record {record}: invalid value {value:?} for field `{field}`")]
    InvalidField {
        record: u64,
        field: &'static str,
        value: String,
    },

    #[error("record {record}: missing required field `{field}`")]
    MissingField { record: u64, field: &'static str },

    #[error("missing required column `{0}` in header row")]
    MissingColumn(&'static str),

    #[error("unsupported network file format: {0}")]
    UnsupportedFormat(String),
}

/// Serialized network format, derived from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFormat {
    Json,
    Csv,
}

impl NetworkFormat {
    /// Pick a format from a path's extension (`.json` or `.csv`)
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(NetworkFormat::Json),
            Some("csv") => Ok(NetworkFormat::Csv),
            _ => Err(ParseError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a network file, dispatching on the extension
pub fn load_network(path: &Path) -> Result<(SocialGraph, Vec<UserProfile>), ParseError> {
    match NetworkFormat::from_path(path)? {
        NetworkFormat::Json => load_json(path),
        NetworkFormat::Csv => load_csv(path),
    }
}

/// Save a network file, dispatching on the extension
pub fn save_network(
    path: &Path,
    graph: &SocialGraph,
    profiles: &[UserProfile],
) -> Result<(), ParseError> {
    match NetworkFormat::from_path(path)? {
        NetworkFormat::Json => save_json(path, graph, profiles),
        NetworkFormat::Csv => save_csv(path, profiles),
    }
}
