//! Error types for job config parsing

use crate::content::Location;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing a job config file.
///
/// These are user-input errors: a malformed or unrecognized keyword line.
/// They are propagated unchanged by the job loader.
#[derive(Debug, Error)]
pub enum ConfigParseError {
    /// The config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A keyword outside the job schema
    #[error("{location}: unknown keyword '{keyword}'")]
    UnknownKeyword { keyword: String, location: Location },

    /// A keyword given the wrong number of arguments
    #[error("{location}: {keyword} expects {expected} argument(s), got {found}")]
    ArgumentCount {
        keyword: &'static str,
        expected: usize,
        found: usize,
        location: Location,
    },

    /// A keyword argument that could not be converted to its schema type
    #[error("{location}: invalid value '{value}' for {keyword}: {reason}")]
    InvalidValue {
        keyword: &'static str,
        value: String,
        reason: String,
        location: Location,
    },
}
