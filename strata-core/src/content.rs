//! Parsed job config content
//!
//! The flat typed structure a job config file parses into, with source
//! locations retained so deprecation notices can point at the offending
//! keyword.

use crate::arg_type::ArgType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A position in a job config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// A parsed value together with the location of the keyword it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub location: Location,
}

impl<T> Spanned<T> {
    pub fn new(value: T, location: Location) -> Self {
        Self { value, location }
    }
}

/// Flat content of a parsed job config file.
///
/// One field per recognized keyword; a repeated keyword keeps its last
/// occurrence, except `ARG_TYPE` which accumulates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobContent {
    pub min_args: Option<Spanned<usize>>,
    pub max_args: Option<Spanned<usize>>,
    pub arg_types: Vec<Spanned<(usize, ArgType)>>,
    pub executable: Option<Spanned<String>>,
    pub stop_on_fail: Option<Spanned<bool>>,
    /// Deprecated: path of a script to load when `internal` is set.
    pub script: Option<Spanned<String>>,
    /// Deprecated: selects whether `script` is loaded at all.
    pub internal: Option<Spanned<bool>>,
}

impl JobContent {
    /// The sparse `(position, kind)` override pairs, without locations.
    pub fn arg_type_pairs(&self) -> Vec<(usize, ArgType)> {
        self.arg_types.iter().map(|spanned| spanned.value).collect()
    }
}
