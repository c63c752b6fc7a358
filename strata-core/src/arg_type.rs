//! Argument-type vocabulary
//!
//! Closed set of primitive kinds a job argument can have, plus the mapping
//! to the native value types used for documentation and introspection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Primitive kind of a positional job argument.
///
/// These are the spellings accepted by the `ARG_TYPE` keyword in job
/// config files. Positions without an explicit kind default to `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgType {
    Bool,
    Float,
    Int,
    String,
}

/// Native value type corresponding to an argument kind.
///
/// Used only for documentation and introspection, for example when
/// rendering an argument-parser description for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NativeType {
    Bool,
    Float,
    Int,
    Str,
}

/// An argument-kind spelling outside the closed vocabulary.
///
/// This signals a defect in whatever produced the spelling, not a
/// recoverable user error; the vocabulary is closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown argument type '{0}'")]
pub struct UnknownArgType(pub String);

impl ArgType {
    /// Maps this kind to its native value type. Total by construction.
    pub fn native(self) -> NativeType {
        match self {
            ArgType::Bool => NativeType::Bool,
            ArgType::Float => NativeType::Float,
            ArgType::Int => NativeType::Int,
            ArgType::String => NativeType::Str,
        }
    }
}

impl FromStr for ArgType {
    type Err = UnknownArgType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BOOL" => Ok(ArgType::Bool),
            "FLOAT" => Ok(ArgType::Float),
            "INT" => Ok(ArgType::Int),
            "STRING" => Ok(ArgType::String),
            _ => Err(UnknownArgType(s.to_string())),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgType::Bool => "BOOL",
            ArgType::Float => "FLOAT",
            ArgType::Int => "INT",
            ArgType::String => "STRING",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NativeType::Bool => "bool",
            NativeType::Float => "float",
            NativeType::Int => "int",
            NativeType::Str => "string",
        };
        write!(f, "{}", name)
    }
}
