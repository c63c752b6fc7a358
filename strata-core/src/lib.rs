//! Strata Core
//!
//! Config-side domain types for the Strata workflow-job system.
//!
//! This crate contains:
//! - The argument-type vocabulary and its native-type mapping
//! - The argument-type resolver (sparse overrides to a dense list)
//! - The parsed job config content model with source locations
//! - The keyword-file schema parser
//! - The structured deprecation-warning channel

pub mod arg_list;
pub mod arg_type;
pub mod content;
pub mod error;
pub mod parser;
pub mod warning;

pub use arg_list::parse_arg_types_list;
pub use arg_type::{ArgType, NativeType, UnknownArgType};
pub use content::{JobContent, Location, Spanned};
pub use error::ConfigParseError;
pub use parser::{parse_job_file, parse_job_source};
pub use warning::{ConfigWarning, WarningSink};
