//! Structured config warnings
//!
//! Non-fatal notices surfaced while loading a job config, primarily for
//! deprecated keywords. Warnings carry the source location of the keyword
//! they concern so tooling can aggregate notices across many files.
//!
//! This is the structured channel; loaders additionally log through
//! `tracing`, and the two channels are independent audiences.

use crate::content::Location;
use serde::{Deserialize, Serialize};

/// A non-fatal notice about a job config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub message: String,
    pub location: Location,
}

impl ConfigWarning {
    /// Creates a deprecation notice for the keyword at `location`.
    pub fn deprecation(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Receiver for structured config warnings.
///
/// Loaders emit into a sink supplied by the caller; discovery tooling
/// typically collects into a `Vec` and reports at the end of a scan.
pub trait WarningSink {
    fn emit(&mut self, warning: ConfigWarning);
}

impl WarningSink for Vec<ConfigWarning> {
    fn emit(&mut self, warning: ConfigWarning) {
        self.push(warning);
    }
}
