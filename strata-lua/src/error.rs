//! Error types for script binding and job loading

use strata_core::ConfigParseError;
use thiserror::Error;

/// Failure to bind a script class to a workflow job.
///
/// Raised when a script-binding value is not a class table, when a class
/// table does not satisfy the runnable-script capability, or when
/// anything goes wrong while evaluating a script file — including errors
/// raised by the script's own top-level code. Always names the job being
/// loaded; fatal to that job only, so discovery can skip it and continue.
#[derive(Debug, Clone, Error)]
#[error("failed to load {job}: {reason}")]
pub struct ScriptLoadError {
    pub job: String,
    pub reason: String,
}

impl ScriptLoadError {
    pub fn new(job: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            reason: reason.into(),
        }
    }
}

/// Any failure while loading a workflow job from a config file.
#[derive(Debug, Error)]
pub enum JobLoadError {
    /// The config file failed the schema; propagated unchanged.
    #[error(transparent)]
    Parse(#[from] ConfigParseError),

    /// The script binding failed to resolve or validate.
    #[error(transparent)]
    Script(#[from] ScriptLoadError),
}
