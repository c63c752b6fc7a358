//! Strata Lua Infrastructure
//!
//! Lua-backed side of the Strata workflow-job system.
//!
//! This crate contains:
//! - A restricted sandbox for evaluating job script files
//! - The runnable-script-class capability model
//! - The `WorkflowJob` record and its file-backed loader
//! - The `PluginWorkflow` record for class-registered jobs

pub mod error;
pub mod job;
pub mod plugin;
pub mod sandbox;
pub mod script;

pub use error::{JobLoadError, ScriptLoadError};
pub use job::WorkflowJob;
pub use plugin::{ParserFactory, PluginWorkflow};
pub use sandbox::create_sandbox;
pub use script::ScriptClass;

pub use strata_core::{ArgType, ConfigWarning, NativeType, WarningSink};
