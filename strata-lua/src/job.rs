//! Workflow job record and file-backed loader
//!
//! A [`WorkflowJob`] is the validated, immutable description of one
//! invocable job: identity, arity bounds, per-position argument types,
//! and either an external executable, a bound script class, or both.
//! Records are built once at discovery time and not mutated afterwards.
//!
//! The loader functions keep no shared mutable state, so discovery may
//! scan many config files concurrently with one loader call per file.

use crate::error::{JobLoadError, ScriptLoadError};
use crate::script::ScriptClass;
use mlua::{Lua, Value};
use std::path::Path;
use strata_core::{
    ArgType, ConfigWarning, NativeType, WarningSink, parse_arg_types_list, parse_job_file,
};
use tracing::{debug, warn};

/// Validated description of one invocable workflow job.
#[derive(Debug, Clone)]
pub struct WorkflowJob {
    pub name: String,
    pub min_args: Option<usize>,
    pub max_args: Option<usize>,
    /// One kind per positional argument, index 0 first. The length is the
    /// resolved arity and may differ from `max_args` when that is unset.
    pub arg_types: Vec<ArgType>,
    pub executable: Option<String>,
    pub script: Option<ScriptClass>,
    /// Overrides the workflow-level continue-on-error setting when set;
    /// `None` defers to the file-level default.
    pub stop_on_fail: Option<bool>,
}

impl WorkflowJob {
    /// Constructs a record, validating the script binding.
    ///
    /// An absent binding is always valid. A present binding must be a Lua
    /// table satisfying the runnable-script capability; anything else
    /// fails with [`ScriptLoadError`] naming the job. No other field is
    /// checked here: `min_args <= max_args` and arity consistency are the
    /// argument-type resolver's contract.
    pub fn new(
        name: impl Into<String>,
        min_args: Option<usize>,
        max_args: Option<usize>,
        arg_types: Vec<ArgType>,
        executable: Option<String>,
        script: Option<Value>,
        stop_on_fail: Option<bool>,
    ) -> Result<Self, ScriptLoadError> {
        let name = name.into();
        let script = match script {
            None => None,
            Some(value) => Some(ScriptClass::from_value(value, &name)?),
        };

        Ok(Self {
            name,
            min_args,
            max_args,
            arg_types,
            executable,
            script,
            stop_on_fail,
        })
    }

    /// Loads a job record from a config file.
    ///
    /// The record name defaults to the file's base name. Deprecated
    /// `SCRIPT`/`INTERNAL` keywords are reconciled here: they never fail
    /// the load by themselves, but emit notices into `warnings` (and,
    /// when a script is actually loaded, a log warning as well). The
    /// script file is evaluated in `lua`, which must outlive the record.
    ///
    /// # Errors
    /// [`JobLoadError::Parse`] for schema failures, propagated unchanged;
    /// [`JobLoadError::Script`] if script resolution or the record
    /// invariant fails.
    pub fn from_file(
        lua: &Lua,
        config_file: &Path,
        name: Option<&str>,
        warnings: &mut dyn WarningSink,
    ) -> Result<Self, JobLoadError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => config_file
                .file_name()
                .map(|base| base.to_string_lossy().into_owned())
                .unwrap_or_else(|| config_file.display().to_string()),
        };

        let content = parse_job_file(config_file)?;

        let arg_types = parse_arg_types_list(
            &content.arg_type_pairs(),
            content.min_args.as_ref().map_or(0, |kw| kw.value),
            content.max_args.as_ref().map_or(0, |kw| kw.value),
        );

        let internal = content.internal.as_ref().map(|kw| kw.value);
        if let Some(keyword) = &content.internal {
            if !keyword.value {
                warnings.emit(ConfigWarning::deprecation(
                    "INTERNAL FALSE has no effect and can be safely removed",
                    keyword.location.clone(),
                ));
            }
        }

        let mut script_value = None;
        match (&content.script, internal) {
            (Some(keyword), Some(true)) => {
                let message = format!(
                    "deprecated keywords SCRIPT and INTERNAL for job '{}', loading script {}",
                    name, keyword.value
                );
                warn!("{message}");
                warnings.emit(ConfigWarning::deprecation(
                    message,
                    keyword.location.clone(),
                ));
                script_value = Some(ScriptClass::evaluate_file(
                    lua,
                    Path::new(&keyword.value),
                    &name,
                )?);
            }
            (Some(keyword), _) => {
                warnings.emit(ConfigWarning::deprecation(
                    "SCRIPT has no effect and can be safely removed",
                    keyword.location.clone(),
                ));
            }
            (None, _) => {}
        }

        let job = Self::new(
            name,
            content.min_args.map(|kw| kw.value),
            content.max_args.map(|kw| kw.value),
            arg_types,
            content.executable.map(|kw| kw.value),
            script_value,
            content.stop_on_fail.map(|kw| kw.value),
        )?;

        debug!("loaded workflow job '{}' from {}", job.name, config_file.display());

        Ok(job)
    }

    /// True iff a script is bound and it carries the plugin capability.
    pub fn is_plugin(&self) -> bool {
        self.script
            .as_ref()
            .is_some_and(|script| script.is_plugin())
    }

    /// The native value types of the job's positional arguments, in order.
    pub fn argument_types(&self) -> Vec<NativeType> {
        self.arg_types.iter().map(|kind| kind.native()).collect()
    }
}
