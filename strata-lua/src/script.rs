//! Runnable-script-class capability model
//!
//! A job's programmatic behavior is a *script class*: a Lua table
//! declaring a `name` string and a `run` function. The class is a
//! description of behavior, not a running instance; any other value
//! offered as a script binding is rejected. The *plugin* capability is
//! the stricter refinement `plugin = true` on the same table, marking
//! classes eligible for host-level integration such as documentation
//! surfacing.

use crate::error::ScriptLoadError;
use mlua::{Lua, Table, Value};
use std::fs;
use std::path::Path;

/// A validated runnable script class.
///
/// Holds the Lua table handle; the `Lua` state it came from must outlive
/// the record holding this class.
#[derive(Debug, Clone)]
pub struct ScriptClass {
    table: Table,
}

impl ScriptClass {
    /// Validates a value offered as a script binding.
    ///
    /// # Errors
    /// [`ScriptLoadError`] naming `job` if the value is not a table or
    /// the table does not satisfy the runnable-script capability.
    pub fn from_value(value: Value, job: &str) -> Result<Self, ScriptLoadError> {
        let table = match value {
            Value::Table(table) => table,
            other => {
                return Err(ScriptLoadError::new(
                    job,
                    format!(
                        "script is a {} value, expected a script class table",
                        other.type_name()
                    ),
                ));
            }
        };

        match table.get::<Value>("name") {
            Ok(Value::String(_)) => {}
            Ok(other) => {
                return Err(ScriptLoadError::new(
                    job,
                    format!(
                        "script class must declare a 'name' string, got {}",
                        other.type_name()
                    ),
                ));
            }
            Err(err) => return Err(ScriptLoadError::new(job, err.to_string())),
        }

        match table.get::<Value>("run") {
            Ok(Value::Function(_)) => {}
            Ok(other) => {
                return Err(ScriptLoadError::new(
                    job,
                    format!(
                        "script class must declare a 'run' function, got {}",
                        other.type_name()
                    ),
                ));
            }
            Err(err) => return Err(ScriptLoadError::new(job, err.to_string())),
        }

        Ok(Self { table })
    }

    /// Evaluates a script file in the sandbox and returns whatever value
    /// the chunk produced, unvalidated.
    ///
    /// The chunk's top-level code runs here; any error it raises, along
    /// with read and syntax errors, becomes a [`ScriptLoadError`] naming
    /// `job`.
    pub fn evaluate_file(lua: &Lua, path: &Path, job: &str) -> Result<Value, ScriptLoadError> {
        let source = fs::read_to_string(path).map_err(|err| {
            ScriptLoadError::new(job, format!("failed to read {}: {err}", path.display()))
        })?;

        lua.load(&source)
            .set_name(path.display().to_string())
            .eval::<Value>()
            .map_err(|err| ScriptLoadError::new(job, err.to_string()))
    }

    /// The class's own declared name.
    pub fn name(&self) -> String {
        self.table.get("name").unwrap_or_default()
    }

    /// The class's attached documentation text, if any.
    pub fn description(&self) -> Option<String> {
        self.table.get::<Option<String>>("description").ok().flatten()
    }

    /// The class's dotted originating-module path, if declared.
    pub fn module_path(&self) -> Option<String> {
        self.table.get::<Option<String>>("module").ok().flatten()
    }

    /// True iff the class carries the plugin capability marker.
    pub fn is_plugin(&self) -> bool {
        matches!(self.table.get::<Value>("plugin"), Ok(Value::Boolean(true)))
    }
}
