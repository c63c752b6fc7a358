//! Class-backed workflow record
//!
//! A [`PluginWorkflow`] wraps a [`WorkflowJob`] built directly from a
//! pre-loaded script class, with no config file involved. It carries
//! descriptive metadata used by documentation surfacing: a description,
//! usage examples, a dotted category path, the originating package, and
//! an optional factory for a custom argument-parser description.
//!
//! The descriptive setters are a registration-time builder; once the
//! record is handed to a registry it is treated as immutable.

use crate::error::ScriptLoadError;
use crate::job::WorkflowJob;
use mlua::{Table, Value};
use std::fmt;
use std::ops::Deref;

/// Zero-argument factory producing an argument-parser description.
pub type ParserFactory = Box<dyn Fn() -> clap::Command + Send + Sync>;

/// Workflow job registered from a script class.
pub struct PluginWorkflow {
    job: WorkflowJob,
    description: String,
    examples: Option<String>,
    parser: Option<ParserFactory>,
    category: String,
    source_package: String,
}

impl PluginWorkflow {
    /// Builds a record from a script class.
    ///
    /// The record name defaults to the class's own `name`; the
    /// description defaults to the class's documentation text. The source
    /// package is the leading segment of the class's dotted module path,
    /// fixed here and immutable afterwards. Arity is left unbounded and
    /// no executable is set: this path exists for in-process behavior
    /// classes, not argument-shaped external jobs.
    ///
    /// # Errors
    /// Fails only if the class does not satisfy the runnable-script
    /// capability, via the [`WorkflowJob`] construction invariant.
    pub fn new(class: Table, name: Option<&str>) -> Result<Self, ScriptLoadError> {
        let class_name: Option<String> = class.get::<Option<String>>("name").ok().flatten();
        let name = name
            .map(str::to_string)
            .or(class_name)
            .unwrap_or_default();

        let description: String = class
            .get::<Option<String>>("description")
            .ok()
            .flatten()
            .unwrap_or_default();
        let source_package = class
            .get::<Option<String>>("module")
            .ok()
            .flatten()
            .as_deref()
            .and_then(|module| module.split('.').next())
            .unwrap_or_default()
            .to_string();

        let job = WorkflowJob::new(
            name,
            None,
            None,
            Vec::new(),
            None,
            Some(Value::Table(class)),
            None,
        )?;

        Ok(Self {
            job,
            description,
            examples: None,
            parser: None,
            category: "other".to_string(),
            source_package,
        })
    }

    /// The underlying job record.
    pub fn job(&self) -> &WorkflowJob {
        &self.job
    }

    pub fn into_job(self) -> WorkflowJob {
        self.job
    }

    /// Description text added to the generated documentation.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Usage-example text added to the generated documentation.
    pub fn examples(&self) -> Option<&str> {
        self.examples.as_deref()
    }

    pub fn set_examples(&mut self, examples: Option<String>) {
        self.examples = examples;
    }

    /// Factory for a custom argument-parser description, if any.
    pub fn parser(&self) -> Option<&ParserFactory> {
        self.parser.as_ref()
    }

    pub fn set_parser(&mut self, parser: Option<ParserFactory>) {
        self.parser = parser;
    }

    /// Dot-separated classification path, e.g. `"export.csv"`.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Root package the class originated from.
    pub fn source_package(&self) -> &str {
        &self.source_package
    }
}

impl Deref for PluginWorkflow {
    type Target = WorkflowJob;

    fn deref(&self) -> &WorkflowJob {
        &self.job
    }
}

impl fmt::Debug for PluginWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginWorkflow")
            .field("job", &self.job)
            .field("description", &self.description)
            .field("examples", &self.examples)
            .field("category", &self.category)
            .field("source_package", &self.source_package)
            .field("parser", &self.parser.as_ref().map(|_| "<factory>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::create_sandbox;
    use mlua::Lua;

    fn make_class(lua: &Lua, source: &str) -> Table {
        lua.load(source).eval().unwrap()
    }

    fn well_swap_class(lua: &Lua) -> Table {
        make_class(
            lua,
            r#"return {
                name = "well_swap",
                description = "Swaps well completions between dates",
                module = "strata_tools.well.swap",
                plugin = true,
                run = function(args) end,
            }"#,
        )
    }

    #[test]
    fn test_name_defaults_to_class_name() {
        let lua = create_sandbox().unwrap();
        let workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();

        assert_eq!(workflow.name, "well_swap");
    }

    #[test]
    fn test_explicit_name_overrides_class_name() {
        let lua = create_sandbox().unwrap();
        let workflow = PluginWorkflow::new(well_swap_class(&lua), Some("WELL_SWAP")).unwrap();

        assert_eq!(workflow.name, "WELL_SWAP");
    }

    #[test]
    fn test_description_defaults_to_class_doc() {
        let lua = create_sandbox().unwrap();
        let workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();

        assert_eq!(
            workflow.description(),
            "Swaps well completions between dates"
        );
    }

    #[test]
    fn test_description_defaults_to_empty_without_doc() {
        let lua = create_sandbox().unwrap();
        let class = make_class(
            &lua,
            r#"return { name = "undocumented", run = function() end }"#,
        );
        let workflow = PluginWorkflow::new(class, None).unwrap();

        assert_eq!(workflow.description(), "");
    }

    #[test]
    fn test_source_package_is_leading_module_segment() {
        let lua = create_sandbox().unwrap();
        let workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();

        assert_eq!(workflow.source_package(), "strata_tools");
    }

    #[test]
    fn test_base_record_shape() {
        let lua = create_sandbox().unwrap();
        let workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();

        assert_eq!(workflow.min_args, None);
        assert_eq!(workflow.max_args, None);
        assert!(workflow.arg_types.is_empty());
        assert!(workflow.executable.is_none());
        assert!(workflow.is_plugin());
    }

    #[test]
    fn test_non_runnable_class_fails_via_record_invariant() {
        let lua = create_sandbox().unwrap();
        let class = make_class(&lua, r#"return { name = "inert" }"#);

        let err = PluginWorkflow::new(class, None).unwrap_err();
        assert_eq!(err.job, "inert");
        assert!(err.reason.contains("'run' function"));
    }

    #[test]
    fn test_descriptive_setters() {
        let lua = create_sandbox().unwrap();
        let mut workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();

        workflow.set_description("Replacement text");
        workflow.set_examples(Some("WELL_SWAP 2024-01-01".to_string()));
        workflow.set_category("well.topology");

        assert_eq!(workflow.description(), "Replacement text");
        assert_eq!(workflow.examples(), Some("WELL_SWAP 2024-01-01"));
        assert_eq!(workflow.category(), "well.topology");
    }

    #[test]
    fn test_default_category() {
        let lua = create_sandbox().unwrap();
        let workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();

        assert_eq!(workflow.category(), "other");
    }

    #[test]
    fn test_parser_factory() {
        let lua = create_sandbox().unwrap();
        let mut workflow = PluginWorkflow::new(well_swap_class(&lua), None).unwrap();
        assert!(workflow.parser().is_none());

        workflow.set_parser(Some(Box::new(|| {
            clap::Command::new("well_swap").about("Swaps well completions")
        })));

        let command = workflow.parser().unwrap()();
        assert_eq!(command.get_name(), "well_swap");
    }
}
