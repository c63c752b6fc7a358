//! Lua sandbox creation
//!
//! Provides a restricted Lua state for evaluating job script files.
//! Evaluating a script runs its top-level code, so the sandbox keeps only
//! basic Lua functionality (tables, strings, math, coroutines) and no
//! filesystem, network, or process access. It does not time-box
//! execution; a script that hangs at top level hangs the loader.
//!
//! The `script` helper module is always injected so script files can
//! declare their class with `script.define`.

use mlua::{Lua, LuaOptions, Result as LuaResult, StdLib, Table};

/// Create a restricted Lua sandbox for script evaluation
///
/// # Example
/// ```no_run
/// use strata_lua::sandbox::create_sandbox;
///
/// let lua = create_sandbox()?;
/// let class: mlua::Table = lua
///     .load(
///         r#"
///         return script.define {
///             name = "csv_export",
///             run = function(args) end,
///         }
///     "#,
///     )
///     .eval()?;
/// let name: String = class.get("name")?;
/// assert_eq!(name, "csv_export");
/// # Ok::<(), mlua::Error>(())
/// ```
pub fn create_sandbox() -> LuaResult<Lua> {
    // Only TABLE, STRING, MATH and COROUTINE; no IO, OS, PACKAGE or DEBUG
    let lua = Lua::new_with(
        StdLib::TABLE | StdLib::STRING | StdLib::MATH | StdLib::COROUTINE,
        LuaOptions::default(),
    )?;

    // Remove dangerous globals
    lua.globals().set("require", mlua::Nil)?;
    lua.globals().set("dofile", mlua::Nil)?;
    lua.globals().set("loadfile", mlua::Nil)?;

    register_script_module(&lua)?;

    Ok(lua)
}

/// Register the script helper module
///
/// `script.define(class)` returns the class table as-is; it exists so
/// script files read declaratively.
fn register_script_module(lua: &Lua) -> LuaResult<()> {
    let script = lua.create_table()?;

    let define_fn = lua.create_function(|_, class: Table| Ok(class))?;
    script.set("define", define_fn)?;

    lua.globals().set("script", script)?;

    Ok(())
}
