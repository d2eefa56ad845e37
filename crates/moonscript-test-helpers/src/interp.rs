//! Interpreter construction and registry inspection for tests.

use mlua::{Lua, Table, Value};

/// A fresh interpreter with the standard libraries, `package.loaded`
/// included.
pub fn fresh_lua() -> Lua {
    Lua::new()
}

fn loaded_table(lua: &Lua) -> Table<'_> {
    lua.globals()
        .get::<_, Table>("package")
        .expect("package table")
        .get("loaded")
        .expect("package.loaded table")
}

/// Read `package.loaded[name]` the way the registrar sees it.
pub fn loaded_entry<'lua>(lua: &'lua Lua, name: &str) -> Value<'lua> {
    loaded_table(lua).get(name).expect("registry read")
}

/// Sorted string keys of `package.loaded`.
pub fn loaded_keys(lua: &Lua) -> Vec<String> {
    let mut keys: Vec<String> = loaded_table(lua)
        .pairs::<String, Value>()
        .map(|pair| pair.expect("registry iteration").0)
        .collect();
    keys.sort();
    keys
}

/// Sorted string keys of the interpreter's globals table.
pub fn global_keys(lua: &Lua) -> Vec<String> {
    let mut keys: Vec<String> = lua
        .globals()
        .pairs::<Value, Value>()
        .filter_map(|pair| match pair.expect("globals iteration").0 {
            Value::String(s) => Some(s.to_str().expect("utf8 global name").to_string()),
            _ => None,
        })
        .collect();
    keys.sort();
    keys
}
