//! Idempotent writes into the interpreter's loaded-module registry.

use mlua::{Lua, Table, Value};
use tracing::{debug, trace};

/// Put `value` into `package.loaded[name]` unless the slot is already
/// occupied.
///
/// Returns `true` when the write happened. An occupied slot is left exactly
/// as found, so registration can be repeated freely. The interpreter is not
/// touched beyond the one slot on either branch.
pub fn ensure_loaded<'lua>(
    lua: &'lua Lua,
    name: &str,
    value: Value<'lua>,
) -> mlua::Result<bool> {
    let package: Table = lua.globals().get("package")?;
    let loaded: Table = package.get("loaded")?;

    let current: Value = loaded.get(name)?;
    if !matches!(current, Value::Nil) {
        trace!("module '{}' already registered, leaving entry as-is", name);
        return Ok(false);
    }

    loaded.set(name, value)?;
    debug!("module '{}' registered", name);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(lua: &Lua) -> Table<'_> {
        lua.globals()
            .get::<_, Table>("package")
            .unwrap()
            .get("loaded")
            .unwrap()
    }

    #[test]
    fn test_writes_into_an_empty_slot() {
        let lua = Lua::new();
        assert!(ensure_loaded(&lua, "acorn", Value::Integer(7)).unwrap());
        assert_eq!(loaded(&lua).get::<_, i64>("acorn").unwrap(), 7);
    }

    #[test]
    fn test_occupied_slot_is_left_alone() {
        let lua = Lua::new();
        loaded(&lua).set("acorn", 7).unwrap();
        assert!(!ensure_loaded(&lua, "acorn", Value::Integer(99)).unwrap());
        assert_eq!(loaded(&lua).get::<_, i64>("acorn").unwrap(), 7);
    }
}
