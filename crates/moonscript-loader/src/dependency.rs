//! Collaborator modules opened before the bundled compiler runs.

use std::fmt;

use mlua::{Function, Lua, Value};

type OpenFn = dyn for<'lua> Fn(&'lua Lua) -> mlua::Result<Value<'lua>>;

/// A module the bundled compiler expects to find in `package.loaded`.
///
/// The opener registers the collaborator against the interpreter and yields
/// the value it produced; how it does so is entirely the collaborator's
/// business.
pub struct Dependency {
    name: String,
    open: Box<OpenFn>,
}

impl Dependency {
    /// A dependency opened by a caller-supplied callback.
    pub fn new<F>(name: impl Into<String>, open: F) -> Self
    where
        F: for<'lua> Fn(&'lua Lua) -> mlua::Result<Value<'lua>> + 'static,
    {
        Self {
            name: name.into(),
            open: Box::new(open),
        }
    }

    /// A dependency resolved through the host's own `require`, the usual
    /// route to a C module sitting on `package.cpath`.
    pub fn require(name: impl Into<String>) -> Self {
        let name = name.into();
        let module = name.clone();
        Self::new(name, move |lua: &Lua| {
            let require: Function = lua.globals().get("require")?;
            require.call::<_, Value>(module.as_str())
        })
    }

    /// Canonical name under which the module must be discoverable.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn open<'lua>(&self, lua: &'lua Lua) -> mlua::Result<Value<'lua>> {
        (self.open)(lua)
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
