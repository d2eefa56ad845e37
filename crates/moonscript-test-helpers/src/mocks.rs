//! Mock implementations for testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mlua::{Lua, Value};
use moonscript_loader::Dependency;

/// A collaborator double that counts how often it was opened.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opens: AtomicUsize,
}

impl RecordingOpener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    /// Build a dependency whose opener records the call and yields a fresh
    /// table with a `mock` field set to `name`.
    pub fn dependency(self: &Arc<Self>, name: &str) -> Dependency {
        let recorder = Arc::clone(self);
        let tag = name.to_string();
        Dependency::new(name, move |lua: &Lua| {
            recorder.opens.fetch_add(1, Ordering::SeqCst);
            let table = lua.create_table()?;
            table.set("mock", tag.as_str())?;
            Ok(Value::Table(table))
        })
    }
}

/// A dependency that installs its own `package.loaded` entry, the way a
/// well-behaved C module does, and returns a different value to the caller.
pub fn self_registering_dependency(name: &str) -> Dependency {
    let slot = name.to_string();
    Dependency::new(name, move |lua: &Lua| {
        let own = lua.create_table()?;
        own.set("self_registered", true)?;
        lua.globals()
            .get::<_, mlua::Table>("package")?
            .get::<_, mlua::Table>("loaded")?
            .set(slot.as_str(), own)?;
        Ok(Value::Boolean(true))
    })
}
