//! The module entry point: open collaborators, then run the bundled chunk.

use mlua::{Lua, Value};
use tracing::debug;

use crate::bundle::Bundle;
use crate::dependency::Dependency;
use crate::error::Result;
use crate::registry;

/// Module name the pattern-matching collaborator answers to.
pub const LPEG_MODULE: &str = "lpeg";

/// Opens collaborator modules and the embedded compiler image against a
/// Lua interpreter.
#[derive(Debug)]
pub struct Loader {
    bundle: Bundle,
    dependencies: Vec<Dependency>,
}

impl Loader {
    /// A loader for `bundle` with no collaborators.
    pub fn new(bundle: Bundle) -> Self {
        Self {
            bundle,
            dependencies: Vec::new(),
        }
    }

    /// Append a collaborator, opened in insertion order before the bundle
    /// runs.
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Register collaborators, then decode and run the bundled chunk,
    /// returning its single result as the module exports.
    ///
    /// Each collaborator is opened and its result written into
    /// `package.loaded` under its canonical name, unless the host already
    /// installed an entry there. An undecodable bundle reports
    /// [`crate::LoaderError::Decode`]; collaborator and chunk execution
    /// failures pass through untouched.
    pub fn open<'lua>(&self, lua: &'lua Lua) -> Result<Value<'lua>> {
        for dependency in &self.dependencies {
            debug!("opening dependency '{}'", dependency.name());
            let value = dependency.open(lua)?;
            registry::ensure_loaded(lua, dependency.name(), value)?;
        }

        let function = self.bundle.decode(lua)?;
        debug!("running chunk '{}'", self.bundle.name());
        let exports = function.call::<_, Value>(())?;
        Ok(exports)
    }
}

impl Default for Loader {
    /// The stock arrangement: bundled compiler image plus `lpeg` resolved
    /// through the host's `require`.
    fn default() -> Self {
        Self::new(Bundle::bundled()).with_dependency(Dependency::require(LPEG_MODULE))
    }
}

/// Open the bundled MoonScript module against `lua`, the embedded
/// counterpart of the C distribution's `luaopen_moonscript`.
pub fn open_moonscript(lua: &Lua) -> Result<Value<'_>> {
    Loader::default().open(lua)
}
