//! The embedded compiler image and its chunk identity.

use std::borrow::Cow;

use mlua::{Function, Lua};
use tracing::debug;

use crate::error::{LoaderError, Result};

/// Chunk name the stock loader reports in diagnostics.
pub const MOONSCRIPT_CHUNK: &str = "moonscript.lua";

/// Compiler image baked in at build time. The checked-in file is the
/// bootstrap placeholder; release packaging swaps in the compiled compiler.
const BUNDLED_COMPILER: &[u8] = include_bytes!("../bundle/moonscript.lua");

/// An executable chunk plus the name used for it in error messages.
///
/// The bytes may hold Lua source or a precompiled binary chunk; the
/// interpreter's chunk reader tells the two apart, as `luaL_loadbuffer`
/// does.
#[derive(Debug, Clone)]
pub struct Bundle {
    name: Cow<'static, str>,
    bytes: Cow<'static, [u8]>,
}

impl Bundle {
    /// Wrap caller-supplied chunk bytes under a diagnostic name.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// The compiler image linked into this binary.
    pub fn bundled() -> Self {
        Self::new(MOONSCRIPT_CHUNK, BUNDLED_COMPILER)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the chunk into a callable function without running it.
    ///
    /// A zero-length image is rejected up front: it can only be a broken
    /// build artifact, never a compiler.
    pub(crate) fn decode<'lua>(&self, lua: &'lua Lua) -> Result<Function<'lua>> {
        if self.bytes.is_empty() {
            return Err(LoaderError::decode(self.name(), "empty chunk"));
        }

        debug!("decoding chunk '{}' ({} bytes)", self.name(), self.len());
        lua.load(self.bytes.as_ref())
            .set_name(self.name.as_ref())
            .into_function()
            .map_err(|err| LoaderError::decode(self.name(), err))
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_image_is_present() {
        let bundle = Bundle::bundled();
        assert_eq!(bundle.name(), MOONSCRIPT_CHUNK);
        assert!(!bundle.is_empty());
    }

    #[test]
    fn test_empty_image_is_a_decode_failure() {
        let lua = Lua::new();
        let bundle = Bundle::new("moonscript.lua", &b""[..]);
        let err = bundle.decode(&lua).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_source_image_decodes_to_a_function() {
        let lua = Lua::new();
        let bundle = Bundle::new("fixture.lua", &b"return 42"[..]);
        let function = bundle.decode(&lua).unwrap();
        assert_eq!(function.call::<_, i64>(()).unwrap(), 42);
    }
}
