//! Loader for the bundled MoonScript compiler.
//!
//! MoonScript ships as a compiler image produced by an out-of-band build
//! step and linked into the binary. This crate registers that image into a
//! live Lua interpreter: collaborator modules are made discoverable in
//! `package.loaded` first (never clobbering an entry the host already
//! installed), then the image is decoded as a named chunk, run once, and
//! its single result handed back as the module exports.
//!
//! ```no_run
//! use mlua::Lua;
//!
//! let lua = Lua::new();
//! let _exports = moonscript_loader::open_moonscript(&lua)?;
//! # Ok::<(), moonscript_loader::LoaderError>(())
//! ```

pub mod bundle;
pub mod dependency;
pub mod error;
pub mod loader;
pub mod registry;

pub use bundle::{Bundle, MOONSCRIPT_CHUNK};
pub use dependency::Dependency;
pub use error::{LoaderError, Result};
pub use loader::{open_moonscript, Loader, LPEG_MODULE};
pub use registry::ensure_loaded;
