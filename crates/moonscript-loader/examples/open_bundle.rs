//! Open a caller-supplied chunk through the loader, with a stubbed
//! pattern-matching collaborator, and print the exports.
//!
//! Run with `RUST_LOG=debug` to watch the registration steps.

use mlua::{Lua, Value};
use moonscript_loader::{Bundle, Dependency, Loader};
use tracing_subscriber::EnvFilter;

const BOOTSTRAP: &str = r#"
local lpeg = require("lpeg")
return {
    _NAME = "moonscript",
    pattern_backend = lpeg.backend,
}
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let lua = Lua::new();
    let loader = Loader::new(Bundle::new("bootstrap.lua", BOOTSTRAP.as_bytes()))
        .with_dependency(Dependency::new("lpeg", |lua: &Lua| {
            let stub = lua.create_table()?;
            stub.set("backend", "stub")?;
            Ok(Value::Table(stub))
        }));

    let exports = loader.open(&lua)?;
    println!("exports: {:?}", exports);
    Ok(())
}
