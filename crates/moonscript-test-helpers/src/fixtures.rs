//! Chunk fixtures - byte buffers for loader tests

/// A well-formed chunk that yields a recognizable exports table.
pub fn exports_chunk() -> &'static str {
    r#"return { _NAME = "moonscript", banner = "fixture" }"#
}

/// A chunk that decodes but raises as soon as it runs.
pub fn raising_chunk() -> &'static str {
    r#"error("boom")"#
}

/// A chunk that runs to completion without producing a value.
pub fn silent_chunk() -> &'static str {
    "local _ = 0"
}

/// Source the chunk reader must reject.
pub fn truncated_chunk() -> &'static str {
    "return {"
}

/// Bytes carrying the binary-chunk signature but nothing valid after it.
pub fn corrupt_binary_chunk() -> &'static [u8] {
    b"\x1bLua\x00\x00garbage"
}
