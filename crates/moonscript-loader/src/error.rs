use thiserror::Error;

/// Failures surfaced while opening the bundled module.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The embedded chunk is not something the interpreter can load.
    #[error("cannot load chunk '{chunk}': {reason}")]
    Decode { chunk: String, reason: String },

    /// Interpreter-side failure outside the decode step (dependency
    /// openers, chunk execution), passed through untouched.
    #[error(transparent)]
    Lua(#[from] mlua::Error),
}

impl LoaderError {
    pub(crate) fn decode(chunk: &str, reason: impl std::fmt::Display) -> Self {
        Self::Decode {
            chunk: chunk.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the failure came from decoding the embedded chunk.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
