//! Error types for the YM7128B emulator.
//!
//! The core engine has no propagating error path (spec.md §7): register
//! writes mask invalid bits instead of failing, and `process` is total
//! given a constructed engine. Everything fallible lives in the
//! configuration, sample-format, and CLI layers, reported through
//! [`Ym7128BError`].

/// Error taxonomy for configuration, I/O, and allocation failures
/// surrounding the core DSP engine.
#[derive(thiserror::Error, Debug)]
pub enum Ym7128BError {
    /// Unknown format/engine/register/preset name, malformed hex, an
    /// out-of-range rate, or an out-of-range register value.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Short read mid-sample, or a write failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Delay buffer allocation failure in `Setup` or construction.
    #[error("allocation error: {0}")]
    AllocError(String),

    /// Malformed input while parsing a register dump or preset name.
    #[error("parse error: {0}")]
    ParseError(String),
}

impl From<String> for Ym7128BError {
    /// Converts a bare string into [`Ym7128BError::ConfigError`].
    ///
    /// Prefer the specific variant constructors where the error category is
    /// known; this conversion exists for call sites that only have a
    /// formatted message in hand.
    fn from(msg: String) -> Self {
        Ym7128BError::ConfigError(msg)
    }
}

impl From<&str> for Ym7128BError {
    /// Converts a string slice into [`Ym7128BError::ConfigError`].
    fn from(msg: &str) -> Self {
        Ym7128BError::ConfigError(msg.to_string())
    }
}

/// Result type for the configuration/format/CLI layers.
pub type Result<T> = std::result::Result<T, Ym7128BError>;
