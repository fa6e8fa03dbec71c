//! # Error Types
//!
//! This module defines error types used throughout the code128 library.
//!
//! Input problems (unsupported characters, empty text) come from the
//! validation gate. Malformed symbol sequences come from the renderer.
//! [`Code128Error::InvalidPlan`] means the optimizer produced a plan the
//! encoder cannot follow, which is a bug rather than a user error.

use thiserror::Error;

use crate::codeset::Codeset;

/// Main error type for code128 operations
#[derive(Debug, Error)]
pub enum Code128Error {
    /// Character outside ASCII 0-127 that is not the FNC1 sentinel
    #[error("Unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { position: usize, ch: char },

    /// Unit built from a raw code above 127
    #[error("Unsupported code {code} at position {position}")]
    UnsupportedUnit { position: usize, code: u8 },

    /// Nothing to encode
    #[error("Text is empty")]
    EmptyText,

    /// Plan and text disagree on length
    #[error("Plan covers {plan} units but text has {text}")]
    PlanLengthMismatch { text: usize, plan: usize },

    /// Plan asks a codeset to encode something it cannot represent
    #[error("Plan selects codeset {codeset} at position {position}, which cannot encode it")]
    InvalidPlan { position: usize, codeset: Codeset },

    /// Symbol sequence is empty or its last symbol is not End
    #[error("Malformed symbols: sequence is not terminated with the End token")]
    MissingEndToken,

    /// End token found before the last position
    #[error("Malformed symbols: End token at position {position} before the end")]
    MisplacedEndToken { position: usize },

    /// Symbol value outside 0-106
    #[error("Malformed symbols: invalid value {value} at position {position}")]
    InvalidSymbol { position: usize, value: u8 },

    /// Raster dimensions overflow `u32` or the pixel limit
    #[error(
        "Image too large: {modules} modules with a {quiet_zone}-module quiet zone at {module_width} px per module"
    )]
    ImageTooLarge {
        modules: usize,
        quiet_zone: u32,
        module_width: u32,
    },

    /// Image encoding or saving error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Code128Error>;
