//! # code128 - Length-Optimal Code 128 Encoder
//!
//! Converts ASCII text into Code 128 barcodes with the fewest possible
//! symbols. It provides:
//!
//! - **Validation**: ASCII 0-127 plus FNC1 (written `¤`)
//! - **Optimization**: Per-character codeset choice by dynamic programming
//! - **Encoding**: Switch, shift and FNC1 tokens plus the mod-103 checksum
//! - **Rendering**: Bar/space modules and PNG output
//!
//! ## Quick Start
//!
//! ```no_run
//! use code128::{Barcode, RasterConfig};
//! use std::path::Path;
//!
//! let barcode = Barcode::new("ab\t\t1234ab")?;
//! assert_eq!(
//!     barcode.symbols(),
//!     &[104, 65, 66, 101, 73, 73, 99, 12, 34, 100, 65, 66, 58, 106]
//! );
//!
//! barcode.save_png(Path::new("output.png"), &RasterConfig::default())?;
//! # Ok::<(), code128::Code128Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`text`] | Validation gate and input units |
//! | [`codeset`] | Codesets A, B and C |
//! | [`optimizer`] | Codeset plan selection |
//! | [`encoder`] | Symbol sequence and checksum |
//! | [`symbol`] | Symbol values and checksum |
//! | [`render`] | Bar patterns and raster images |
//! | [`barcode`] | Whole pipeline in one value |
//! | [`error`] | Error types |

pub mod barcode;
pub mod codeset;
pub mod encoder;
pub mod error;
pub mod optimizer;
pub mod render;
pub mod symbol;
pub mod text;

// Re-exports for convenience
pub use barcode::Barcode;
pub use codeset::Codeset;
pub use error::{Code128Error, Result};
pub use render::raster::RasterConfig;
pub use text::{Text, Unit, is_encodable};

/// Validate and encode a string into symbol values.
///
/// # Errors
///
/// Validation errors from [`Text::parse`].
pub fn encode_text(input: &str) -> Result<Vec<u8>> {
    let text = Text::parse(input)?;
    encoder::encode(&text, &optimizer::choose_codesets(&text))
}

/// Encode a string, or `None` if it isn't encodable.
///
/// Never returns partial output.
pub fn try_encode(input: &str) -> Option<Vec<u8>> {
    encode_text(input).ok()
}
