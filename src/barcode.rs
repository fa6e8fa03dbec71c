//! # Barcode
//!
//! Runs the full pipeline once (validate, optimize, encode, render) and keeps
//! every intermediate result.
//!
//! ```
//! use code128::Barcode;
//!
//! let barcode = Barcode::new("a\tb")?;
//! assert_eq!(barcode.symbols(), &[104, 65, 98, 73, 66, 24, 106]);
//! assert_eq!(barcode.modules().len(), 6 * 11 + 13);
//! # Ok::<(), code128::Code128Error>(())
//! ```

use std::path::Path;
use std::str::FromStr;

use image::GrayImage;
use tracing::debug;

use crate::codeset::Codeset;
use crate::encoder;
use crate::error::{Code128Error, Result};
use crate::optimizer;
use crate::render;
use crate::render::raster::{self, RasterConfig};
use crate::text::Text;

/// An encoded Code 128 barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    text: Text,
    plan: Vec<Codeset>,
    symbols: Vec<u8>,
    modules: Vec<bool>,
}

impl Barcode {
    /// Validate and encode a string.
    ///
    /// # Errors
    ///
    /// Validation errors from [`Text::parse`].
    pub fn new(input: &str) -> Result<Self> {
        Self::from_text(Text::parse(input)?)
    }

    /// Encode already validated text.
    ///
    /// # Errors
    ///
    /// Only if the optimizer and encoder disagree, which is a bug.
    pub fn from_text(text: Text) -> Result<Self> {
        let plan = optimizer::choose_codesets(&text);
        let symbols = encoder::encode(&text, &plan)?;
        let modules = render::render(&symbols)?;

        debug!(
            units = text.len(),
            symbols = symbols.len(),
            modules = modules.len(),
            "encoded barcode"
        );

        Ok(Barcode {
            text,
            plan,
            symbols,
            modules,
        })
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Codeset chosen for each unit of the text.
    pub fn plan(&self) -> &[Codeset] {
        &self.plan
    }

    /// Symbol values, ending with the checksum and End.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Module sequence without quiet zones (`true` = bar).
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// # Errors
    ///
    /// [`Code128Error::ImageTooLarge`] if `config` scales past the pixel limit.
    pub fn to_image(&self, config: &RasterConfig) -> Result<GrayImage> {
        raster::rasterize(&self.modules, config)
    }

    /// # Errors
    ///
    /// [`Code128Error::ImageTooLarge`] as for [`Barcode::to_image`], and
    /// [`Code128Error::Image`] if the file can't be written.
    pub fn save_png(&self, path: &Path, config: &RasterConfig) -> Result<()> {
        raster::save_png(path, &self.modules, config)
    }
}

impl FromStr for Barcode {
    type Err = Code128Error;

    fn from_str(s: &str) -> Result<Self> {
        Barcode::new(s)
    }
}
