//! # Barcode Rasterizer
//!
//! Draws a module sequence as a monochrome image: black bars on a white
//! background, with a blank quiet zone on both sides.
//!
//! ## Geometry
//!
//! ```text
//! width  = (modules + 2 * quiet_zone_modules) * module_width_px
//! height = height_px
//! ```

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use tracing::debug;

use crate::error::{Code128Error, Result};

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// # Raster Configuration
///
/// Controls how modules map to pixels.
///
/// | Preset | Quiet zone | Module width | Height |
/// |--------|------------|--------------|--------|
/// | `DEFAULT` | 10 modules | 1 px | 20 px |
/// | `LARGE` | 10 modules | 3 px | 42 px |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterConfig {
    /// Blank margin on each side, in modules
    pub quiet_zone_modules: u32,

    /// Pixels per module
    pub module_width_px: u32,

    /// Bar height in pixels
    pub height_px: u32,
}

impl RasterConfig {
    /// Smallest legible output, one pixel per module.
    pub const DEFAULT: Self = Self {
        quiet_zone_modules: 10,
        module_width_px: 1,
        height_px: 20,
    };

    /// Three pixels per module, comfortable for camera scanners.
    pub const LARGE: Self = Self {
        quiet_zone_modules: 10,
        module_width_px: 3,
        height_px: 42,
    };

    pub fn quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone_modules = modules;
        self
    }

    /// Pixels per module (at least 1).
    pub fn module_width(mut self, px: u32) -> Self {
        self.module_width_px = px.max(1);
        self
    }

    /// Image height in pixels (at least 1).
    pub fn height(mut self, px: u32) -> Self {
        self.height_px = px.max(1);
        self
    }

    /// Image width for `modules` modules, quiet zones included.
    ///
    /// # Errors
    ///
    /// [`Code128Error::ImageTooLarge`] if the width doesn't fit in `u32`.
    pub fn image_width(&self, modules: usize) -> Result<u32> {
        let too_large = || Code128Error::ImageTooLarge {
            modules,
            quiet_zone: self.quiet_zone_modules,
            module_width: self.module_width_px,
        };

        u32::try_from(modules)
            .ok()
            .and_then(|m| m.checked_add(self.quiet_zone_modules.checked_mul(2)?))
            .and_then(|total| total.checked_mul(self.module_width_px))
            .ok_or_else(too_large)
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Upper bound on `width * height`, one byte per pixel.
pub const MAX_PIXELS: u64 = 1 << 30;

/// Draw `modules` into a grayscale image.
///
/// # Errors
///
/// [`Code128Error::ImageTooLarge`] if the image would be wider than
/// `u32::MAX` pixels or hold more than [`MAX_PIXELS`] pixels.
pub fn rasterize(modules: &[bool], config: &RasterConfig) -> Result<GrayImage> {
    let width = config.image_width(modules.len())?;
    if u64::from(width) * u64::from(config.height_px) > MAX_PIXELS {
        return Err(Code128Error::ImageTooLarge {
            modules: modules.len(),
            quiet_zone: config.quiet_zone_modules,
            module_width: config.module_width_px,
        });
    }

    // Every column below is inside `width`, which fits in u32
    let mut img = GrayImage::from_pixel(width, config.height_px, WHITE);

    for (i, _) in modules.iter().enumerate().filter(|(_, bar)| **bar) {
        let x0 = (config.quiet_zone_modules + i as u32) * config.module_width_px;
        for x in x0..x0 + config.module_width_px {
            for y in 0..config.height_px {
                img.put_pixel(x, y, BLACK);
            }
        }
    }

    Ok(img)
}

/// Rasterize `modules` and save them as a PNG file.
///
/// # Errors
///
/// [`Code128Error::ImageTooLarge`] as for [`rasterize`], and
/// [`Code128Error::Image`] if the file can't be written.
pub fn save_png(path: &Path, modules: &[bool], config: &RasterConfig) -> Result<()> {
    let img = rasterize(modules, config)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "saving barcode png"
    );

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| Code128Error::Image(format!("Failed to save PNG: {}", e)))
}
