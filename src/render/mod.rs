//! # Rendering Module
//!
//! Turns a symbol sequence into bars.
//!
//! ## Modules
//!
//! - [`table`]: Fixed bar/space pattern for every symbol value
//! - [`raster`]: Monochrome image output with quiet zone and scaling
//!
//! ## Usage Example
//!
//! ```
//! use code128::render::{self, raster::RasterConfig};
//!
//! let modules = render::render(&[105, 12, 34, 82, 106])?;
//! assert_eq!(modules.len(), 4 * 11 + 13);
//!
//! let image = render::raster::rasterize(&modules, &RasterConfig::default())?;
//! assert_eq!(image.width(), (57 + 20) as u32);
//! # Ok::<(), code128::Code128Error>(())
//! ```

pub mod raster;
pub mod table;

use crate::error::{Code128Error, Result};
use crate::symbol;

/// Expand symbols into modules (`true` = bar).
///
/// Patterns are concatenated in order with no separators; End contributes
/// the 13-module stop pattern.
///
/// # Errors
///
/// - [`Code128Error::MissingEndToken`] if `symbols` is empty or doesn't end
///   with End
/// - [`Code128Error::MisplacedEndToken`] if End appears earlier
/// - [`Code128Error::InvalidSymbol`] for values above 106
pub fn render(symbols: &[u8]) -> Result<Vec<bool>> {
    match symbols.last() {
        Some(&symbol::END) => {}
        _ => return Err(Code128Error::MissingEndToken),
    }

    let mut modules = Vec::with_capacity(module_count(symbols.len()));
    for (position, &value) in symbols.iter().enumerate() {
        if value == symbol::END && position + 1 != symbols.len() {
            return Err(Code128Error::MisplacedEndToken { position });
        }
        let (bits, width) =
            table::pattern(value).ok_or(Code128Error::InvalidSymbol { position, value })?;
        modules.extend((0..width).rev().map(|bit| (bits >> bit) & 1 == 1));
    }

    Ok(modules)
}

/// Number of modules [`render`] produces for `symbols` symbols.
pub fn module_count(symbols: usize) -> usize {
    match symbols {
        0 => 0,
        n => (n - 1) * table::SYMBOL_WIDTH + table::STOP_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_render_length() {
        let symbols = [104, 84, 69, 83, 84, 87, 106];
        let modules = render(&symbols).unwrap();
        assert_eq!(modules.len(), 6 * 11 + 13);
        assert_eq!(modules.len(), module_count(symbols.len()));
    }

    #[test]
    fn test_render_is_high_bit_first() {
        let modules = render(&[105, 12, 34, 82, 106]).unwrap();
        assert_eq!(&modules[..11], bits("11010011100").as_slice());
        assert_eq!(&modules[modules.len() - 13..], bits("1100011101011").as_slice());
    }

    #[test]
    fn test_end_alone_is_the_stop_pattern() {
        assert_eq!(render(&[106]).unwrap(), bits("1100011101011"));
    }

    #[test]
    fn test_missing_end() {
        assert!(matches!(render(&[]), Err(Code128Error::MissingEndToken)));
        assert!(matches!(
            render(&[104, 33, 34]),
            Err(Code128Error::MissingEndToken)
        ));
    }

    #[test]
    fn test_misplaced_end() {
        assert!(matches!(
            render(&[104, 106, 33, 106]),
            Err(Code128Error::MisplacedEndToken { position: 1 })
        ));
    }

    #[test]
    fn test_invalid_symbol() {
        assert!(matches!(
            render(&[104, 200, 106]),
            Err(Code128Error::InvalidSymbol {
                position: 1,
                value: 200
            })
        ));
    }

    #[test]
    fn test_module_count() {
        assert_eq!(module_count(0), 0);
        assert_eq!(module_count(1), 13);
        assert_eq!(module_count(5), 57);
    }
}
