//! # Code 128 Symbol Values
//!
//! Every Code 128 symbol is a value in `0..=106`. Values below 96 are data
//! whose meaning depends on the active codeset; the rest are control tokens.
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0-95  | Data (codeset dependent) |
//! | 96-97 | Reserved (FNC3/FNC2, unused here) |
//! | 98    | Shift |
//! | 99    | Switch to codeset C |
//! | 100   | Switch to codeset B |
//! | 101   | Switch to codeset A |
//! | 102   | FNC1 |
//! | 103   | Start in codeset A |
//! | 104   | Start in codeset B |
//! | 105   | Start in codeset C |
//! | 106   | End (stop pattern) |

/// Temporary switch between A and B for the next character only
pub const SHIFT: u8 = 98;

/// Switch to codeset C
pub const CODE_C: u8 = 99;

/// Switch to codeset B
pub const CODE_B: u8 = 100;

/// Switch to codeset A
pub const CODE_A: u8 = 101;

/// Function code 1 (non-printing marker)
pub const FNC1: u8 = 102;

/// Start in codeset A
pub const START_A: u8 = 103;

/// Start in codeset B
pub const START_B: u8 = 104;

/// Start in codeset C
pub const START_C: u8 = 105;

/// End token, always the last symbol and preceded by the checksum
pub const END: u8 = 106;

/// Modulus of the weighted checksum
pub const CHECKSUM_MODULUS: usize = 103;

/// Compute the Code 128 checksum over `symbols`.
///
/// The first symbol (the start token) has weight 1, every later symbol has
/// weight equal to its index.
///
/// ```
/// use code128::symbol::checksum;
///
/// // Start C, "12", "34"
/// assert_eq!(checksum(&[105, 12, 34]), 82);
/// ```
pub fn checksum(symbols: &[u8]) -> u8 {
    let sum: usize = symbols
        .iter()
        .enumerate()
        .map(|(i, &value)| i.max(1) * usize::from(value))
        .sum();
    (sum % CHECKSUM_MODULUS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_start_has_weight_one() {
        assert_eq!(checksum(&[START_B]), START_B % 103);
        assert_eq!(checksum(&[START_B, 1]), (104 + 1) % 103);
    }

    #[test]
    fn test_checksum_test_string() {
        // "test" in codeset B
        assert_eq!(checksum(&[104, 84, 69, 83, 84]), 87);
    }

    #[test]
    fn test_checksum_empty() {
        assert_eq!(checksum(&[]), 0);
    }
}
