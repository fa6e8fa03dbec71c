//! # Encodable Text
//!
//! Validation gate between raw strings and the encoder.
//!
//! Code 128 covers ASCII 0-127 plus a handful of function codes. Of those
//! only FNC1 is supported; in string input it is written as the sentinel
//! character `¤` (U+00A4). Anything else is rejected here, so the optimizer
//! and encoder only ever see valid [`Unit`]s.
//!
//! ```
//! use code128::text::{Text, Unit};
//!
//! let text: Text = "¤01".parse()?;
//! assert_eq!(text[0], Unit::Fnc1);
//! assert_eq!(text[1], Unit::Ascii(b'0'));
//!
//! assert!(!code128::text::is_encodable("åäö"));
//! # Ok::<(), code128::Code128Error>(())
//! ```

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::{Code128Error, Result};

/// Sentinel character standing in for FNC1 in string input.
pub const FNC1_CHAR: char = '\u{00A4}';

/// One input position: an ASCII code or the FNC1 marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// ASCII code point in `0..=127`
    Ascii(u8),
    /// Function code 1
    Fnc1,
}

impl Unit {
    /// Map a character to a unit, or `None` if Code 128 can't carry it.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            FNC1_CHAR => Some(Unit::Fnc1),
            c if c.is_ascii() => Some(Unit::Ascii(c as u8)),
            _ => None,
        }
    }

    /// Character form, with FNC1 rendered as [`FNC1_CHAR`].
    pub fn to_char(self) -> char {
        match self {
            Unit::Ascii(code) => char::from(code),
            Unit::Fnc1 => FNC1_CHAR,
        }
    }

    /// Numeric value of a decimal digit unit.
    pub fn digit(self) -> Option<u8> {
        match self {
            Unit::Ascii(code @ b'0'..=b'9') => Some(code - b'0'),
            _ => None,
        }
    }
}

/// Validated, non-empty sequence of units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(Vec<Unit>);

impl Text {
    /// Validate a string.
    ///
    /// # Errors
    ///
    /// [`Code128Error::UnsupportedCharacter`] for the first character that is
    /// neither ASCII nor [`FNC1_CHAR`], and [`Code128Error::EmptyText`] for an
    /// empty string.
    pub fn parse(input: &str) -> Result<Self> {
        let units = input
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                Unit::from_char(ch).ok_or(Code128Error::UnsupportedCharacter { position, ch })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::checked(units)
    }

    /// Validate units built by hand.
    ///
    /// # Errors
    ///
    /// [`Code128Error::UnsupportedUnit`] for an ASCII unit above 127, and
    /// [`Code128Error::EmptyText`] for an empty vector.
    pub fn from_units(units: Vec<Unit>) -> Result<Self> {
        if let Some((position, code)) = units.iter().enumerate().find_map(|(i, unit)| match unit {
            Unit::Ascii(code) if *code > 127 => Some((i, *code)),
            _ => None,
        }) {
            return Err(Code128Error::UnsupportedUnit { position, code });
        }
        Self::checked(units)
    }

    fn checked(units: Vec<Unit>) -> Result<Self> {
        if units.is_empty() {
            return Err(Code128Error::EmptyText);
        }
        Ok(Text(units))
    }

    pub fn units(&self) -> &[Unit] {
        &self.0
    }
}

impl Deref for Text {
    type Target = [Unit];

    fn deref(&self) -> &[Unit] {
        &self.0
    }
}

impl FromStr for Text {
    type Err = Code128Error;

    fn from_str(s: &str) -> Result<Self> {
        Text::parse(s)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|unit| write!(f, "{}", unit.to_char()))
    }
}

/// Boolean form of the gate: `false` means "not encodable".
///
/// Empty input is not encodable either.
pub fn is_encodable(input: &str) -> bool {
    Text::parse(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ascii_and_fnc1() {
        let text = Text::parse("a\t¤9").unwrap();
        assert_eq!(
            text.units(),
            &[
                Unit::Ascii(b'a'),
                Unit::Ascii(b'\t'),
                Unit::Fnc1,
                Unit::Ascii(b'9')
            ]
        );
    }

    #[test]
    fn test_rejects_unicode() {
        assert!(!is_encodable("日本語"));
    }

    #[test]
    fn test_rejects_8bit_characters() {
        let err = Text::parse("abåäö").unwrap_err();
        assert!(matches!(
            err,
            Code128Error::UnsupportedCharacter {
                position: 2,
                ch: 'å'
            }
        ));
    }

    #[test]
    fn test_accepts_full_ascii_range() {
        let all: String = (0u8..=127).map(char::from).collect();
        let text = Text::parse(&all).unwrap();
        assert_eq!(text.len(), 128);
        assert_eq!(text[127], Unit::Ascii(127));
    }

    #[test]
    fn test_empty_is_not_encodable() {
        assert!(matches!(Text::parse(""), Err(Code128Error::EmptyText)));
        assert!(!is_encodable(""));
    }

    #[test]
    fn test_from_units_rejects_high_codes() {
        let err = Text::from_units(vec![Unit::Ascii(b'x'), Unit::Ascii(200)]).unwrap_err();
        assert!(matches!(
            err,
            Code128Error::UnsupportedUnit {
                position: 1,
                code: 200
            }
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let text: Text = "¤12ab\r".parse().unwrap();
        assert_eq!(text.to_string(), "¤12ab\r");
    }

    #[test]
    fn test_digit() {
        assert_eq!(Unit::Ascii(b'7').digit(), Some(7));
        assert_eq!(Unit::Ascii(b'a').digit(), None);
        assert_eq!(Unit::Fnc1.digit(), None);
    }
}
