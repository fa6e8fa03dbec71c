//! # Codesets
//!
//! Code 128 has three overlapping character subsets. The active codeset
//! decides what a data symbol (0-95) means.
//!
//! | Codeset | Covers | Data value |
//! |---------|--------|------------|
//! | A | ASCII 0-95 | `c - 32` for `c >= 32`, else `c + 64` |
//! | B | ASCII 32-127 | `c - 32` |
//! | C | digit pairs `00`-`99` | `10 * d0 + d1` |
//!
//! The set is closed, so each codeset's tokens and single-character
//! mapping live in a fixed table indexed by [`Codeset::index`].

use std::fmt;

use crate::symbol;
use crate::text::Unit;

/// One of the three Code 128 character subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codeset {
    /// Control characters, uppercase letters, digits and punctuation
    A,
    /// Printable ASCII including lowercase
    B,
    /// Pairs of decimal digits
    C,
}

struct Entry {
    start: u8,
    switch: u8,
    map: fn(u8) -> Option<u8>,
}

static TABLE: [Entry; 3] = [
    Entry {
        start: symbol::START_A,
        switch: symbol::CODE_A,
        map: map_a,
    },
    Entry {
        start: symbol::START_B,
        switch: symbol::CODE_B,
        map: map_b,
    },
    Entry {
        start: symbol::START_C,
        switch: symbol::CODE_C,
        map: map_none,
    },
];

fn map_a(code: u8) -> Option<u8> {
    match code {
        0..=31 => Some(code + 64),
        32..=95 => Some(code - 32),
        _ => None,
    }
}

fn map_b(code: u8) -> Option<u8> {
    match code {
        32..=127 => Some(code - 32),
        _ => None,
    }
}

fn map_none(_: u8) -> Option<u8> {
    None
}

impl Codeset {
    /// All codesets in table order.
    pub const ALL: [Codeset; 3] = [Codeset::A, Codeset::B, Codeset::C];

    /// Row of this codeset in per-codeset tables.
    pub const fn index(self) -> usize {
        match self {
            Codeset::A => 0,
            Codeset::B => 1,
            Codeset::C => 2,
        }
    }

    fn entry(self) -> &'static Entry {
        &TABLE[self.index()]
    }

    /// Start token that opens a barcode in this codeset.
    pub fn start_symbol(self) -> u8 {
        self.entry().start
    }

    /// Token that switches the active codeset to this one.
    pub fn switch_symbol(self) -> u8 {
        self.entry().switch
    }

    /// Data value of a single ASCII code, if this codeset has one.
    ///
    /// Codeset C never encodes single characters.
    pub fn data_value(self, code: u8) -> Option<u8> {
        (self.entry().map)(code)
    }

    pub fn encodes(self, code: u8) -> bool {
        self.data_value(code).is_some()
    }

    /// Codeset reachable through Shift from this one (A and B only).
    pub fn shift_target(self) -> Option<Codeset> {
        match self {
            Codeset::A => Some(Codeset::B),
            Codeset::B => Some(Codeset::A),
            Codeset::C => None,
        }
    }

    /// Codeset C value of two consecutive digit units.
    pub fn pair_value(first: Unit, second: Unit) -> Option<u8> {
        Some(first.digit()? * 10 + second.digit()?)
    }
}

impl fmt::Display for Codeset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Codeset::A => "A",
            Codeset::B => "B",
            Codeset::C => "C",
        };
        f.write_str(name)
    }
}
