//! # Bar Pattern Table
//!
//! Module patterns for every Code 128 symbol value, most significant bit
//! first (the leftmost module). A set bit is a bar.
//!
//! Each symbol is 11 modules wide: three bars and three spaces, starting
//! with a bar and ending with a space. End (106) is 13 modules wide because
//! it carries the final 2-module stop bar.

/// Width of every symbol except End, in modules
pub const SYMBOL_WIDTH: usize = 11;

/// Width of the End symbol including the terminating bar, in modules
pub const STOP_WIDTH: usize = 13;

/// Patterns indexed by symbol value.
pub const PATTERNS: [u16; 107] = [
    0b11011001100, // 0
    0b11001101100, // 1
    0b11001100110, // 2
    0b10010011000, // 3
    0b10010001100, // 4
    0b10001001100, // 5
    0b10011001000, // 6
    0b10011000100, // 7
    0b10001100100, // 8
    0b11001001000, // 9
    0b11001000100, // 10
    0b11000100100, // 11
    0b10110011100, // 12
    0b10011011100, // 13
    0b10011001110, // 14
    0b10111001100, // 15
    0b10011101100, // 16
    0b10011100110, // 17
    0b11001110010, // 18
    0b11001011100, // 19
    0b11001001110, // 20
    0b11011100100, // 21
    0b11001110100, // 22
    0b11101101110, // 23
    0b11101001100, // 24
    0b11100101100, // 25
    0b11100100110, // 26
    0b11101100100, // 27
    0b11100110100, // 28
    0b11100110010, // 29
    0b11011011000, // 30
    0b11011000110, // 31
    0b11000110110, // 32
    0b10100011000, // 33
    0b10001011000, // 34
    0b10001000110, // 35
    0b10110001000, // 36
    0b10001101000, // 37
    0b10001100010, // 38
    0b11010001000, // 39
    0b11000101000, // 40
    0b11000100010, // 41
    0b10110111000, // 42
    0b10110001110, // 43
    0b10001101110, // 44
    0b10111011000, // 45
    0b10111000110, // 46
    0b10001110110, // 47
    0b11101110110, // 48
    0b11010001110, // 49
    0b11000101110, // 50
    0b11011101000, // 51
    0b11011100010, // 52
    0b11011101110, // 53
    0b11101011000, // 54
    0b11101000110, // 55
    0b11100010110, // 56
    0b11101101000, // 57
    0b11101100010, // 58
    0b11100011010, // 59
    0b11101111010, // 60
    0b11001000010, // 61
    0b11110001010, // 62
    0b10100110000, // 63
    0b10100001100, // 64
    0b10010110000, // 65
    0b10010000110, // 66
    0b10000101100, // 67
    0b10000100110, // 68
    0b10110010000, // 69
    0b10110000100, // 70
    0b10011010000, // 71
    0b10011000010, // 72
    0b10000110100, // 73
    0b10000110010, // 74
    0b11000010010, // 75
    0b11001010000, // 76
    0b11110111010, // 77
    0b11000010100, // 78
    0b10001111010, // 79
    0b10100111100, // 80
    0b10010111100, // 81
    0b10010011110, // 82
    0b10111100100, // 83
    0b10011110100, // 84
    0b10011110010, // 85
    0b11110100100, // 86
    0b11110010100, // 87
    0b11110010010, // 88
    0b11011011110, // 89
    0b11011110110, // 90
    0b11110110110, // 91
    0b10101111000, // 92
    0b10100011110, // 93
    0b10001011110, // 94
    0b10111101000, // 95
    0b10111100010, // 96
    0b11110101000, // 97
    0b11110100010, // 98
    0b10111011110, // 99
    0b10111101110, // 100
    0b11101011110, // 101
    0b11110101110, // 102
    0b11010000100, // 103
    0b11010010000, // 104
    0b11010011100, // 105
    0b1100011101011, // 106
];

/// Pattern and width for a symbol value, or `None` above 106.
pub fn pattern(value: u8) -> Option<(u16, usize)> {
    let bits = *PATTERNS.get(usize::from(value))?;
    let width = if value == crate::symbol::END {
        STOP_WIDTH
    } else {
        SYMBOL_WIDTH
    };
    Some((bits, width))
}
