//! Static key tables, in grid units
//!
//! Rows are staggered like a physical keyboard: the top letter row starts at
//! x = 0.5, the home row at 0.75 and the bottom row at 1.25. The number row
//! sits one unit above the letters, at y = -1.

use super::types::KeyboardLayout;

pub(crate) type KeyRow = &'static [(char, f64, f64)];

/// Digits in ascending order; `0` sits at the right end of the row
pub(crate) const NUMBER_ROW: KeyRow = &[
    ('0', 9.5, -1.0),
    ('1', 0.5, -1.0),
    ('2', 1.5, -1.0),
    ('3', 2.5, -1.0),
    ('4', 3.5, -1.0),
    ('5', 4.5, -1.0),
    ('6', 5.5, -1.0),
    ('7', 6.5, -1.0),
    ('8', 7.5, -1.0),
    ('9', 8.5, -1.0),
];

const QWERTY: KeyRow = &[
    ('Q', 0.5, 0.0),
    ('W', 1.5, 0.0),
    ('E', 2.5, 0.0),
    ('R', 3.5, 0.0),
    ('T', 4.5, 0.0),
    ('Y', 5.5, 0.0),
    ('U', 6.5, 0.0),
    ('I', 7.5, 0.0),
    ('O', 8.5, 0.0),
    ('P', 9.5, 0.0),
    ('A', 0.75, 1.0),
    ('S', 1.75, 1.0),
    ('D', 2.75, 1.0),
    ('F', 3.75, 1.0),
    ('G', 4.75, 1.0),
    ('H', 5.75, 1.0),
    ('J', 6.75, 1.0),
    ('K', 7.75, 1.0),
    ('L', 8.75, 1.0),
    ('Z', 1.25, 2.0),
    ('X', 2.25, 2.0),
    ('C', 3.25, 2.0),
    ('V', 4.25, 2.0),
    ('B', 5.25, 2.0),
    ('N', 6.25, 2.0),
    ('M', 7.25, 2.0),
];

const COLEMAK: KeyRow = &[
    ('Q', 0.5, 0.0),
    ('W', 1.5, 0.0),
    ('F', 2.5, 0.0),
    ('P', 3.5, 0.0),
    ('G', 4.5, 0.0),
    ('J', 5.5, 0.0),
    ('L', 6.5, 0.0),
    ('U', 7.5, 0.0),
    ('Y', 8.5, 0.0),
    ('A', 0.75, 1.0),
    ('R', 1.75, 1.0),
    ('S', 2.75, 1.0),
    ('T', 3.75, 1.0),
    ('D', 4.75, 1.0),
    ('H', 5.75, 1.0),
    ('N', 6.75, 1.0),
    ('E', 7.75, 1.0),
    ('I', 8.75, 1.0),
    ('O', 9.75, 1.0),
    ('Z', 1.25, 2.0),
    ('X', 2.25, 2.0),
    ('C', 3.25, 2.0),
    ('V', 4.25, 2.0),
    ('B', 5.25, 2.0),
    ('K', 6.25, 2.0),
    ('M', 7.25, 2.0),
];

const DVORAK: KeyRow = &[
    ('\'', 0.5, 0.0),
    (',', 1.5, 0.0),
    ('.', 2.5, 0.0),
    ('P', 3.5, 0.0),
    ('Y', 4.5, 0.0),
    ('F', 5.5, 0.0),
    ('G', 6.5, 0.0),
    ('C', 7.5, 0.0),
    ('R', 8.5, 0.0),
    ('L', 9.5, 0.0),
    ('A', 0.75, 1.0),
    ('O', 1.75, 1.0),
    ('E', 2.75, 1.0),
    ('U', 3.75, 1.0),
    ('I', 4.75, 1.0),
    ('D', 5.75, 1.0),
    ('H', 6.75, 1.0),
    ('T', 7.75, 1.0),
    ('N', 8.75, 1.0),
    ('S', 9.75, 1.0),
    (';', 1.25, 2.0),
    ('Q', 2.25, 2.0),
    ('J', 3.25, 2.0),
    ('K', 4.25, 2.0),
    ('X', 5.25, 2.0),
    ('B', 6.25, 2.0),
    ('M', 7.25, 2.0),
    ('W', 8.25, 2.0),
    ('V', 9.25, 2.0),
    ('Z', 10.25, 2.0),
];

const AZERTY: KeyRow = &[
    ('A', 0.5, 0.0),
    ('Z', 1.5, 0.0),
    ('E', 2.5, 0.0),
    ('R', 3.5, 0.0),
    ('T', 4.5, 0.0),
    ('Y', 5.5, 0.0),
    ('U', 6.5, 0.0),
    ('I', 7.5, 0.0),
    ('O', 8.5, 0.0),
    ('P', 9.5, 0.0),
    ('Q', 0.75, 1.0),
    ('S', 1.75, 1.0),
    ('D', 2.75, 1.0),
    ('F', 3.75, 1.0),
    ('G', 4.75, 1.0),
    ('H', 5.75, 1.0),
    ('J', 6.75, 1.0),
    ('K', 7.75, 1.0),
    ('L', 8.75, 1.0),
    ('M', 9.75, 1.0),
    ('W', 1.25, 2.0),
    ('X', 2.25, 2.0),
    ('C', 3.25, 2.0),
    ('V', 4.25, 2.0),
    ('B', 5.25, 2.0),
    ('N', 6.25, 2.0),
];

const ABCDEF: KeyRow = &[
    ('A', 0.5, 0.0),
    ('B', 1.5, 0.0),
    ('C', 2.5, 0.0),
    ('D', 3.5, 0.0),
    ('E', 4.5, 0.0),
    ('F', 5.5, 0.0),
    ('G', 6.5, 0.0),
    ('H', 7.5, 0.0),
    ('I', 8.5, 0.0),
    ('J', 9.5, 0.0),
    ('K', 0.75, 1.0),
    ('L', 1.75, 1.0),
    ('M', 2.75, 1.0),
    ('N', 3.75, 1.0),
    ('O', 4.75, 1.0),
    ('P', 5.75, 1.0),
    ('Q', 6.75, 1.0),
    ('R', 7.75, 1.0),
    ('S', 8.75, 1.0),
    ('T', 1.25, 2.0),
    ('U', 2.25, 2.0),
    ('V', 3.25, 2.0),
    ('W', 4.25, 2.0),
    ('X', 5.25, 2.0),
    ('Y', 6.25, 2.0),
    ('Z', 7.25, 2.0),
];

/// The letter table for a layout variant
pub(crate) fn letter_rows(variant: KeyboardLayout) -> KeyRow {
    match variant {
        KeyboardLayout::Qwerty => QWERTY,
        KeyboardLayout::Colemak => COLEMAK,
        KeyboardLayout::Dvorak => DVORAK,
        KeyboardLayout::Azerty => AZERTY,
        KeyboardLayout::Abcdef => ABCDEF,
    }
}
