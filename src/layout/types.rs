//! Core types for keyboard layouts and key positions

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseError;

/// A 2D point in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A key's location on the keyboard, in grid units (one unit per key pitch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPosition {
    pub x: f64,
    pub y: f64,
}

impl GridPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The supported keyboard arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardLayout {
    #[default]
    Qwerty,
    Colemak,
    Dvorak,
    Azerty,
    /// Alphabetical rows, A through Z
    Abcdef,
}

impl KeyboardLayout {
    /// Every layout, in display order
    pub const ALL: [KeyboardLayout; 5] = [
        KeyboardLayout::Qwerty,
        KeyboardLayout::Colemak,
        KeyboardLayout::Dvorak,
        KeyboardLayout::Azerty,
        KeyboardLayout::Abcdef,
    ];

    /// The lowercase name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            KeyboardLayout::Qwerty => "qwerty",
            KeyboardLayout::Colemak => "colemak",
            KeyboardLayout::Dvorak => "dvorak",
            KeyboardLayout::Azerty => "azerty",
            KeyboardLayout::Abcdef => "abcdef",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            KeyboardLayout::Qwerty => 0,
            KeyboardLayout::Colemak => 1,
            KeyboardLayout::Dvorak => 2,
            KeyboardLayout::Azerty => 3,
            KeyboardLayout::Abcdef => 4,
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardLayout {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        KeyboardLayout::ALL
            .into_iter()
            .find(|layout| layout.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = KeyboardLayout::ALL.iter().map(|l| l.name()).collect();
                ParseError::unknown_layout(s, &names)
            })
    }
}

/// A resolved character-to-position mapping for one layout variant
///
/// Keys keep their table order: the number row first when enabled, then the
/// letter rows top to bottom.
#[derive(Debug)]
pub struct Layout {
    variant: KeyboardLayout,
    include_numbers: bool,
    keys: Vec<(char, GridPosition)>,
    index: HashMap<char, GridPosition>,
}

impl Layout {
    pub(crate) fn from_rows(
        variant: KeyboardLayout,
        include_numbers: bool,
        rows: &[&[(char, f64, f64)]],
    ) -> Self {
        let mut keys: Vec<(char, GridPosition)> = Vec::new();
        let mut index = HashMap::new();

        for row in rows {
            for &(ch, x, y) in row.iter() {
                let pos = GridPosition::new(x, y);
                // Later rows win on conflict; the key keeps its first slot
                if index.insert(ch, pos).is_some() {
                    if let Some(slot) = keys.iter_mut().find(|(existing, _)| *existing == ch) {
                        slot.1 = pos;
                    }
                } else {
                    keys.push((ch, pos));
                }
            }
        }

        Self {
            variant,
            include_numbers,
            keys,
            index,
        }
    }

    /// The variant this mapping was built from
    pub fn variant(&self) -> KeyboardLayout {
        self.variant
    }

    /// Whether the number row is part of this mapping
    pub fn includes_numbers(&self) -> bool {
        self.include_numbers
    }

    /// Look up the position of an (already uppercased) character
    pub fn position(&self, ch: char) -> Option<GridPosition> {
        self.index.get(&ch).copied()
    }

    /// Check whether the character has a key on this layout
    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// All keys in table order
    pub fn keys(&self) -> impl Iterator<Item = (char, GridPosition)> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
