//! Keyboard layout registry
//!
//! Maps a keyboard variant and number-row setting to the positions of its
//! keys, and resolves names into stroke points in pixel space.

pub mod config;
pub mod resolve;
mod tables;
pub mod transform;
pub mod types;

pub use config::LayoutConfig;
pub use resolve::{active_keys, current_key, key_state, resolve_points, KeyState};
pub use transform::PixelTransform;
pub use types::*;

use std::sync::OnceLock;

/// Every (variant, number row) combination, built on first use
static LAYOUTS: OnceLock<Vec<Layout>> = OnceLock::new();

fn build_layouts() -> Vec<Layout> {
    let mut layouts = Vec::with_capacity(KeyboardLayout::ALL.len() * 2);
    for variant in KeyboardLayout::ALL {
        let letters = tables::letter_rows(variant);
        layouts.push(Layout::from_rows(variant, false, &[letters]));
        layouts.push(Layout::from_rows(variant, true, &[tables::NUMBER_ROW, letters]));
    }
    tracing::debug!(count = layouts.len(), "built keyboard layouts");
    layouts
}

impl Layout {
    /// The character mapping for a layout variant.
    ///
    /// With `include_numbers` the letter rows are overlaid on the digit row,
    /// so the digits come first in key order.
    /// Repeated calls return the same instance.
    pub fn get(variant: KeyboardLayout, include_numbers: bool) -> &'static Layout {
        let layouts = LAYOUTS.get_or_init(build_layouts);
        &layouts[variant.index() * 2 + usize::from(include_numbers)]
    }
}
