//! Resolve a typed name against a layout

use std::collections::BTreeSet;

use super::transform::PixelTransform;
use super::types::{Layout, Point};

/// How a key relates to the name being traced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Not part of the name
    Idle,
    /// Used somewhere in the name
    Active,
    /// The last character typed
    Current,
}

fn uppercase_chars(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_uppercase)
}

/// Map each character of `name` to a stroke point.
///
/// The name is uppercased first. Characters without a key on the layout
/// (spaces, punctuation, digits when the number row is off) are skipped.
/// Repeated characters produce repeated points.
pub fn resolve_points(name: &str, layout: &Layout, transform: &PixelTransform) -> Vec<Point> {
    uppercase_chars(name)
        .filter_map(|ch| match layout.position(ch) {
            Some(pos) => Some(transform.apply(pos)),
            None => {
                tracing::trace!(?ch, layout = %layout.variant(), "skipping character without a key");
                None
            }
        })
        .collect()
}

/// The set of layout keys the name touches
pub fn active_keys(name: &str, layout: &Layout) -> BTreeSet<char> {
    uppercase_chars(name).filter(|ch| layout.contains(*ch)).collect()
}

/// The key for the last character of the name, if the layout has one
pub fn current_key(name: &str, layout: &Layout) -> Option<char> {
    let last = name.chars().last()?.to_uppercase().last()?;
    layout.contains(last).then_some(last)
}

/// Classify a key for highlighting
pub fn key_state(name: &str, layout: &Layout, key: char) -> KeyState {
    if current_key(name, layout) == Some(key) {
        KeyState::Current
    } else if active_keys(name, layout).contains(&key) {
        KeyState::Active
    } else {
        KeyState::Idle
    }
}
