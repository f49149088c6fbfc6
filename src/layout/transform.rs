//! Grid-to-pixel transformation for stroke points.
//!
//! Key positions are stored in grid units. A stroke point sits at the centre
//! of its key, so the transform scales by the key pitch and shifts by half a
//! key plus the canvas margin:
//!
//! ```text
//! pixel_x = grid_x * pitch + offset_x
//! pixel_y = grid_y * pitch + offset_y
//! ```
//!
//! With the default geometry this is `x * 60 + 28` and `y * 60 + 40`, or
//! `y * 60 + 100` when the number row pushes the letters down.

use super::types::{GridPosition, Point};

/// An axis-aligned scale-and-offset transform from grid units to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    /// Pixels per grid unit
    pub scale: f64,
    /// Horizontal offset in pixels
    pub offset_x: f64,
    /// Vertical offset in pixels
    pub offset_y: f64,
}

impl PixelTransform {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// The default transform for the given number row setting
    pub fn for_numbers(include_numbers: bool) -> Self {
        let offset_y = if include_numbers { 100.0 } else { 40.0 };
        Self::new(60.0, 28.0, offset_y)
    }

    /// Map a grid position to pixel space
    pub fn apply(&self, pos: GridPosition) -> Point {
        Point::new(
            pos.x * self.scale + self.offset_x,
            pos.y * self.scale + self.offset_y,
        )
    }
}

impl Default for PixelTransform {
    fn default() -> Self {
        Self::for_numbers(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;

    #[test]
    fn test_default_transform_without_numbers() {
        let t = PixelTransform::for_numbers(false);
        assert_eq!(t.apply(GridPosition::new(0.75, 1.0)), Point::new(73.0, 100.0));
        assert_eq!(t.apply(GridPosition::new(5.25, 2.0)), Point::new(343.0, 160.0));
    }

    #[test]
    fn test_default_transform_with_numbers() {
        let t = PixelTransform::for_numbers(true);
        assert_eq!(t.apply(GridPosition::new(0.5, -1.0)), Point::new(58.0, 40.0));
        assert_eq!(t.apply(GridPosition::new(0.75, 1.0)), Point::new(73.0, 160.0));
    }

    #[test]
    fn test_matches_default_layout_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.transform(false), PixelTransform::for_numbers(false));
        assert_eq!(config.transform(true), PixelTransform::for_numbers(true));
    }

    #[test]
    fn test_origin_maps_to_offsets() {
        let t = PixelTransform::new(10.0, 3.0, 4.0);
        assert_eq!(t.apply(GridPosition::new(0.0, 0.0)), Point::new(3.0, 4.0));
    }
}
