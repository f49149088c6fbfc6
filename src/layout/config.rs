//! Geometry configuration for placing keys and strokes in pixel space

use super::transform::PixelTransform;
use super::types::{GridPosition, Point};

/// Configuration options for turning grid positions into pixels
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Distance between neighbouring keys, in pixels per grid unit
    pub key_pitch: f64,

    /// Horizontal offset applied to stroke points
    pub stroke_offset_x: f64,

    /// Vertical offset applied to stroke points when the number row is hidden
    pub stroke_offset_y: f64,

    /// Vertical offset applied to stroke points when the number row is shown
    pub stroke_offset_y_with_numbers: f64,

    /// Vertical offset of drawn keys when the number row is hidden
    pub key_offset_y: f64,

    /// Vertical offset of drawn keys when the number row is shown
    pub key_offset_y_with_numbers: f64,

    /// Size of a drawn key (width, height)
    pub key_size: (f64, f64),

    /// Corner radius of a drawn key
    pub key_corner_radius: f64,

    /// Canvas width
    pub canvas_width: f64,

    /// Canvas height when the number row is hidden
    pub canvas_height: f64,

    /// Canvas height when the number row is shown
    pub canvas_height_with_numbers: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            key_pitch: 60.0,
            stroke_offset_x: 28.0,
            stroke_offset_y: 40.0,
            stroke_offset_y_with_numbers: 100.0,
            key_offset_y: 15.0,
            key_offset_y_with_numbers: 75.0,
            key_size: (56.0, 48.0),
            key_corner_radius: 8.0,
            canvas_width: 650.0,
            canvas_height: 200.0,
            canvas_height_with_numbers: 260.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key pitch
    pub fn with_key_pitch(mut self, pitch: f64) -> Self {
        self.key_pitch = pitch;
        self
    }

    /// Set the stroke offsets (x, y without numbers, y with numbers)
    pub fn with_stroke_offsets(mut self, x: f64, y: f64, y_with_numbers: f64) -> Self {
        self.stroke_offset_x = x;
        self.stroke_offset_y = y;
        self.stroke_offset_y_with_numbers = y_with_numbers;
        self
    }

    /// Set the drawn key size
    pub fn with_key_size(mut self, width: f64, height: f64) -> Self {
        self.key_size = (width, height);
        self
    }

    /// Set the canvas size (width, height without numbers, height with numbers)
    pub fn with_canvas_size(mut self, width: f64, height: f64, height_with_numbers: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self.canvas_height_with_numbers = height_with_numbers;
        self
    }

    /// The grid-to-pixel transform for stroke points
    pub fn transform(&self, include_numbers: bool) -> PixelTransform {
        let offset_y = if include_numbers {
            self.stroke_offset_y_with_numbers
        } else {
            self.stroke_offset_y
        };
        PixelTransform::new(self.key_pitch, self.stroke_offset_x, offset_y)
    }

    /// Canvas (width, height) for the given number row setting
    pub fn canvas_size(&self, include_numbers: bool) -> (f64, f64) {
        let height = if include_numbers {
            self.canvas_height_with_numbers
        } else {
            self.canvas_height
        };
        (self.canvas_width, height)
    }

    /// Top-left corner of a drawn key
    pub fn key_origin(&self, pos: GridPosition, include_numbers: bool) -> Point {
        let offset_y = if include_numbers {
            self.key_offset_y_with_numbers
        } else {
            self.key_offset_y
        };
        Point::new(pos.x * self.key_pitch, pos.y * self.key_pitch + offset_y)
    }
}
