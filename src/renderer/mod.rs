//! Path synthesis and SVG rendering
//!
//! This module turns stroke points into a path description and wraps a
//! generated signature in a standalone SVG document.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{synthesize, CurveStrategy, PathDescription, PathSegment};
pub use svg::render_svg;
