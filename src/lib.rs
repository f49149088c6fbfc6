//! Keyboard Signature - trace a name across a keyboard layout
//!
//! Each letter of a name is looked up on a keyboard layout, and the key
//! positions are joined into a single stroke using one of several curve
//! strategies. The result is an SVG path, optionally wrapped in a complete
//! SVG document.
//!
//! # Example
//!
//! ```rust
//! use keyboard_signature::{generate_path, RenderConfig};
//!
//! let path = generate_path("AB", &RenderConfig::default());
//! assert_eq!(path.to_svg_d(), "M 73 100 L 343 160");
//! ```

pub mod error;
pub mod layout;
pub mod renderer;
pub mod signature;
pub mod style;

pub use error::ParseError;
pub use layout::{KeyboardLayout, Layout, LayoutConfig, Point};
pub use renderer::{render_svg, synthesize, CurveStrategy, PathDescription, PathSegment, SvgConfig};
pub use signature::{Signature, SignatureOptions};
pub use style::{StrokeConfig, StrokeStyle, Style, StyleError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout, curve, number row and stroke choices
    pub signature: SignatureOptions,
    /// Pixel geometry of keys and canvas
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signature options
    pub fn with_signature(mut self, options: SignatureOptions) -> Self {
        self.signature = options;
        self
    }

    /// Set the layout geometry
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Generate the signature for a name
    pub fn signature_for(&self, name: &str) -> Signature {
        Signature::generate(name, &self.signature, &self.layout)
    }
}

/// Generate the stroke path for a name
///
/// # Example
///
/// ```rust
/// use keyboard_signature::{generate_path, CurveStrategy, RenderConfig, SignatureOptions};
///
/// let config = RenderConfig::new()
///     .with_signature(SignatureOptions::new().with_curve(CurveStrategy::QuadraticBezier));
///
/// let path = generate_path("sad", &config);
/// assert_eq!(path.segment_count(), 2);
/// assert!(path.to_svg_d().contains(" Q "));
/// ```
pub fn generate_path(name: &str, config: &RenderConfig) -> PathDescription {
    config.signature_for(name).path().clone()
}

/// Render a name to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use keyboard_signature::render;
///
/// let svg = render("Ada");
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("<path"));
/// ```
pub fn render(name: &str) -> String {
    render_with_config(name, &RenderConfig::default())
}

/// Render a name to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use keyboard_signature::{render_with_config, RenderConfig, SignatureOptions, StrokeConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_signature(SignatureOptions::new().with_stroke(StrokeConfig::gradient("#f00", "#00f")))
///     .with_svg(SvgConfig::new().with_background("#000000").with_keyboard(true));
///
/// let svg = render_with_config("Grace", &config);
/// assert!(svg.contains("url(#pathGradient)"));
/// ```
pub fn render_with_config(name: &str, config: &RenderConfig) -> String {
    let signature = config.signature_for(name);
    render_svg(&signature, &config.layout, &config.svg)
}
