//! Signature generation: a name traced across a keyboard layout

use crate::layout::{resolve_points, KeyboardLayout, Layout, LayoutConfig, Point};
use crate::renderer::{synthesize, CurveStrategy, PathDescription};
use crate::style::{Style, StrokeConfig};

/// The choices that shape a signature
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureOptions {
    /// Keyboard arrangement the name is traced on
    pub layout: KeyboardLayout,
    /// Interpolation between key points
    pub curve: CurveStrategy,
    /// Whether digits have keys (the number row)
    pub include_numbers: bool,
    /// Stroke appearance
    pub stroke: StrokeConfig,
}

impl SignatureOptions {
    /// Create options with defaults: qwerty, linear, no numbers, white stroke
    pub fn new() -> Self {
        Self::default()
    }

    /// Options taken from a style file, defaults filling any gaps
    pub fn from_style(style: &Style) -> Self {
        let defaults = &style.signature;
        Self {
            layout: defaults.layout.unwrap_or_default(),
            curve: defaults.curve.unwrap_or_default(),
            include_numbers: defaults.include_numbers.unwrap_or(false),
            stroke: style.stroke.clone(),
        }
    }

    /// Replace each option that has an override, keeping the rest.
    ///
    /// Used to lay command-line flags over the values from a style file.
    pub fn with_overrides(
        mut self,
        layout: Option<KeyboardLayout>,
        curve: Option<CurveStrategy>,
        include_numbers: Option<bool>,
    ) -> Self {
        if let Some(layout) = layout {
            self.layout = layout;
        }
        if let Some(curve) = curve {
            self.curve = curve;
        }
        if let Some(include_numbers) = include_numbers {
            self.include_numbers = include_numbers;
        }
        self
    }

    /// Set the keyboard layout
    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the curve strategy
    pub fn with_curve(mut self, curve: CurveStrategy) -> Self {
        self.curve = curve;
        self
    }

    /// Enable or disable the number row
    pub fn with_numbers(mut self, include_numbers: bool) -> Self {
        self.include_numbers = include_numbers;
        self
    }

    /// Set the stroke appearance
    pub fn with_stroke(mut self, stroke: StrokeConfig) -> Self {
        self.stroke = stroke;
        self
    }

    /// The resolved key mapping for these options
    pub fn keyboard(&self) -> &'static Layout {
        Layout::get(self.layout, self.include_numbers)
    }
}

/// A generated signature
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    name: String,
    options: SignatureOptions,
    points: Vec<Point>,
    path: PathDescription,
}

impl Signature {
    /// Trace `name` with the given options and geometry.
    ///
    /// Characters without a key are skipped; a name with no usable
    /// characters gives an empty signature rather than an error.
    pub fn generate(name: &str, options: &SignatureOptions, geometry: &LayoutConfig) -> Self {
        let keyboard = options.keyboard();
        let transform = geometry.transform(options.include_numbers);
        let points = resolve_points(name, keyboard, &transform);
        let path = synthesize(&points, options.curve);

        tracing::debug!(
            name,
            layout = %options.layout,
            curve = %options.curve,
            include_numbers = options.include_numbers,
            points = points.len(),
            "generated signature"
        );

        Self {
            name: name.to_string(),
            options: options.clone(),
            points,
            path,
        }
    }

    /// The name as typed
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &SignatureOptions {
        &self.options
    }

    /// Stroke points in pixel space, one per matched character
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn path(&self) -> &PathDescription {
        &self.path
    }

    /// The path as an SVG `d` attribute string
    pub fn path_data(&self) -> String {
        self.path.to_svg_d()
    }

    /// True when no character of the name had a key
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The key mapping this signature was traced on
    pub fn keyboard(&self) -> &'static Layout {
        self.options.keyboard()
    }

    /// Canvas (width, height) the signature is drawn on
    pub fn canvas_size(&self, geometry: &LayoutConfig) -> (f64, f64) {
        geometry.canvas_size(self.options.include_numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StrokeStyle;

    fn generate(name: &str, options: &SignatureOptions) -> Signature {
        Signature::generate(name, options, &LayoutConfig::default())
    }

    #[test]
    fn test_default_options() {
        let options = SignatureOptions::default();
        assert_eq!(options.layout, KeyboardLayout::Qwerty);
        assert_eq!(options.curve, CurveStrategy::Linear);
        assert!(!options.include_numbers);
        assert_eq!(options.stroke, StrokeConfig::default());
    }

    #[test]
    fn test_generate_ab() {
        let sig = generate("AB", &SignatureOptions::new());
        assert_eq!(sig.name(), "AB");
        assert_eq!(sig.points().len(), 2);
        assert_eq!(sig.path_data(), "M 73 100 L 343 160");
    }

    #[test]
    fn test_generate_empty_name() {
        for curve in CurveStrategy::ALL {
            let sig = generate("", &SignatureOptions::new().with_curve(curve));
            assert!(sig.is_empty());
            assert_eq!(sig.path_data(), "");
        }
    }

    #[test]
    fn test_generate_unresolvable_name() {
        let sig = generate("!!  ??", &SignatureOptions::new());
        assert!(sig.is_empty());
        assert!(sig.points().is_empty());
    }

    #[test]
    fn test_number_row_moves_letters_down() {
        let options = SignatureOptions::new().with_numbers(true);
        let sig = generate("A1", &options);
        assert_eq!(sig.path_data(), "M 73 160 L 58 40");
        assert_eq!(sig.canvas_size(&LayoutConfig::default()), (650.0, 260.0));
    }

    #[test]
    fn test_from_style() {
        let style = Style::from_str(
            r##"
[signature]
layout = "colemak"
curve = "simple-curve"

[stroke]
style = "gradient"
"##,
        )
        .expect("Should parse");
        let options = SignatureOptions::from_style(&style);
        assert_eq!(options.layout, KeyboardLayout::Colemak);
        assert_eq!(options.curve, CurveStrategy::SimpleCurve);
        assert!(!options.include_numbers);
        assert_eq!(options.stroke.style, StrokeStyle::Gradient);
    }

    #[test]
    fn test_overrides_replace_style_values() {
        let style = Style::from_str(
            r#"
[signature]
layout = "dvorak"
curve = "cubic-bezier"
include-numbers = true
"#,
        )
        .expect("Should parse");

        let options = SignatureOptions::from_style(&style).with_overrides(
            Some(KeyboardLayout::Qwerty),
            None,
            Some(false),
        );
        assert_eq!(options.layout, KeyboardLayout::Qwerty);
        assert_eq!(options.curve, CurveStrategy::CubicBezier);
        assert!(!options.include_numbers);

        let unchanged = SignatureOptions::from_style(&style).with_overrides(None, None, None);
        assert_eq!(unchanged, SignatureOptions::from_style(&style));
    }

    #[test]
    fn test_keyboard_matches_options() {
        let options = SignatureOptions::new()
            .with_layout(KeyboardLayout::Azerty)
            .with_numbers(true);
        let sig = generate("azerty", &options);
        assert!(std::ptr::eq(sig.keyboard(), Layout::get(KeyboardLayout::Azerty, true)));
    }
}
