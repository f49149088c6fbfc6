//! SVG generation for signatures

use crate::layout::{active_keys, current_key, KeyState, LayoutConfig};
use crate::signature::Signature;
use crate::style::StrokeStyle;

use super::SvgConfig;

/// Id of the gradient definition referenced by gradient strokes
pub const GRADIENT_ID: &str = "pathGradient";

/// Colours for one key state
struct KeyPaint {
    fill: &'static str,
    fill_opacity: Option<f64>,
    stroke: &'static str,
    stroke_opacity: Option<f64>,
    text: &'static str,
}

fn key_paint(state: KeyState) -> KeyPaint {
    match state {
        KeyState::Idle => KeyPaint {
            fill: "none",
            fill_opacity: None,
            stroke: "#262626",
            stroke_opacity: Some(0.5),
            text: "#d4d4d4",
        },
        KeyState::Active => KeyPaint {
            fill: "#171717",
            fill_opacity: None,
            stroke: "#262626",
            stroke_opacity: None,
            text: "#ffffff",
        },
        KeyState::Current => KeyPaint {
            fill: "#ffffff",
            fill_opacity: Some(0.5),
            stroke: "#a3a3a3",
            stroke_opacity: None,
            text: "#000000",
        },
    }
}

fn state_class(state: KeyState) -> &'static str {
    match state {
        KeyState::Idle => "idle",
        KeyState::Active => "active",
        KeyState::Current => "current",
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    width: f64,
    height: f64,
    title: Option<String>,
    defs: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder for a canvas of the given size
    pub fn new(config: SvgConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width,
            height,
            title: None,
            defs: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Set the document title
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Add a left-to-right linear gradient definition
    pub fn add_gradient(&mut self, id: &str, start: &str, end: &str) {
        self.defs.push(format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="{}" stop-opacity="1"/><stop offset="100%" stop-color="{}" stop-opacity="1"/></linearGradient>"#,
            escape_xml(id),
            escape_xml(start),
            escape_xml(end)
        ));
    }

    /// Add a rectangle covering the whole canvas
    pub fn add_background(&mut self, color: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}background" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            self.width,
            self.height,
            escape_xml(color)
        ));
    }

    /// Add a group element with the given classes
    pub fn start_group(&mut self, classes: &[String]) {
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}>", self.indent_str(), class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Add a keycap with its label centred inside
    pub fn add_key(
        &mut self,
        label: char,
        x: f64,
        y: f64,
        size: (f64, f64),
        corner_radius: f64,
        state: KeyState,
    ) {
        let prefix = self.prefix();
        let paint = key_paint(state);
        let (w, h) = size;

        let mut rect_paint = format!(r#" fill="{}""#, paint.fill);
        if let Some(opacity) = paint.fill_opacity {
            rect_paint.push_str(&format!(r#" fill-opacity="{}""#, opacity));
        }
        rect_paint.push_str(&format!(r#" stroke="{}""#, paint.stroke));
        if let Some(opacity) = paint.stroke_opacity {
            rect_paint.push_str(&format!(r#" stroke-opacity="{}""#, opacity));
        }

        self.elements.push(format!(
            r#"{}<rect class="{}key {}key-{}" x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
            self.indent_str(),
            prefix,
            prefix,
            state_class(state),
            x,
            y,
            w,
            h,
            corner_radius,
            rect_paint
        ));
        self.elements.push(format!(
            r#"{}<text class="{}key-label" x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-family="monospace" font-size="14" fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            x + w / 2.0,
            y + h / 2.0,
            paint.text,
            escape_xml(&label.to_string())
        ));
    }

    /// Add the signature stroke
    pub fn add_signature_path(&mut self, d: &str, stroke: &str, width: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<path class="{}signature" d="{}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.indent_str(),
            prefix,
            d,
            escape_xml(stroke),
            width
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let pad = if self.config.pretty_print { "  " } else { "" };

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        ));
        svg.push_str(nl);

        if let Some(title) = &self.title {
            svg.push_str(pad);
            svg.push_str(&format!("<title>{}</title>", escape_xml(title)));
            svg.push_str(nl);
        }

        if !self.defs.is_empty() {
            svg.push_str(pad);
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(pad);
                svg.push_str(pad);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(pad);
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a signature to a standalone SVG document
pub fn render_svg(signature: &Signature, geometry: &LayoutConfig, config: &SvgConfig) -> String {
    let (width, height) = signature.canvas_size(geometry);
    let mut builder = SvgBuilder::new(config.clone(), width, height);

    if config.include_title && !signature.name().trim().is_empty() {
        builder.set_title(&format!("Signature for {}", signature.name()));
    }

    if let Some(background) = &config.background {
        builder.add_background(background);
    }

    let stroke = &signature.options().stroke;
    let paint = match stroke.style {
        StrokeStyle::Solid => stroke.color.clone(),
        StrokeStyle::Gradient => {
            builder.add_gradient(GRADIENT_ID, &stroke.gradient_start, &stroke.gradient_end);
            format!("url(#{})", GRADIENT_ID)
        }
    };

    if config.show_keyboard {
        render_keyboard(signature, geometry, &mut builder);
    }

    if !signature.is_empty() {
        builder.add_signature_path(&signature.path_data(), &paint, stroke.width);
    }

    builder.build()
}

/// Draw every key of the signature's layout, highlighting the ones it uses
fn render_keyboard(signature: &Signature, geometry: &LayoutConfig, builder: &mut SvgBuilder) {
    let keyboard = signature.keyboard();
    let include_numbers = signature.options().include_numbers;
    let active = active_keys(signature.name(), keyboard);
    let current = current_key(signature.name(), keyboard);

    let prefix = builder.prefix();
    builder.start_group(&[format!("{}keyboard", prefix)]);
    for (ch, pos) in keyboard.keys() {
        let state = if current == Some(ch) {
            KeyState::Current
        } else if active.contains(&ch) {
            KeyState::Active
        } else {
            KeyState::Idle
        };
        let origin = geometry.key_origin(pos, include_numbers);
        builder.add_key(
            ch,
            origin.x,
            origin.y,
            geometry.key_size,
            geometry.key_corner_radius,
            state,
        );
    }
    builder.end_group();
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::KeyboardLayout;
    use crate::signature::SignatureOptions;
    use crate::style::StrokeConfig;
    use pretty_assertions::assert_eq;

    fn render(name: &str, options: &SignatureOptions, config: &SvgConfig) -> String {
        let geometry = LayoutConfig::default();
        let sig = Signature::generate(name, options, &geometry);
        render_svg(&sig, &geometry, config)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("'"), "&apos;");
    }

    #[test]
    fn test_render_solid_signature() {
        let svg = render("AB", &SignatureOptions::new(), &SvgConfig::default());
        let expected = [
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="650" height="200" viewBox="0 0 650 200">"#,
            r#"  <title>Signature for AB</title>"#,
            r##"  <path class="ks-signature" d="M 73 100 L 343 160" stroke="#ffffff" stroke-width="3" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"##,
            r#"</svg>"#,
        ]
        .join("\n");
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_render_gradient_signature() {
        let options = SignatureOptions::new()
            .with_numbers(true)
            .with_stroke(StrokeConfig::gradient("#ff6b6b", "#4ecdc4").with_width(5.0));
        let svg = render("A1", &options, &SvgConfig::default());

        assert!(svg.contains(r#"height="260""#));
        assert!(svg.contains(r#"<linearGradient id="pathGradient""#));
        assert!(svg.contains(r##"stop-color="#ff6b6b""##));
        assert!(svg.contains(r##"stop-color="#4ecdc4""##));
        assert!(svg.contains(r#"stroke="url(#pathGradient)""#));
        assert!(svg.contains(r#"stroke-width="5""#));
        assert!(svg.contains(r#"d="M 73 160 L 58 40""#));
    }

    #[test]
    fn test_render_empty_signature_has_no_path() {
        let svg = render("", &SignatureOptions::new(), &SvgConfig::default());
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn test_render_background() {
        let config = SvgConfig::new().with_background("#000000");
        let svg = render("AB", &SignatureOptions::new(), &config);
        assert!(svg.contains(r##"<rect class="ks-background" width="650" height="200" fill="#000000"/>"##));
        let background = svg.find("ks-background").unwrap();
        let path = svg.find("ks-signature").unwrap();
        assert!(background < path, "background must be drawn first");
    }

    #[test]
    fn test_render_keyboard_overlay() {
        let config = SvgConfig::new().with_keyboard(true);
        let svg = render("ab", &SignatureOptions::new(), &config);

        assert!(svg.contains(r#"<g class="ks-keyboard">"#));
        assert_eq!(svg.matches(r#"class="ks-key "#).count(), 26);
        // A is active, B was typed last
        assert!(svg.contains(r#"class="ks-key ks-key-active" x="45" y="75""#));
        assert!(svg.contains(r#"class="ks-key ks-key-current" x="315" y="135""#));
        assert_eq!(svg.matches("ks-key-idle").count(), 24);
        assert!(svg.contains(r#"x="73" y="99""#), "label centred on the key");
    }

    #[test]
    fn test_keyboard_overlay_draws_number_row_first() {
        let options = SignatureOptions::new().with_numbers(true);
        let config = SvgConfig::new().with_keyboard(true);
        let svg = render("q", &options, &config);

        assert_eq!(svg.matches(r#"class="ks-key "#).count(), 36);
        let zero = svg.find(r#"x="570" y="15""#).expect("0 key drawn");
        let one = svg.find(r#"x="30" y="15""#).expect("1 key drawn");
        let q = svg.find(r#"x="30" y="75""#).expect("Q key drawn");
        assert!(zero < one);
        assert!(one < q);
    }

    #[test]
    fn test_keyboard_overlay_escapes_punctuation_labels() {
        let options = SignatureOptions::new().with_layout(KeyboardLayout::Dvorak);
        let config = SvgConfig::new().with_keyboard(true);
        let svg = render("x", &options, &config);
        assert!(svg.contains(">&apos;</text>"));
        assert!(svg.contains(">,</text>"));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::new().with_pretty_print(false).with_standalone(false);
        let svg = render("AB", &SignatureOptions::new(), &config);
        assert!(!svg.contains('\n'));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_without_class_prefix() {
        let config = SvgConfig::new().without_class_prefix();
        let svg = render("AB", &SignatureOptions::new(), &config);
        assert!(svg.contains(r#"<path class="signature""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let svg = render("A&B", &SignatureOptions::new(), &SvgConfig::default());
        assert!(svg.contains("<title>Signature for A&amp;B</title>"));
    }
}
