//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "ks-" for "ks-signature")
    pub class_prefix: Option<String>,

    /// Fill colour for a full-canvas background rectangle
    pub background: Option<String>,

    /// Whether to draw the keyboard behind the stroke
    pub show_keyboard: bool,

    /// Whether to add a `<title>` naming the signature
    pub include_title: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("ks-".to_string()),
            background: None,
            show_keyboard: false,
            include_title: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Paint a background behind everything
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Draw the keyboard overlay
    pub fn with_keyboard(mut self, show: bool) -> Self {
        self.show_keyboard = show;
        self
    }

    /// Set whether to include a title element
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("ks-".to_string()));
        assert_eq!(config.background, None);
        assert!(!config.show_keyboard);
        assert!(config.include_title);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("my-")
            .with_background("#000000")
            .with_keyboard(true)
            .with_title(false);

        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("my-".to_string()));
        assert_eq!(config.background.as_deref(), Some("#000000"));
        assert!(config.show_keyboard);
        assert!(!config.include_title);
    }
}
