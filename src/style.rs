//! Stroke styling and style files
//!
//! A signature is stroked either with a solid colour or with a horizontal
//! two-colour gradient. Style files are TOML and may also carry default
//! signature options, so a look can be saved and reused.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ParseError;
use crate::layout::KeyboardLayout;
use crate::renderer::CurveStrategy;

/// Errors that can occur when loading or validating a style
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid color for {field}: '{value}'")]
    InvalidColor { field: &'static str, value: String },
    #[error("Invalid stroke width {0}: must be a positive number")]
    InvalidWidth(f64),
}

/// How the stroke is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeStyle {
    #[default]
    Solid,
    Gradient,
}

impl StrokeStyle {
    pub fn name(&self) -> &'static str {
        match self {
            StrokeStyle::Solid => "solid",
            StrokeStyle::Gradient => "gradient",
        }
    }
}

impl fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrokeStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(StrokeStyle::Solid),
            "gradient" => Ok(StrokeStyle::Gradient),
            _ => Err(ParseError::unknown_stroke_style(s, &["solid", "gradient"])),
        }
    }
}

/// Stroke appearance, passed through unchanged to the SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeConfig {
    pub style: StrokeStyle,
    /// Colour used by the solid style
    pub color: String,
    /// Left end of the gradient
    pub gradient_start: String,
    /// Right end of the gradient
    pub gradient_end: String,
    /// Stroke width in pixels
    pub width: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            style: StrokeStyle::Solid,
            color: "#ffffff".to_string(),
            gradient_start: "#ff6b6b".to_string(),
            gradient_end: "#4ecdc4".to_string(),
            width: 3.0,
        }
    }
}

impl StrokeConfig {
    /// A solid stroke in the given colour
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            style: StrokeStyle::Solid,
            color: color.into(),
            ..Self::default()
        }
    }

    /// A gradient stroke between two colours
    pub fn gradient(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            style: StrokeStyle::Gradient,
            gradient_start: start.into(),
            gradient_end: end.into(),
            ..Self::default()
        }
    }

    /// Set the stroke width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Check the colours are usable inside SVG attributes and the width is positive
    pub fn validate(&self) -> Result<(), StyleError> {
        validate_color("color", &self.color)?;
        validate_color("gradient-start", &self.gradient_start)?;
        validate_color("gradient-end", &self.gradient_end)?;
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(StyleError::InvalidWidth(self.width));
        }
        Ok(())
    }
}

fn validate_color(field: &'static str, value: &str) -> Result<(), StyleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(['"', '\'', '<', '>', '&']) {
        return Err(StyleError::InvalidColor {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Signature defaults a style file may set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureDefaults {
    pub layout: Option<KeyboardLayout>,
    pub curve: Option<CurveStrategy>,
    pub include_numbers: Option<bool>,
}

/// A loaded style file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Optional name for the style
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub stroke: StrokeConfig,
    pub signature: SignatureDefaults,
}

/// TOML structure for deserializing style files
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStyle {
    metadata: Option<TomlMetadata>,
    signature: Option<TomlSignature>,
    stroke: Option<TomlStroke>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TomlSignature {
    layout: Option<KeyboardLayout>,
    curve: Option<CurveStrategy>,
    include_numbers: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct TomlStroke {
    style: Option<StrokeStyle>,
    color: Option<String>,
    gradient_start: Option<String>,
    gradient_end: Option<String>,
    width: Option<f64>,
}

impl Style {
    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        let style = Self::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = ?style.name, "loaded style file");
        Ok(style)
    }

    /// Load a style from a TOML string
    ///
    /// Missing tables and keys fall back to the defaults.
    pub fn from_str(content: &str) -> Result<Self, StyleError> {
        let parsed: TomlStyle = toml::from_str(content)?;

        let defaults = StrokeConfig::default();
        let stroke = match parsed.stroke {
            Some(s) => StrokeConfig {
                style: s.style.unwrap_or(defaults.style),
                color: s.color.unwrap_or(defaults.color),
                gradient_start: s.gradient_start.unwrap_or(defaults.gradient_start),
                gradient_end: s.gradient_end.unwrap_or(defaults.gradient_end),
                width: s.width.unwrap_or(defaults.width),
            },
            None => defaults,
        };
        stroke.validate()?;

        let signature = parsed
            .signature
            .map(|s| SignatureDefaults {
                layout: s.layout,
                curve: s.curve,
                include_numbers: s.include_numbers,
            })
            .unwrap_or_default();

        Ok(Style {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            stroke,
            signature,
        })
    }
}
