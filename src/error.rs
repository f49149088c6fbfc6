//! Error types for parsing user-facing option names

use thiserror::Error;

/// Errors raised when a layout, curve or stroke style name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown keyboard layout '{input}' (expected one of: {})", .expected.join(", "))]
    UnknownLayout { input: String, expected: Vec<String> },

    #[error("unknown curve type '{input}' (expected one of: {})", .expected.join(", "))]
    UnknownCurve { input: String, expected: Vec<String> },

    #[error("unknown stroke style '{input}' (expected one of: {})", .expected.join(", "))]
    UnknownStrokeStyle { input: String, expected: Vec<String> },
}

impl ParseError {
    /// Create an unknown layout error listing the accepted names
    pub fn unknown_layout(input: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownLayout {
            input: input.into(),
            expected: to_owned_names(expected),
        }
    }

    /// Create an unknown curve error listing the accepted names
    pub fn unknown_curve(input: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownCurve {
            input: input.into(),
            expected: to_owned_names(expected),
        }
    }

    /// Create an unknown stroke style error listing the accepted names
    pub fn unknown_stroke_style(input: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownStrokeStyle {
            input: input.into(),
            expected: to_owned_names(expected),
        }
    }

    /// The rejected input
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownLayout { input, .. }
            | Self::UnknownCurve { input, .. }
            | Self::UnknownStrokeStyle { input, .. } => input,
        }
    }
}

fn to_owned_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
