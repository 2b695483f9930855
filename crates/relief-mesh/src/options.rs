use serde::{Deserialize, Serialize};

use crate::errors::EncodeError;

/// Default header text written when the caller supplies none.
pub const DEFAULT_HEADER: &str = "relief-mesh binary STL";

/// Scale factors and header comment for one encoding call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Model units of Z for a sample of 1.0 (the maximum carve depth).
    pub depth_scale: f32,
    /// Model units between neighbouring grid samples in X and Y.
    pub grid_scale: f32,
    /// Free-text header comment; truncated to 80 bytes.
    pub header: Option<String>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            depth_scale: 20.0,
            grid_scale: 1.0,
            header: None,
        }
    }
}

impl EncodeOptions {
    pub fn new(depth_scale: f32, grid_scale: f32) -> Self {
        Self {
            depth_scale,
            grid_scale,
            header: None,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Reject non-positive or non-finite scale factors.
    pub fn validate(&self) -> Result<(), EncodeError> {
        check_scale("depth_scale", self.depth_scale)?;
        check_scale("grid_scale", self.grid_scale)
    }

    /// Header text with non-ASCII characters replaced by `?`.
    pub(crate) fn header_text(&self) -> String {
        self.header
            .as_deref()
            .unwrap_or(DEFAULT_HEADER)
            .chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect()
    }
}

fn check_scale(name: &'static str, value: f32) -> Result<(), EncodeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EncodeError::InvalidScale { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.depth_scale, 20.0);
        assert_eq!(opts.grid_scale, 1.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn rejects_bad_scales() {
        for (depth, grid) in [(0.0, 1.0), (1.0, -2.0), (f32::NAN, 1.0), (1.0, f32::INFINITY)] {
            assert!(matches!(
                EncodeOptions::new(depth, grid).validate(),
                Err(EncodeError::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn header_text_replaces_non_ascii() {
        let opts = EncodeOptions::default().with_header("relief – café");
        assert_eq!(opts.header_text(), "relief ? caf?");
        assert_eq!(EncodeOptions::default().header_text(), DEFAULT_HEADER);
    }
}
