use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::GuideError, overlay::OverlayStyle};

/// Default dead-zone half width in pixels.
pub const DEFAULT_THRESHOLD: f32 = 10.0;

/// Default minimum marker perimeter relative to the largest frame dimension.
pub const DEFAULT_MIN_PERIMETER_RATE: f32 = 0.03;

/// Default maximum marker perimeter relative to the largest frame dimension.
pub const DEFAULT_MAX_PERIMETER_RATE: f32 = 1.0;

/// Configuration for the guidance computer.
///
/// Every field is optional when deserializing and falls back to its default.
///
/// # Examples
///
/// ```
/// use marker_guide::GuideConfig;
///
/// let config = GuideConfig::from_json_str(r#"{ "threshold": 25.0 }"#).unwrap();
/// assert_eq!(config.threshold, 25.0);
/// assert_eq!(config.min_perimeter_rate, 0.03);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Offsets up to this many pixels on an axis count as centered.
    pub threshold: f32,
    /// Markers with a smaller perimeter rate are ignored.
    pub min_perimeter_rate: f32,
    /// Markers with a larger perimeter rate are ignored.
    pub max_perimeter_rate: f32,
    /// Colours and sizes of the overlay.
    pub overlay: OverlayStyle,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_perimeter_rate: DEFAULT_MIN_PERIMETER_RATE,
            max_perimeter_rate: DEFAULT_MAX_PERIMETER_RATE,
            overlay: OverlayStyle::default(),
        }
    }
}

impl GuideConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, GuideError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GuideError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Set the direction threshold in pixels.
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self, GuideError> {
        self.threshold = threshold;
        self.validate()?;
        Ok(self)
    }

    /// Set the accepted marker perimeter rate range.
    pub fn with_perimeter_rate(mut self, min: f32, max: f32) -> Result<Self, GuideError> {
        self.min_perimeter_rate = min;
        self.max_perimeter_rate = max;
        self.validate()?;
        Ok(self)
    }

    /// Check the configuration values.
    pub fn validate(&self) -> Result<(), GuideError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(GuideError::InvalidThreshold(self.threshold));
        }

        let (min, max) = (self.min_perimeter_rate, self.max_perimeter_rate);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(GuideError::InvalidPerimeterRange { min, max });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() -> Result<(), GuideError> {
        let config = GuideConfig::default();
        config.validate()?;
        assert_eq!(config.threshold, 10.0);
        assert_eq!(config.min_perimeter_rate, 0.03);
        assert_eq!(config.max_perimeter_rate, 1.0);
        Ok(())
    }

    #[test]
    fn test_partial_json() -> Result<(), GuideError> {
        let config = GuideConfig::from_json_str(
            r#"{ "max_perimeter_rate": 0.8, "overlay": { "point_radius": 4 } }"#,
        )?;
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.max_perimeter_rate, 0.8);
        assert_eq!(config.overlay.point_radius, 4.0);
        assert_eq!(config.overlay.line_thickness, OverlayStyle::default().line_thickness);
        Ok(())
    }

    #[test]
    fn test_empty_json_is_default() -> Result<(), GuideError> {
        assert_eq!(GuideConfig::from_json_str("{}")?, GuideConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(matches!(
            GuideConfig::default().with_threshold(0.0),
            Err(GuideError::InvalidThreshold(_))
        ));
        assert!(matches!(
            GuideConfig::default().with_threshold(f32::NAN),
            Err(GuideError::InvalidThreshold(_))
        ));
        assert!(matches!(
            GuideConfig::from_json_str(r#"{ "threshold": -1.0 }"#),
            Err(GuideError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_invalid_perimeter_range() {
        assert!(matches!(
            GuideConfig::default().with_perimeter_rate(0.5, 0.1),
            Err(GuideError::InvalidPerimeterRange { .. })
        ));
        assert!(matches!(
            GuideConfig::default().with_perimeter_rate(-0.1, 1.0),
            Err(GuideError::InvalidPerimeterRange { .. })
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            GuideConfig::from_json_str("{ threshold: }"),
            Err(GuideError::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "threshold": 15.5 }}"#)?;

        let config = GuideConfig::from_file(file.path())?;
        assert_eq!(config.threshold, 15.5);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            GuideConfig::from_file(missing),
            Err(GuideError::ConfigReadError(_))
        ));
        Ok(())
    }
}
