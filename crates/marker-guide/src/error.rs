/// An error type for the marker guide crate.
#[derive(thiserror::Error, Debug)]
pub enum GuideError {
    /// The direction threshold must be a finite positive number of pixels.
    #[error("Invalid direction threshold: {0}. Expected a finite value > 0")]
    InvalidThreshold(f32),

    /// The perimeter rate bounds are negative, not finite or inverted.
    #[error("Invalid perimeter rate range [{min}, {max}]")]
    InvalidPerimeterRange {
        /// The lower bound.
        min: f32,
        /// The upper bound.
        max: f32,
    },

    /// Error to read the configuration file.
    #[error("Failed to read the configuration file. {0}")]
    ConfigReadError(#[from] std::io::Error),

    /// Error to parse the configuration.
    #[error("Failed to parse the configuration. {0}")]
    ConfigParseError(#[from] serde_json::Error),
}
