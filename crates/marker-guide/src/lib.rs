#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Configuration for the guidance computation and its overlay.
///
/// See [`config::GuideConfig`] for the defaults and the JSON loader.
pub mod config;

/// Camera move directions and the per-frame direction set.
pub mod direction;

/// Error types for the marker guide crate.
pub mod error;

/// Centroid and frame center computations.
pub mod geometry;

/// The per-frame guidance computer.
pub mod guidance;

/// Detected marker type and eligibility filtering.
pub mod marker;

/// Drawing instructions produced for the display collaborator.
pub mod overlay;

/// Human readable status derived from a guidance decision.
pub mod status;

pub use config::GuideConfig;
pub use direction::{compute_directions, Direction, DirectionSet, Horizontal, Vertical};
pub use error::GuideError;
pub use geometry::{frame_center, marker_centroid};
pub use guidance::{Guidance, GuidanceComputer, MarkerGuidance};
pub use marker::{eligible_markers, select_marker, Marker};
pub use overlay::{DrawCommand, Overlay, OverlayStyle};
pub use status::{describe_state, Status};
