use glam::Vec2;
use kornia_image::ImageSize;

use crate::{config::GuideConfig, geometry::marker_centroid};

/// A fiducial marker as reported by the detector.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// The decoded marker identifier.
    pub id: u32,
    /// The four quad corners in pixel coordinates, in detector order.
    pub corners: [Vec2; 4],
}

impl Marker {
    /// Creates a new marker from its id and corners.
    pub fn new(id: u32, corners: [Vec2; 4]) -> Self {
        Self { id, corners }
    }

    /// The centroid of the marker corners.
    #[inline]
    pub fn centroid(&self) -> Vec2 {
        marker_centroid(&self.corners)
    }

    /// The perimeter of the closed quad in pixels.
    pub fn perimeter(&self) -> f32 {
        (0..4)
            .map(|i| self.corners[i].distance(self.corners[(i + 1) % 4]))
            .sum()
    }

    /// The perimeter relative to the largest frame dimension.
    ///
    /// Returns `0.0` for a frame without pixels.
    pub fn perimeter_rate(&self, frame_size: ImageSize) -> f32 {
        let max_dim = frame_size.width.max(frame_size.height);
        if max_dim == 0 {
            return 0.0;
        }
        self.perimeter() / max_dim as f32
    }
}

/// Returns true if the marker perimeter rate lies within
/// `[config.min_perimeter_rate, config.max_perimeter_rate]`.
pub fn is_eligible(marker: &Marker, frame_size: ImageSize, config: &GuideConfig) -> bool {
    let rate = marker.perimeter_rate(frame_size);
    rate >= config.min_perimeter_rate && rate <= config.max_perimeter_rate
}

/// Keep the markers with an accepted perimeter rate, in detector order.
pub fn eligible_markers(
    markers: &[Marker],
    frame_size: ImageSize,
    config: &GuideConfig,
) -> Vec<Marker> {
    markers
        .iter()
        .filter(|m| is_eligible(m, frame_size, config))
        .cloned()
        .collect()
}

/// Pick the marker that drives the guidance.
///
/// Markers rejected by [`is_eligible`] are skipped. Of the remaining ones only the first in
/// detector order is used; the rest are ignored.
pub fn select_marker<'a>(
    markers: &'a [Marker],
    frame_size: ImageSize,
    config: &GuideConfig,
) -> Option<&'a Marker> {
    markers.iter().find(|m| is_eligible(m, frame_size, config))
}
