use glam::Vec2;
use kornia_image::ImageSize;

use crate::{
    config::GuideConfig,
    direction::{compute_directions, DirectionSet},
    geometry::{center_offset, frame_center},
    marker::{eligible_markers, Marker},
    status::{describe_state, Status},
};

/// Guidance for the marker selected in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGuidance {
    /// The id of the guiding marker.
    pub id: u32,
    /// The marker centroid in pixels.
    pub centroid: Vec2,
    /// The marker centroid minus the frame center.
    pub offset: Vec2,
    /// The camera moves needed to center the marker.
    pub directions: DirectionSet,
}

/// The guidance decision for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Guidance {
    /// The frame center in pixels.
    pub frame_center: Vec2,
    /// The detected markers with an accepted perimeter rate, in detector order.
    pub markers: Vec<Marker>,
    /// The guidance for the selected marker, `None` if no marker was usable.
    pub marker: Option<MarkerGuidance>,
    /// The status to show to the operator.
    pub status: Status,
}

impl Guidance {
    /// Returns true when a marker was found and is centered.
    pub fn is_centered(&self) -> bool {
        self.marker
            .as_ref()
            .is_some_and(|m| m.directions.is_empty())
    }
}

/// Turns one frame's detections into a guidance decision.
///
/// The computer carries no state between frames: the same inputs always produce the same
/// [`Guidance`].
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use kornia_image::ImageSize;
/// use marker_guide::{GuideConfig, GuidanceComputer, Marker};
///
/// let computer = GuidanceComputer::new(GuideConfig::default());
/// let marker = Marker::new(
///     5,
///     [
///         Vec2::new(560.0, 320.0),
///         Vec2::new(640.0, 320.0),
///         Vec2::new(640.0, 400.0),
///         Vec2::new(560.0, 400.0),
///     ],
/// );
/// let size = ImageSize { width: 1280, height: 720 };
/// let guidance = computer.compute(size, &[marker]);
/// assert_eq!(guidance.status.text, "Marker ID: 5. Move camera: right");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuidanceComputer {
    config: GuideConfig,
}

impl GuidanceComputer {
    /// Creates a new guidance computer.
    pub fn new(config: GuideConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Compute the guidance for one frame.
    ///
    /// # Arguments
    ///
    /// * `frame_size` - The size of the frame the markers were detected in.
    /// * `markers` - The detected markers in detector order, possibly empty. Markers outside
    ///   the configured perimeter rate range are dropped before anything else.
    pub fn compute(&self, frame_size: ImageSize, markers: &[Marker]) -> Guidance {
        let frame_center = frame_center(frame_size);

        let markers = eligible_markers(markers, frame_size, &self.config);

        let marker = markers.first().map(|m| {
            let centroid = m.centroid();
            MarkerGuidance {
                id: m.id,
                centroid,
                offset: center_offset(centroid, frame_center),
                directions: compute_directions(centroid, frame_center, self.config.threshold),
            }
        });

        let status = match &marker {
            Some(m) => describe_state(Some(m.id), &m.directions),
            None => describe_state(None, &DirectionSet::default()),
        };

        log::debug!("detected markers: {}, status: {}", markers.len(), status.text);

        Guidance {
            frame_center,
            markers,
            marker,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{Direction, Horizontal};

    const FRAME: ImageSize = ImageSize {
        width: 1280,
        height: 720,
    };

    fn centered_at(id: u32, cx: f32, cy: f32) -> Marker {
        let h = 40.0;
        Marker::new(
            id,
            [
                Vec2::new(cx - h, cy - h),
                Vec2::new(cx + h, cy - h),
                Vec2::new(cx + h, cy + h),
                Vec2::new(cx - h, cy + h),
            ],
        )
    }

    #[test]
    fn test_no_markers() {
        let guidance = GuidanceComputer::default().compute(FRAME, &[]);
        assert_eq!(guidance.frame_center, Vec2::new(640.0, 360.0));
        assert!(guidance.marker.is_none());
        assert!(!guidance.is_centered());
        assert_eq!(guidance.status.text, "No markers detected");
        assert!(guidance.status.alert);
    }

    #[test]
    fn test_centered_marker() {
        let guidance = GuidanceComputer::default().compute(FRAME, &[centered_at(9, 650.0, 360.0)]);
        let m = guidance.marker.as_ref().expect("marker selected");
        assert_eq!(m.id, 9);
        assert_eq!(m.offset, Vec2::new(10.0, 0.0));
        assert!(guidance.is_centered());
        assert_eq!(guidance.status.text, "Centered. Marker ID: 9");
        assert!(!guidance.status.alert);
    }

    #[test]
    fn test_off_center_marker() {
        let guidance = GuidanceComputer::default().compute(FRAME, &[centered_at(1, 600.0, 360.0)]);
        let m = guidance.marker.as_ref().expect("marker selected");
        assert_eq!(m.centroid, Vec2::new(600.0, 360.0));
        assert_eq!(m.directions.horizontal, Some(Horizontal::Right));
        assert!(m.directions.iter().eq([Direction::Right]));
        assert_eq!(guidance.status.text, "Marker ID: 1. Move camera: right");
        assert!(guidance.status.alert);
    }

    #[test]
    fn test_only_first_marker_guides() {
        let markers = [centered_at(4, 200.0, 200.0), centered_at(5, 640.0, 360.0)];
        let guidance = GuidanceComputer::default().compute(FRAME, &markers);
        assert_eq!(guidance.marker.map(|m| m.id), Some(4));
        assert_eq!(guidance.markers.len(), 2);
    }

    #[test]
    fn test_rejected_marker_is_not_detected() {
        // 10 px side -> perimeter rate 40 / 1280 < 0.03
        let tiny = Marker::new(
            1,
            [
                Vec2::new(600.0, 300.0),
                Vec2::new(610.0, 300.0),
                Vec2::new(610.0, 310.0),
                Vec2::new(600.0, 310.0),
            ],
        );
        let markers = [tiny.clone(), centered_at(2, 900.0, 360.0)];
        let guidance = GuidanceComputer::default().compute(FRAME, &markers);
        assert_eq!(guidance.markers.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(guidance.marker.map(|m| m.id), Some(2));

        let guidance = GuidanceComputer::default().compute(FRAME, &[tiny]);
        assert!(guidance.markers.is_empty());
        assert!(guidance.marker.is_none());
        assert_eq!(guidance.status.text, "No markers detected");
    }

    #[test]
    fn test_custom_threshold() -> Result<(), crate::GuideError> {
        let config = GuideConfig::default().with_threshold(50.0)?;
        let computer = GuidanceComputer::new(config);
        let guidance = computer.compute(FRAME, &[centered_at(2, 600.0, 400.0)]);
        assert!(guidance.is_centered());
        Ok(())
    }
}
