use glam::Vec2;
use kornia_image::ImageSize;

/// Compute the centroid of a marker quad.
///
/// The centroid is the arithmetic mean of the four corners, computed on the x and y
/// coordinates independently.
///
/// # Arguments
///
/// * `corners` - The four detected corners of the marker in pixel coordinates.
///
/// # Returns
///
/// The centroid of the quad in pixel coordinates.
pub fn marker_centroid(corners: &[Vec2; 4]) -> Vec2 {
    corners.iter().fold(Vec2::ZERO, |acc, &p| acc + p) / corners.len() as f32
}

/// Compute the geometric center of a frame.
///
/// # Arguments
///
/// * `size` - The size of the frame in pixels.
///
/// # Returns
///
/// The point `(width / 2, height / 2)` using floating point division.
pub fn frame_center(size: ImageSize) -> Vec2 {
    Vec2::new(size.width as f32 / 2.0, size.height as f32 / 2.0)
}

/// Signed offset of the marker centroid with respect to the frame center.
#[inline]
pub fn center_offset(marker_center: Vec2, frame_center: Vec2) -> Vec2 {
    marker_center - frame_center
}
