use glam::Vec2;
use kornia_apriltag::{family::TagFamilyKind, AprilTagDecoder, DecodeTagsConfig};
use kornia_image::{allocator::CpuAllocator, Image, ImageSize};
use kornia_imgproc::color::gray_from_rgb_u8;
use marker_guide::Marker;

/// Parse an AprilTag family name as accepted on the command line.
pub fn parse_tag_family(value: &str) -> Result<TagFamilyKind, String> {
    match value {
        "tag16_h5" => Ok(TagFamilyKind::Tag16H5),
        "tag36_h11" => Ok(TagFamilyKind::Tag36H11),
        "tag36_h10" => Ok(TagFamilyKind::Tag36H10),
        "tag25_h9" => Ok(TagFamilyKind::Tag25H9),
        "tagcircle21_h7" => Ok(TagFamilyKind::TagCircle21H7),
        "tagcircle49_h12" => Ok(TagFamilyKind::TagCircle49H12),
        "tagcustom48_h12" => Ok(TagFamilyKind::TagCustom48H12),
        "tagstandard41_h12" => Ok(TagFamilyKind::TagStandard41H12),
        "tagstandard52_h13" => Ok(TagFamilyKind::TagStandard52H13),
        _ => Err(format!("Unsupported tag family: {value}")),
    }
}

/// Build a [`Marker`] from a decoded tag id and its quad corners.
pub fn marker_from_corners(id: u16, corners: [(f32, f32); 4]) -> Marker {
    Marker::new(id as u32, corners.map(|(x, y)| Vec2::new(x, y)))
}

/// Finds fiducial markers in RGB frames.
pub struct MarkerDetector {
    decoder: AprilTagDecoder,
    gray: Image<u8, 1, CpuAllocator>,
}

impl MarkerDetector {
    /// Create a detector for frames of the given size.
    pub fn new(
        families: Vec<TagFamilyKind>,
        size: ImageSize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = DecodeTagsConfig::new(families)?;
        let decoder = AprilTagDecoder::new(config, size)?;
        let gray = Image::from_size_val(size, 0, CpuAllocator)?;

        Ok(Self { decoder, gray })
    }

    /// Detect the markers of a frame, in detector order.
    pub fn detect(
        &mut self,
        rgb: &Image<u8, 3, CpuAllocator>,
    ) -> Result<Vec<Marker>, Box<dyn std::error::Error>> {
        gray_from_rgb_u8(rgb, &mut self.gray)?;

        let detections = self.decoder.decode(&self.gray)?;
        self.decoder.clear();

        Ok(detections
            .iter()
            .map(|d| {
                let c = &d.quad.corners;
                marker_from_corners(
                    d.id,
                    [
                        (c[0].x, c[0].y),
                        (c[1].x, c[1].y),
                        (c[2].x, c[2].y),
                        (c[3].x, c[3].y),
                    ],
                )
            })
            .collect())
    }
}
