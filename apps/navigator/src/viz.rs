use kornia_image::{allocator::CpuAllocator, Image};
use marker_guide::{Overlay, Status};

/// Log a frame and its guidance overlay to the rerun viewer.
///
/// Every overlay layer is logged on each frame, empty when absent, so stale annotations
/// from a previous frame never linger.
pub fn log_frame(
    rec: &rerun::RecordingStream,
    img: &Image<u8, 3, CpuAllocator>,
    overlay: &Overlay,
    status: &Status,
) -> Result<(), rerun::RecordingStreamError> {
    rec.log(
        "image",
        &rerun::Image::from_elements(img.as_slice(), img.size().into(), rerun::ColorModel::RGB),
    )?;

    let (positions, (radii, colors)): (Vec<[f32; 2]>, (Vec<f32>, Vec<[u8; 3]>)) = overlay
        .points()
        .map(|(p, r, c)| (p.to_array(), (r, c)))
        .unzip();
    rec.log(
        "image/centers",
        &rerun::Points2D::new(positions)
            .with_radii(radii)
            .with_colors(colors),
    )?;

    let (strips, (radii, colors)): (Vec<Vec<[f32; 2]>>, (Vec<f32>, Vec<[u8; 3]>)) = overlay
        .lines()
        .map(|(from, to, t, c)| (vec![from.to_array(), to.to_array()], (t / 2.0, c)))
        .unzip();
    rec.log(
        "image/offset",
        &rerun::LineStrips2D::new(strips)
            .with_radii(radii)
            .with_colors(colors),
    )?;

    let mut strips = Vec::new();
    let mut labels = Vec::new();
    let mut radii = Vec::new();
    let mut colors = Vec::new();
    for (corners, label, t, c) in overlay.polygons() {
        let mut strip = corners.map(|p| p.to_array()).to_vec();
        strip.push(corners[0].to_array());
        strips.push(strip);
        labels.push(label.to_string());
        radii.push(t / 2.0);
        colors.push(c);
    }
    rec.log(
        "image/markers",
        &rerun::LineStrips2D::new(strips)
            .with_labels(labels)
            .with_radii(radii)
            .with_colors(colors),
    )?;

    if let Some((origin, text, _, color)) = overlay.text() {
        rec.log(
            "image/status",
            &rerun::Points2D::new([origin.to_array()])
                .with_radii([1.0])
                .with_colors([color])
                .with_labels([text]),
        )?;
    }

    let level = if status.alert {
        rerun::TextLogLevel::WARN
    } else {
        rerun::TextLogLevel::INFO
    };
    rec.log(
        "status",
        &rerun::TextLog::new(status.text.as_str()).with_level(level),
    )?;

    Ok(())
}
