/// Error raised when a captured buffer cannot fill the target image.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The camera delivered no bytes.
    #[error("Empty frame buffer")]
    EmptyFrame,

    /// The buffer length does not match the image size.
    #[error("YUYV buffer has {0} bytes, expected {1} for the RGB target")]
    SizeMismatch(usize, usize),
}

/// Convert a packed YUYV 4:2:2 buffer into interleaved RGB8.
///
/// Uses fixed point BT.601 full range coefficients scaled by 32. Every 4 input bytes
/// hold two pixels sharing the same chroma pair.
///
/// # Arguments
///
/// * `yuyv` - The packed source buffer, 2 bytes per pixel.
/// * `rgb` - The destination buffer, 3 bytes per pixel.
pub fn yuyv_to_rgb(yuyv: &[u8], rgb: &mut [u8]) -> Result<(), FrameError> {
    if yuyv.is_empty() {
        return Err(FrameError::EmptyFrame);
    }

    let expected = rgb.len() / 3 * 2;
    if yuyv.len() < expected {
        return Err(FrameError::SizeMismatch(yuyv.len(), expected));
    }

    yuyv.chunks_exact(4)
        .zip(rgb.chunks_exact_mut(6))
        .for_each(|(src, dst)| {
            let y0 = (src[0] as i32) << 5;
            let u = src[1] as i32 - 128;
            let y1 = (src[2] as i32) << 5;
            let v = src[3] as i32 - 128;

            // 1.402 * 32, -0.344 * 32, -0.714 * 32, 1.772 * 32
            let r = 45 * v;
            let g = -11 * u - 23 * v;
            let b = 57 * u;

            dst[0] = ((y0 + r) >> 5).clamp(0, 255) as u8;
            dst[1] = ((y0 + g) >> 5).clamp(0, 255) as u8;
            dst[2] = ((y0 + b) >> 5).clamp(0, 255) as u8;
            dst[3] = ((y1 + r) >> 5).clamp(0, 255) as u8;
            dst[4] = ((y1 + g) >> 5).clamp(0, 255) as u8;
            dst[5] = ((y1 + b) >> 5).clamp(0, 255) as u8;
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yuyv_neutral_chroma_is_gray() -> Result<(), FrameError> {
        let yuyv = [16, 128, 235, 128, 0, 128, 255, 128];
        let mut rgb = [0u8; 12];
        yuyv_to_rgb(&yuyv, &mut rgb)?;
        assert_eq!(rgb, [16, 16, 16, 235, 235, 235, 0, 0, 0, 255, 255, 255]);
        Ok(())
    }

    #[test]
    fn test_yuyv_chroma() -> Result<(), FrameError> {
        // strong red chroma saturates the red channel and zeroes green
        let yuyv = [128, 128, 128, 255];
        let mut rgb = [0u8; 6];
        yuyv_to_rgb(&yuyv, &mut rgb)?;
        assert_eq!(rgb[0], 255);
        assert_eq!(rgb[1], 36);
        assert_eq!(rgb[2], 128);
        assert_eq!(&rgb[..3], &rgb[3..]);
        Ok(())
    }

    #[test]
    fn test_yuyv_empty_frame() {
        let mut rgb = [0u8; 6];
        assert!(matches!(
            yuyv_to_rgb(&[], &mut rgb),
            Err(FrameError::EmptyFrame)
        ));
    }

    #[test]
    fn test_yuyv_short_frame() {
        let mut rgb = [0u8; 12];
        assert!(matches!(
            yuyv_to_rgb(&[0, 128, 0, 128], &mut rgb),
            Err(FrameError::SizeMismatch(4, 8))
        ));
    }
}
