use kornia_image::{allocator::CpuAllocator, Image, ImageSize};
use kornia_io::{
    jpeg,
    v4l::{camera_control, PixelFormat, V4LCameraConfig, V4lVideoCapture},
};

use crate::convert::yuyv_to_rgb;

/// Webcam settings applied at startup.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// The V4L2 device index, as in `/dev/video{index}`.
    pub camera_id: u32,
    /// The requested frame size.
    pub size: ImageSize,
    /// The requested frames per second.
    pub fps: u32,
    /// The requested pixel format.
    pub format: PixelFormat,
    /// Raw V4L2 brightness control value, left untouched when `None`.
    pub brightness: Option<i32>,
}

/// A V4L2 webcam delivering RGB frames.
pub struct Camera {
    capture: V4lVideoCapture,
    size: ImageSize,
}

impl Camera {
    /// Open and configure the webcam.
    pub fn open(config: &CameraConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut capture = V4lVideoCapture::new(V4LCameraConfig {
            device_path: format!("/dev/video{}", config.camera_id),
            size: config.size,
            fps: config.fps,
            format: config.format,
            buffer_size: 4,
        })?;

        if let Some(value) = config.brightness {
            if let Err(e) = capture.set_control(camera_control::Brightness(value)) {
                log::warn!("Could not set brightness to {value}: {e}");
            }
        }

        Ok(Self {
            capture,
            size: config.size,
        })
    }

    /// The size of the delivered frames.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Grab the next frame into `rgb`.
    ///
    /// Returns `Ok(false)` when the device had no frame ready.
    pub fn read(
        &mut self,
        rgb: &mut Image<u8, 3, CpuAllocator>,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let Some(frame) = self.capture.grab_frame()? else {
            return Ok(false);
        };

        let buf = frame.buffer.as_slice();
        match frame.pixel_format {
            PixelFormat::YUYV => yuyv_to_rgb(buf, rgb.as_slice_mut())?,
            PixelFormat::MJPG => jpeg::decode_image_jpeg_rgb8(buf, rgb)?,
            other => return Err(format!("Unsupported format: {other}").into()),
        }

        Ok(true)
    }
}
