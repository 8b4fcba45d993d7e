use argh::FromArgs;
use kornia_apriltag::family::TagFamilyKind;
use kornia_image::{allocator::CpuAllocator, Image, ImageSize};
use kornia_io::{fps_counter::FpsCounter, v4l::PixelFormat};
use marker_guide::{GuideConfig, GuidanceComputer, Overlay};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{
    camera::{Camera, CameraConfig},
    detector::{parse_tag_family, MarkerDetector},
    viz,
};

#[derive(FromArgs)]
/// Guide the camera until a fiducial marker sits at the center of the frame
struct Args {
    /// the camera id to use
    #[argh(option, short = 'c', default = "0")]
    camera_id: u32,

    /// the requested frame width
    #[argh(option, default = "1280")]
    width: usize,

    /// the requested frame height
    #[argh(option, default = "720")]
    height: usize,

    /// the frames per second to request
    #[argh(option, short = 'f', default = "30")]
    fps: u32,

    /// the pixel format to use
    #[argh(option, short = 'p', default = "PixelFormat::YUYV")]
    pixel_format: PixelFormat,

    /// raw V4L2 brightness control value
    #[argh(option, short = 'b')]
    brightness: Option<i32>,

    /// the dead-zone half width in pixels, overrides the config file
    #[argh(option, short = 't')]
    threshold: Option<f32>,

    /// apriltag family to detect
    #[argh(
        option,
        short = 'k',
        default = "TagFamilyKind::Tag36H11",
        from_str_fn(parse_tag_family)
    )]
    family: TagFamilyKind,

    /// path to a JSON guidance configuration
    #[argh(option)]
    config: Option<String>,

    /// the duration in seconds to run the app
    #[argh(option, short = 'd')]
    duration: Option<u64>,

    /// debug the frame rate
    #[argh(switch)]
    debug: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    env_logger::init();

    let mut config = match &args.config {
        Some(path) => GuideConfig::from_file(path)?,
        None => GuideConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold)?;
    }

    let rec = rerun::RecordingStreamBuilder::new("Marker Navigator").spawn()?;

    log::info!("Opening camera {}", args.camera_id);
    let mut camera = Camera::open(&CameraConfig {
        camera_id: args.camera_id,
        size: ImageSize {
            width: args.width,
            height: args.height,
        },
        fps: args.fps,
        format: args.pixel_format,
        brightness: args.brightness,
    })?;
    let img_size = camera.size();
    log::info!("Camera ready: {img_size:?} @ {} fps", args.fps);

    let mut detector = MarkerDetector::new(vec![args.family], img_size)?;
    log::info!("Marker detector ready");

    let computer = GuidanceComputer::new(config);

    // create a cancel token to stop the capture loop
    let cancel_token = Arc::new(AtomicBool::new(false));

    ctrlc::set_handler({
        let cancel_token = cancel_token.clone();
        move || {
            log::info!("Received Ctrl-C signal. Sending cancel signal !!");
            cancel_token.store(true, Ordering::SeqCst);
        }
    })?;

    if let Some(duration_secs) = args.duration {
        std::thread::spawn({
            let cancel_token = cancel_token.clone();
            move || {
                std::thread::sleep(std::time::Duration::from_secs(duration_secs));
                log::info!("Sending timer cancel signal !!");
                cancel_token.store(true, Ordering::SeqCst);
            }
        });
    }

    let mut fps_counter = FpsCounter::new();
    let mut rgb = Image::<u8, 3, CpuAllocator>::from_size_val(img_size, 0, CpuAllocator)?;

    log::info!("Starting guidance loop");
    while !cancel_token.load(Ordering::SeqCst) {
        match camera.read(&mut rgb) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                log::warn!("Skipping frame: {e}");
                continue;
            }
        }

        let markers = match detector.detect(&rgb) {
            Ok(markers) => markers,
            Err(e) => {
                log::warn!("Marker detection failed: {e}");
                continue;
            }
        };

        let guidance = computer.compute(img_size, &markers);
        let overlay = Overlay::build(&guidance, &computer.config().overlay);

        viz::log_frame(&rec, &rgb, &overlay, &guidance.status)?;

        if args.debug {
            fps_counter.update();
            log::info!("FPS: {:.2}", fps_counter.fps());
        }
    }

    log::info!("Guidance loop stopped");

    Ok(())
}
