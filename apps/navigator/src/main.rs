#[cfg(target_os = "linux")]
mod camera;
#[cfg(target_os = "linux")]
mod convert;
#[cfg(target_os = "linux")]
mod detector;
#[cfg(target_os = "linux")]
mod navigator;
#[cfg(target_os = "linux")]
mod viz;

#[cfg(target_os = "linux")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    navigator::run()
}

#[cfg(not(target_os = "linux"))]
fn main() {
    panic!("This app is only supported on Linux due to V4L dep.");
}
