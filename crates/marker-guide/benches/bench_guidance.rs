use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use kornia_image::ImageSize;
use marker_guide::{GuideConfig, GuidanceComputer, Marker, Overlay};

fn bench_guidance(c: &mut Criterion) {
    let mut group = c.benchmark_group("Guidance");

    let size = ImageSize {
        width: 1280,
        height: 720,
    };
    let markers = (0..16)
        .map(|i| {
            let x = 50.0 + 70.0 * i as f32;
            Marker::new(
                i,
                [
                    Vec2::new(x, 300.0),
                    Vec2::new(x + 60.0, 300.0),
                    Vec2::new(x + 60.0, 360.0),
                    Vec2::new(x, 360.0),
                ],
            )
        })
        .collect::<Vec<_>>();

    let config = GuideConfig::default();
    let computer = GuidanceComputer::new(config.clone());

    group.bench_function("compute", |b| {
        b.iter(|| std::hint::black_box(computer.compute(size, &markers)))
    });

    group.bench_function("compute_and_overlay", |b| {
        b.iter(|| {
            let guidance = computer.compute(size, &markers);
            std::hint::black_box(Overlay::build(&guidance, &config.overlay))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_guidance);
criterion_main!(benches);
