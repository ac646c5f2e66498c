use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettypretty::theme::VGA_COLORS;
use prettypretty::{Color, OkVersion, Sampler};

pub fn run_benchmarks(c: &mut Criterion) {
    let sampler = Sampler::new(OkVersion::Revised, VGA_COLORS.clone());
    let colors = [
        Color::srgb(1.0, 0.5, 0.5),
        Color::srgb(0.1, 0.8, 0.3),
        Color::srgb(0.2, 0.2, 0.9),
        Color::from_24bit(0xc4, 0x13, 0x31),
    ];

    let mut group = c.benchmark_group("sampler-closest-match");
    group.sample_size(50);

    group.bench_function("to_closest_ansi", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(sampler.to_closest_ansi(color));
            }
        })
    });

    group.bench_function("to_ansi_in_rgb", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(sampler.to_ansi_in_rgb(color));
            }
        })
    });

    group.bench_function("to_closest_8bit", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(sampler.to_closest_8bit(color));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
