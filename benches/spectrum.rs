//! The direct O(N²) transform is the analyzer's primary latency risk for
//! per-frame snapshots; this bench tracks the gap against the realfft path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use beatgrid::audio::spectrum::{dft_magnitudes, magnitude_spectrum};

fn test_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let t = i as f32 / 44100.0;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.6
                + (2.0 * std::f32::consts::PI * 4000.0 * t).sin() * 0.3
        })
        .collect()
}

fn bench_spectrum(c: &mut Criterion) {
    let window = test_window(1024);

    let mut group = c.benchmark_group("spectrum_1024");
    group.bench_function("direct_dft", |b| {
        b.iter(|| dft_magnitudes(black_box(&window)))
    });
    group.bench_function("realfft", |b| {
        b.iter(|| magnitude_spectrum(black_box(&window)))
    });
    group.finish();
}

criterion_group!(benches, bench_spectrum);
criterion_main!(benches);
