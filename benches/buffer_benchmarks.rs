//! Buffer Benchmarks
//!
//! Throughput of the most common buffer operations on 10 seconds of stereo audio.

use audio_buffer_utils::{
    concat, create, fill_with, mix, normalize, reduce, slice, trim, AudioBuffer, SampleRange,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE_RATE: u32 = 44100;

fn sine_buffer(seconds: usize) -> AudioBuffer {
    let length = SAMPLE_RATE as usize * seconds;
    let mut buffer = create::<f32>(length, Some(2), Some(SAMPLE_RATE)).unwrap();
    fill_with(
        &mut buffer,
        |_, i, _, _| {
            let t = i as f64 / SAMPLE_RATE as f64;
            (0.25 * (2.0 * std::f64::consts::PI * 440.0 * t).sin()) as f32
        },
        ..,
    )
    .unwrap();
    buffer
}

fn benchmark_normalize(c: &mut Criterion) {
    let buffer = sine_buffer(10);

    c.bench_function("normalize_10s_stereo", |b| {
        b.iter(|| {
            let mut work = buffer.clone();
            normalize(black_box(&mut work), ..).unwrap();
        })
    });
}

fn benchmark_reduce(c: &mut Criterion) {
    let buffer = sine_buffer(10);

    c.bench_function("reduce_sum_squares_10s_stereo", |b| {
        b.iter(|| reduce(black_box(&buffer), |acc, s, _, _, _| acc + s * s, 0.0_f32, ..).unwrap())
    });
}

fn benchmark_slice_concat(c: &mut Criterion) {
    let buffer = sine_buffer(10);
    let middle = buffer.len() as isize / 2;

    c.bench_function("slice_concat_10s_stereo", |b| {
        b.iter(|| {
            let head = slice(black_box(&buffer), SampleRange::to_end(middle)).unwrap();
            let tail = slice(black_box(&buffer), SampleRange::from_start(middle)).unwrap();
            concat(&head, &tail).unwrap()
        })
    });
}

fn benchmark_mix_and_trim(c: &mut Criterion) {
    let buffer = sine_buffer(10);
    let overlay = sine_buffer(2);

    c.bench_function("mix_2s_into_10s", |b| {
        b.iter(|| {
            let mut work = buffer.clone();
            mix(black_box(&mut work), &overlay, 0.5, SAMPLE_RATE as isize).unwrap();
        })
    });

    c.bench_function("trim_10s_stereo", |b| {
        b.iter(|| trim(black_box(&buffer), 0.01).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_reduce,
    benchmark_slice_concat,
    benchmark_mix_and_trim
);
criterion_main!(benches);
