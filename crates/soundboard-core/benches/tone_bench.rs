//! Criterion benchmarks for tone synthesis
//!
//! Run with: cargo bench -p soundboard-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use soundboard_core::{ToneRequest, encode_pcm16_mono, synthesize, synthesize_samples};

const SAMPLE_RATE: u32 = 44100;
const DURATIONS_MS: &[u32] = &[100, 300, 600, 1000];

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Synthesize");

    for &duration_ms in DURATIONS_MS {
        group.bench_with_input(
            BenchmarkId::new("Tone", duration_ms),
            &duration_ms,
            |b, &ms| b.iter(|| black_box(synthesize(black_box(440.0), ms, SAMPLE_RATE))),
        );
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode");

    for &duration_ms in DURATIONS_MS {
        let samples = synthesize_samples(ToneRequest::new(440.0, duration_ms), SAMPLE_RATE);
        group.bench_with_input(
            BenchmarkId::new("Pcm16Mono", duration_ms),
            &samples,
            |b, samples| b.iter(|| black_box(encode_pcm16_mono(samples, SAMPLE_RATE))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_synthesize, bench_encode);
criterion_main!(benches);
