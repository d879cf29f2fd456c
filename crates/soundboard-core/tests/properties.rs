//! Property-based tests for tone synthesis and container encoding.
//!
//! Verifies size, headroom and determinism invariants across randomized
//! frequencies, durations and sample rates using proptest.

use proptest::prelude::*;
use soundboard_core::{HEADER_LEN, WavHeader, envelope, quantize_i16, synthesize};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Container length and size fields always agree with the floored sample count.
    #[test]
    fn container_sizes_follow_sample_count(
        freq in 20.0f64..5000.0,
        duration_ms in 0u32..1500,
        sample_rate in 8000u32..=96000,
    ) {
        let wav = synthesize(freq, duration_ms, sample_rate);
        let n = (u64::from(sample_rate) * u64::from(duration_ms) / 1000) as usize;
        let header = WavHeader::parse(wav.as_bytes()).unwrap();

        prop_assert_eq!(wav.len(), HEADER_LEN + n * 2);
        prop_assert_eq!(header.data_size as usize, n * 2);
        prop_assert_eq!(header.riff_size() as usize, 36 + n * 2);
        prop_assert_eq!(header.sample_rate, sample_rate);
        prop_assert_eq!(header.byte_rate, sample_rate * 2);
    }

    /// No decoded sample exceeds half of full scale.
    #[test]
    fn samples_never_exceed_headroom(
        freq in 1.0f64..10000.0,
        duration_ms in 1u32..800,
    ) {
        let wav = synthesize(freq, duration_ms, 44100);
        for s in wav.samples() {
            prop_assert!((-16384..=16383).contains(&s), "sample {}", s);
        }
    }

    /// Synthesis is a pure function of its arguments.
    #[test]
    fn synthesis_is_deterministic(
        freq in 20.0f64..5000.0,
        duration_ms in 0u32..500,
    ) {
        prop_assert_eq!(
            synthesize(freq, duration_ms, 44100).into_bytes(),
            synthesize(freq, duration_ms, 44100).into_bytes()
        );
    }

    /// Inside the tone window the envelope never leaves [0, 1].
    #[test]
    fn envelope_bounded_inside_window(
        duration_ms in 1u32..5000,
        frac in 0.0f64..1.0,
    ) {
        let d = f64::from(duration_ms) / 1000.0;
        let e = envelope(frac * d, d);
        prop_assert!((0.0..=1.0).contains(&e), "envelope {}", e);
    }

    /// Quantization is monotonic and never wraps.
    #[test]
    fn quantization_is_monotonic(a in -2.0f32..2.0, b in -2.0f32..2.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantize_i16(lo) <= quantize_i16(hi));
    }
}
