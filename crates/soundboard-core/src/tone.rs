//! Enveloped sine tone synthesis.
//!
//! A tone is a unit sine at the requested pitch, shaped by a piecewise-linear
//! envelope and scaled by a fixed headroom gain:
//!
//! ```text
//! s(i) = sin(2π·f·t) · e(t) · 0.5        t = i / sample_rate
//! e(t) = min(1, 20·t, 10·(d − t))        d = duration in seconds
//! ```
//!
//! The envelope reaches full level after 50 ms and fades out over the last
//! 100 ms. For tones shorter than roughly 150 ms the attack and release ramps
//! meet before full level is reached; that shape is kept as-is.

use core::f64::consts::PI;
use libm::sin;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::wav::{AudioContainer, MAX_SAMPLES, encode_pcm16_mono};

/// Output sample rate used by the sound board, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Attack slope of the envelope, in full-scale units per second.
pub const ATTACK_RATE: f64 = 20.0;

/// Release slope of the envelope, in full-scale units per second.
pub const RELEASE_RATE: f64 = 10.0;

/// Fixed gain applied to every sample so quantization never clips.
pub const HEADROOM: f64 = 0.5;

/// A single tone to synthesize: pitch and length of one button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Tone pitch in Hz.
    pub frequency_hz: f64,
    /// Tone length in milliseconds.
    pub duration_ms: u32,
}

impl ToneRequest {
    /// Create a request for `frequency_hz` lasting `duration_ms` milliseconds.
    pub fn new(frequency_hz: f64, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.duration_ms) / 1000.0
    }

    /// Number of samples this tone occupies at `sample_rate`.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        sample_count(sample_rate, self.duration_ms)
    }

    /// Synthesize and encode this tone. See [`synthesize`].
    pub fn encode(&self, sample_rate: u32) -> AudioContainer {
        synthesize(self.frequency_hz, self.duration_ms, sample_rate)
    }
}

/// Amplitude envelope at time `t` for a tone lasting `duration_secs`.
///
/// Three-way minimum of full level, the attack ramp and the release ramp. The
/// result is in `[0, 1]` for `t` in `[0, duration_secs]`; past the end of the
/// tone it goes negative, so only evaluate it inside the window.
#[inline]
pub fn envelope(t: f64, duration_secs: f64) -> f64 {
    let attack = t * ATTACK_RATE;
    let release = (duration_secs - t) * RELEASE_RATE;
    1.0f64.min(attack).min(release)
}

/// Number of samples in a tone: `floor(sample_rate * duration_ms / 1000)`.
///
/// Computed in integer arithmetic, then capped at [`MAX_SAMPLES`] so the
/// container's 32-bit size fields cannot overflow.
pub fn sample_count(sample_rate: u32, duration_ms: u32) -> usize {
    let n = u64::from(sample_rate) * u64::from(duration_ms) / 1000;
    n.min(MAX_SAMPLES as u64) as usize
}

/// Render the enveloped sine for `request` as float samples.
///
/// Every sample lies within `[-0.5, 0.5]`. A frequency that is zero, negative
/// or not finite renders silence of the requested length.
pub fn synthesize_samples(request: ToneRequest, sample_rate: u32) -> Vec<f32> {
    let num_samples = request.sample_count(sample_rate);
    let duration_secs = request.duration_secs();
    let frequency = if request.frequency_hz.is_finite() && request.frequency_hz > 0.0 {
        request.frequency_hz
    } else {
        0.0
    };
    let omega = 2.0 * PI * frequency;
    let sr = f64::from(sample_rate);

    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sr;
            (sin(omega * t) * envelope(t, duration_secs) * HEADROOM) as f32
        })
        .collect()
}

/// Synthesize a tone and encode it as a 16-bit mono PCM WAV file.
///
/// Pure and deterministic: equal arguments always produce byte-identical
/// output. Durations that round down to zero samples yield a valid 44-byte
/// header-only container.
///
/// # Example
///
/// ```rust
/// use soundboard_core::synthesize;
///
/// let wav = synthesize(523.0, 600, 44100);
/// let header = wav.header();
/// assert_eq!(header.sample_rate, 44100);
/// assert_eq!(header.num_samples(), 26460);
/// ```
pub fn synthesize(frequency_hz: f64, duration_ms: u32, sample_rate: u32) -> AudioContainer {
    let request = ToneRequest::new(frequency_hz, duration_ms);
    let samples = synthesize_samples(request, sample_rate);
    let container = encode_pcm16_mono(&samples, sample_rate);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        frequency_hz,
        duration_ms,
        sample_rate,
        num_samples = samples.len(),
        bytes = container.len(),
        "tone synthesized"
    );

    container
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_starts_at_zero() {
        assert_eq!(envelope(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_envelope_attack_reaches_full_level_at_50ms() {
        assert!((envelope(0.025, 1.0) - 0.5).abs() < 1e-12);
        assert_eq!(envelope(0.05, 1.0), 1.0);
        assert_eq!(envelope(0.5, 1.0), 1.0);
    }

    #[test]
    fn test_envelope_release_over_last_100ms() {
        assert_eq!(envelope(0.85, 1.0), 1.0);
        // Release knee: (1.0 - 0.9) * 10 is one ulp short of 1.0 in f64
        assert!((envelope(0.9, 1.0) - 1.0).abs() < 1e-12);
        assert!((envelope(0.95, 1.0) - 0.5).abs() < 1e-9);
        assert!(envelope(0.999, 1.0) < 0.011);
    }

    #[test]
    fn test_envelope_overlapping_ramps_on_short_tone() {
        // 90 ms: 20t = 10(0.09 - t) at t = 30 ms, level 0.6, never reaching 1.
        let peak = (0..=90)
            .map(|ms| envelope(f64::from(ms) / 1000.0, 0.09))
            .fold(0.0f64, f64::max);
        assert!((peak - 0.6).abs() < 1e-9, "peak = {peak}");
    }

    #[test]
    fn test_envelope_negative_past_end() {
        assert!(envelope(1.1, 1.0) < 0.0);
    }

    #[test]
    fn test_sample_count_floors() {
        assert_eq!(sample_count(44100, 1000), 44100);
        assert_eq!(sample_count(44100, 1), 44);
        assert_eq!(sample_count(44100, 0), 0);
        assert_eq!(sample_count(22050, 3), 66);
        assert_eq!(sample_count(0, 1000), 0);
    }

    #[test]
    fn test_sample_count_is_capped() {
        assert_eq!(sample_count(u32::MAX, u32::MAX), MAX_SAMPLES);
    }

    #[test]
    fn test_samples_respect_headroom() {
        let samples = synthesize_samples(ToneRequest::new(440.0, 500), 44100);
        assert_eq!(samples.len(), 22050);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
        // Full level is actually reached somewhere in the sustain section
        let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak > 0.49, "peak = {peak}");
    }

    #[test]
    fn test_zero_frequency_is_silence() {
        let samples = synthesize_samples(ToneRequest::new(0.0, 100), 44100);
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_non_finite_frequency_is_silence() {
        for f in [f64::NAN, f64::INFINITY, -440.0] {
            let samples = synthesize_samples(ToneRequest::new(f, 20), 44100);
            assert!(samples.iter().all(|&s| s == 0.0), "frequency {f}");
        }
    }

    #[test]
    fn test_request_encode_matches_free_function() {
        let req = ToneRequest::new(150.0, 300);
        assert_eq!(req.encode(44100), synthesize(150.0, 300, 44100));
    }
}
