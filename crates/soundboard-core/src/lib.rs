//! Soundboard Core - procedural tone synthesis for the sound board
//!
//! Every button on the board plays a short sine tone that is synthesized on
//! demand instead of being loaded from a bundled asset. This crate turns a
//! `(frequency, duration, sample rate)` triple into a complete, self-describing
//! WAV file held in memory, ready to be handed to any audio decoder.
//!
//! # Pipeline
//!
//! ```text
//! ToneRequest ──► synthesize_samples ──► quantize_i16 ──► WavHeader + payload
//!  (Hz, ms)        (f32, envelope)        (i16 LE)          (AudioContainer)
//! ```
//!
//! - [`ToneRequest`] - frequency and duration of one button press
//! - [`envelope`] - linear attack (1/20 s) and release (1/10 s) envelope
//! - [`synthesize_samples`] - the enveloped sine at half-scale headroom
//! - [`quantize_i16`] - asymmetric 16-bit PCM quantization
//! - [`WavHeader`] / [`AudioContainer`] - canonical 44-byte RIFF/WAVE layout
//!
//! # Example
//!
//! ```rust
//! use soundboard_core::{synthesize, DEFAULT_SAMPLE_RATE};
//!
//! let wav = synthesize(440.0, 1000, DEFAULT_SAMPLE_RATE);
//! assert_eq!(wav.len(), 44 + 44100 * 2);
//! assert_eq!(&wav.as_bytes()[0..4], b"RIFF");
//! ```
//!
//! # no_std Support
//!
//! The encoder is pure arithmetic over an owned buffer and works without `std`
//! (it needs `alloc`). Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! soundboard-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod pcm;
pub mod tone;
pub mod wav;

pub use pcm::quantize_i16;
pub use tone::{
    ATTACK_RATE, DEFAULT_SAMPLE_RATE, HEADROOM, RELEASE_RATE, ToneRequest, envelope,
    sample_count, synthesize, synthesize_samples,
};
pub use wav::{
    AudioContainer, HEADER_LEN, HeaderError, MAX_SAMPLES, WavHeader, encode_pcm16_mono,
};
