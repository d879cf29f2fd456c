//! Audio I/O layer for the sound board.
//!
//! This crate is the playback side of the board: it takes the in-memory WAV
//! containers produced by `soundboard-core` and gets them to a speaker or a
//! file.
//!
//! - **Decoding**: [`decode_container`] parses any WAV byte buffer via hound
//! - **File I/O**: [`write_container`], [`read_wav`] and [`read_wav_info`]
//! - **Playback**: [`Player`] plays one sound at a time through an
//!   [`AudioBackend`], releasing the previous sound before starting the next
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soundboard_core::synthesize;
//! use soundboard_io::{CpalBackend, Player};
//!
//! let mut player = Player::new(CpalBackend::new());
//! let playback = player.play(&synthesize(440.0, 500, 44100), 0.8)?;
//! playback.wait();
//! ```

pub mod backend;
pub mod cpal_backend;
mod player;
mod stream;
mod wav;

pub use backend::{AudioBackend, BackendStreamConfig, ErrorCallback, OutputCallback, StreamHandle};
pub use cpal_backend::CpalBackend;
pub use player::{Playback, PlaybackCursor, Player};
pub use stream::{AudioDevice, default_output_device, list_output_devices};
pub use wav::{
    DecodedAudio, WavFormat, WavInfo, WavSpec, decode_container, read_wav, read_wav_info,
    write_container,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV decoding or encoding error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Malformed canonical WAV header.
    #[error("WAV header error: {0}")]
    Header(#[from] soundboard_core::HeaderError),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
