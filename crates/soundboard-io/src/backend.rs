//! Pluggable audio output backend.
//!
//! [`AudioBackend`] decouples the [`Player`](crate::Player) from any specific
//! platform audio API. [`CpalBackend`](crate::CpalBackend) is the default;
//! tests drive the player through an in-process backend instead of hardware.
//!
//! ```text
//! ┌──────────────┐   AudioContainer    ┌──────────────┐
//! │ CLI / UI     │ ──────────────────► │   Player     │
//! └──────────────┘                     └──────┬───────┘
//!                                             │ AudioBackend
//!                                      ┌──────┴───────┐
//!                                      ▼              ▼
//!                               ┌────────────┐  ┌────────────┐
//!                               │ CpalBackend│  │ test double│
//!                               └────────────┘  └────────────┘
//! ```
//!
//! Callbacks are boxed closures so the trait stays object-safe, and streams
//! come back as a type-erased [`StreamHandle`] that stops playback on drop.

use crate::{AudioDevice, Result};

/// Configuration for building an output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendStreamConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved output channels.
    pub channels: u16,
    /// Optional device name (uses system default if `None`).
    pub device_name: Option<String>,
}

impl Default for BackendStreamConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 2,
            device_name: None,
        }
    }
}

/// Type-erased audio stream handle.
///
/// The stream is active while this handle exists; dropping it stops playback.
pub struct StreamHandle {
    /// The backend-specific stream object, kept alive via RAII.
    _inner: Box<dyn Send>,
}

impl StreamHandle {
    /// Wrap a backend-specific stream object.
    pub fn new<T: Send + 'static>(stream: T) -> Self {
        Self {
            _inner: Box::new(stream),
        }
    }
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle").finish_non_exhaustive()
    }
}

/// Audio output callback signature.
///
/// Called on the real-time audio thread with a buffer of interleaved f32
/// samples (`[L0, R0, L1, R1, ...]` for stereo) that it must fill.
/// Implementations must not allocate, lock or perform I/O.
pub type OutputCallback = Box<dyn FnMut(&mut [f32]) + Send>;

/// Error callback signature, called with a human-readable message.
pub type ErrorCallback = Box<dyn FnMut(&str) + Send>;

/// Pluggable audio output backend.
pub trait AudioBackend: Send {
    /// Human-readable name of this backend (e.g., "cpal", "mock").
    fn name(&self) -> &str;

    /// List all available output devices.
    fn list_devices(&self) -> Result<Vec<AudioDevice>>;

    /// Native output configuration of a device (default device if `None`).
    ///
    /// The player renders at this rate and channel count so no conversion
    /// happens inside the backend.
    fn output_config(&self, device_name: Option<&str>) -> Result<BackendStreamConfig>;

    /// Build and start an output stream.
    ///
    /// The returned [`StreamHandle`] keeps the stream alive. Dropping it stops
    /// playback.
    fn build_output_stream(
        &self,
        config: &BackendStreamConfig,
        callback: OutputCallback,
        error_callback: ErrorCallback,
    ) -> Result<StreamHandle>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendStreamConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channels, 2);
        assert!(config.device_name.is_none());
    }

    #[test]
    fn test_stream_handle_debug() {
        let handle = StreamHandle::new(42u32);
        assert!(format!("{:?}", handle).contains("StreamHandle"));
    }
}
