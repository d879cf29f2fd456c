//! One-sound-at-a-time playback.
//!
//! A [`Player`] owns an [`AudioBackend`] and at most one active sound. Starting
//! a new sound releases the previous stream first, so rapid presses never
//! overlap. Each call to [`Player::play`] returns a [`Playback`] handle that
//! reports when the sound has finished.

use crate::backend::{AudioBackend, StreamHandle};
use crate::wav::decode_container;
use crate::Result;
use soundboard_core::{AudioContainer, ToneRequest};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Poll interval while waiting for a sound to finish.
const WAIT_POLL: Duration = Duration::from_millis(5);

/// Render state for one sound, advanced from the audio callback.
///
/// Holds the decoded mono samples, the read position and a shared finished
/// flag. When the device rate differs from the source rate the position
/// advances by `source_rate / output_rate` per frame (sample-and-hold).
/// Rendering allocates nothing.
#[derive(Debug)]
pub struct PlaybackCursor {
    samples: Arc<[f32]>,
    position: f64,
    step: f64,
    gain: f32,
    finished: Arc<AtomicBool>,
}

impl PlaybackCursor {
    /// Create a cursor over `samples` recorded at `source_rate`, rendered at
    /// `output_rate` with `volume` in `[0, 1]` (clamped, NaN is silence).
    pub fn new(
        samples: impl Into<Arc<[f32]>>,
        source_rate: u32,
        output_rate: u32,
        volume: f32,
    ) -> Self {
        let samples = samples.into();
        let step = if source_rate == 0 || output_rate == 0 {
            1.0
        } else {
            f64::from(source_rate) / f64::from(output_rate)
        };
        let gain = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        let finished = Arc::new(AtomicBool::new(samples.is_empty()));

        Self {
            samples,
            position: 0.0,
            step,
            gain,
            finished,
        }
    }

    /// Fill an interleaved buffer with `channels` channels.
    ///
    /// The mono signal is copied to every channel. Frames past the end of the
    /// sound are silent, and the finished flag is raised once the last sample
    /// has been rendered into `out`. That is buffer hand-off time: the device
    /// may still be playing the tail of this buffer.
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        let channels = channels.max(1);

        for frame in out.chunks_mut(channels) {
            let value = self
                .samples
                .get(self.position as usize)
                .map_or(0.0, |s| s * self.gain);
            frame.fill(value);
            if (self.position as usize) < self.samples.len() {
                self.position += self.step;
            }
        }

        if self.position as usize >= self.samples.len() {
            self.finished.store(true, Ordering::Release);
        }
    }

    /// True once every sample has been rendered.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Shared flag raised when the sound finishes.
    pub fn finished_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.finished)
    }

    /// Applied gain after clamping.
    pub fn gain(&self) -> f32 {
        self.gain
    }
}

/// Handle to a sound started by [`Player::play`].
///
/// Cheap to clone. The finished notification fires when the sound plays out,
/// when [`Player::stop`] is called, or when a newer sound replaces it.
#[derive(Debug, Clone)]
pub struct Playback {
    finished: Arc<AtomicBool>,
    duration: Duration,
}

impl Playback {
    /// True once the sound has finished or been stopped.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Nominal length of the sound.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Block until the sound finishes.
    pub fn wait(&self) {
        while !self.is_finished() {
            std::thread::sleep(WAIT_POLL);
        }
    }

    /// Block until the sound finishes or `timeout` elapses.
    ///
    /// Returns `true` if the sound finished.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.is_finished() {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            std::thread::sleep(WAIT_POLL.min(deadline - now));
        }
        true
    }
}

struct ActiveSound {
    _stream: StreamHandle,
    finished: Arc<AtomicBool>,
}

/// Plays synthesized containers through an [`AudioBackend`], one at a time.
pub struct Player<B: AudioBackend> {
    backend: B,
    device_name: Option<String>,
    active: Option<ActiveSound>,
}

impl<B: AudioBackend> Player<B> {
    /// Create a player on the backend's default output device.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            device_name: None,
            active: None,
        }
    }

    /// Select an output device by (partial) name.
    pub fn with_device(mut self, device_name: Option<String>) -> Self {
        self.device_name = device_name;
        self
    }

    /// True while a sound is playing.
    pub fn is_playing(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| !a.finished.load(Ordering::Acquire))
    }

    /// Play a WAV container at `volume`, replacing any sound in progress.
    ///
    /// The container is decoded with a standard WAV reader, so any valid WAV
    /// buffer works, not only synthesized tones.
    pub fn play(&mut self, container: &AudioContainer, volume: f32) -> Result<Playback> {
        self.play_bytes(container.as_bytes(), volume)
    }

    /// Synthesize `request` at `sample_rate` and play it.
    pub fn play_tone(
        &mut self,
        request: ToneRequest,
        sample_rate: u32,
        volume: f32,
    ) -> Result<Playback> {
        self.play(&request.encode(sample_rate), volume)
    }

    /// Play raw WAV bytes at `volume`, replacing any sound in progress.
    pub fn play_bytes(&mut self, bytes: &[u8], volume: f32) -> Result<Playback> {
        // Release the previous stream before opening a new one
        self.stop();

        let decoded = decode_container(bytes)?;
        let duration = Duration::from_secs_f64(decoded.duration_secs());
        let config = self.backend.output_config(self.device_name.as_deref())?;
        let channels = usize::from(config.channels);

        let mut cursor = PlaybackCursor::new(
            decoded.samples,
            decoded.spec.sample_rate,
            config.sample_rate,
            volume,
        );
        let finished = cursor.finished_flag();

        tracing::debug!(
            source_rate = decoded.spec.sample_rate,
            output_rate = config.sample_rate,
            channels,
            gain = cursor.gain(),
            duration_ms = duration.as_millis() as u64,
            "starting playback"
        );

        let stream = self.backend.build_output_stream(
            &config,
            Box::new(move |data: &mut [f32]| cursor.render(data, channels)),
            Box::new(|err: &str| tracing::warn!(error = err, "output stream error")),
        )?;

        self.active = Some(ActiveSound {
            _stream: stream,
            finished: Arc::clone(&finished),
        });

        Ok(Playback { finished, duration })
    }

    /// Stop and release the current sound, if any.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.finished.store(true, Ordering::Release);
            tracing::debug!("playback released");
        }
    }
}

impl<B: AudioBackend> Drop for Player<B> {
    fn drop(&mut self) {
        self.stop();
    }
}
