//! WAV decoding and file I/O.

use crate::Result;
use hound::{SampleFormat, WavReader};
use soundboard_core::AudioContainer;
use std::io::{Cursor, Read};
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

impl From<SampleFormat> for WavFormat {
    fn from(format: SampleFormat) -> Self {
        match format {
            SampleFormat::Float => WavFormat::IeeeFloat,
            SampleFormat::Int => WavFormat::Pcm,
        }
    }
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// WAV stream specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

/// Mono float samples decoded from a WAV buffer.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Samples in `[-1.0, 1.0)`, multi-channel input mixed down to mono.
    pub samples: Vec<f32>,
    /// Format of the source buffer.
    pub spec: WavSpec,
}

impl DecodedAudio {
    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.spec.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.spec.sample_rate)
    }
}

fn info_from_reader<R: Read>(reader: &WavReader<R>) -> WavInfo {
    let spec = reader.spec();
    let total_samples = u64::from(reader.len()); // total across all channels
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = if spec.sample_rate == 0 {
        0.0
    } else {
        num_frames as f64 / f64::from(spec.sample_rate)
    };

    WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format: spec.sample_format.into(),
    }
}

fn decode_reader<R: Read>(reader: WavReader<R>) -> Result<DecodedAudio> {
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max_val = (1i64 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    // Mix down to mono if multi-channel
    let samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok(DecodedAudio { samples, spec })
}

/// Decode a WAV file held in memory.
///
/// Accepts any layout hound understands, not only the canonical one written
/// by `soundboard-core`.
///
/// # Example
/// ```
/// use soundboard_core::synthesize;
/// use soundboard_io::decode_container;
///
/// let wav = synthesize(440.0, 100, 44100);
/// let decoded = decode_container(wav.as_bytes()).unwrap();
/// assert_eq!(decoded.samples.len(), 4410);
/// assert_eq!(decoded.spec.sample_rate, 44100);
/// ```
pub fn decode_container(bytes: &[u8]) -> Result<DecodedAudio> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    decode_reader(reader)
}

/// Read a WAV file and return mono samples as f32 along with the spec.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let decoded = decode_reader(WavReader::open(path)?)?;
    Ok((decoded.samples, decoded.spec))
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    Ok(info_from_reader(&reader))
}

/// Write a synthesized container to disk byte-for-byte.
pub fn write_container<P: AsRef<Path>>(path: P, container: &AudioContainer) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, container.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = container.len(), "container written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundboard_core::{encode_pcm16_mono, synthesize};
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_matches_quantized_samples() {
        let wav = encode_pcm16_mono(&[0.5, -0.5, 0.0, 1.0], 8000);
        let decoded = decode_container(wav.as_bytes()).unwrap();
        assert_eq!(decoded.spec.channels, 1);
        assert_eq!(decoded.spec.bits_per_sample, 16);
        assert_eq!(decoded.samples.len(), 4);
        assert!((decoded.samples[0] - 16383.0 / 32768.0).abs() < 1e-6);
        assert_eq!(decoded.samples[1], -0.5);
        assert_eq!(decoded.samples[2], 0.0);
        assert!((decoded.samples[3] - 32767.0 / 32768.0).abs() < 1e-6);
    }

    #[test]
    fn test_decode_header_only() {
        let wav = synthesize(440.0, 0, 44100);
        let decoded = decode_container(wav.as_bytes()).unwrap();
        assert!(decoded.samples.is_empty());
        assert_eq!(decoded.duration_secs(), 0.0);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_container(b"not a wav file at all"),
            Err(crate::Error::Wav(_))
        ));
    }

    #[test]
    fn test_write_then_read_info() {
        let wav = synthesize(1000.0, 500, 44100);
        let file = NamedTempFile::new().unwrap();
        write_container(file.path(), &wav).unwrap();

        assert_eq!(std::fs::read(file.path()).unwrap(), wav.as_bytes());

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 22050);
        assert_eq!(info.format, WavFormat::Pcm);
        assert!((info.duration_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_read_wav_mixes_stereo_down() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let file = NamedTempFile::new().unwrap();
        let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
        for (l, r) in [(1.0f32, 0.0f32), (0.5, 0.5), (-1.0, 0.0)] {
            writer.write_sample(l).unwrap();
            writer.write_sample(r).unwrap();
        }
        writer.finalize().unwrap();

        let (samples, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec.channels, 2);
        assert_eq!(samples, vec![0.5, 0.5, -0.5]);
    }
}
