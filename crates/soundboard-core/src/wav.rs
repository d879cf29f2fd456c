//! Canonical RIFF/WAVE container for 16-bit mono PCM.
//!
//! The container is the plain 44-byte header layout understood by every WAV
//! decoder, followed by the little-endian sample payload:
//!
//! ```text
//! offset  size  field
//!      0     4  "RIFF"
//!      4     4  36 + data size            u32 LE
//!      8     4  "WAVE"
//!     12     4  "fmt "
//!     16     4  16 (fmt chunk size)       u32 LE
//!     20     2  1 (linear PCM)            u16 LE
//!     22     2  channels                  u16 LE
//!     24     4  sample rate               u32 LE
//!     28     4  byte rate                 u32 LE
//!     32     2  block align               u16 LE
//!     34     2  bits per sample           u16 LE
//!     36     4  "data"
//!     40     4  data size                 u32 LE
//!     44     …  samples
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::pcm::quantize_i16;

/// Size of the canonical WAV header in bytes.
pub const HEADER_LEN: usize = 44;

/// Largest 16-bit mono sample count whose RIFF size still fits in a `u32`.
pub const MAX_SAMPLES: usize = ((u32::MAX - 36) / 2) as usize;

/// Bytes of the `fmt ` chunk body for plain PCM.
const FMT_CHUNK_LEN: u32 = 16;

/// `wFormatTag` for linear PCM.
const FORMAT_PCM: u16 = 1;

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

/// Errors from [`WavHeader::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Fewer than [`HEADER_LEN`] bytes were supplied.
    TooShort(usize),
    /// A fixed ASCII tag did not match at the given byte offset.
    BadTag {
        /// Byte offset of the tag.
        offset: usize,
        /// Tag that was expected there.
        expected: [u8; 4],
    },
    /// The `fmt ` chunk is not the 16-byte PCM layout.
    UnsupportedFmtChunk(u32),
    /// The RIFF size field disagrees with the data size field.
    SizeMismatch {
        /// Value of the RIFF size field.
        riff_size: u32,
        /// Value of the data size field.
        data_size: u32,
    },
}

impl core::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "header needs {HEADER_LEN} bytes, got {len}")
            }
            Self::BadTag { offset, expected } => write!(
                f,
                "expected tag {:?} at offset {offset}",
                core::str::from_utf8(expected).unwrap_or("????")
            ),
            Self::UnsupportedFmtChunk(len) => {
                write!(f, "unsupported fmt chunk of {len} bytes (expected 16)")
            }
            Self::SizeMismatch {
                riff_size,
                data_size,
            } => write!(
                f,
                "RIFF size {riff_size} does not match data size {data_size}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeaderError {}

/// Decoded fields of a canonical 44-byte WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Format tag (1 = linear PCM).
    pub audio_format: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second of audio.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Payload length in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `num_samples` frames of 16-bit mono PCM at `sample_rate`.
    ///
    /// `num_samples` is capped at [`MAX_SAMPLES`].
    pub fn pcm16_mono(sample_rate: u32, num_samples: usize) -> Self {
        let num_samples = num_samples.min(MAX_SAMPLES) as u32;
        Self {
            audio_format: FORMAT_PCM,
            channels: 1,
            sample_rate,
            byte_rate: sample_rate.wrapping_mul(2),
            block_align: 2,
            bits_per_sample: 16,
            data_size: num_samples * 2,
        }
    }

    /// Value of the RIFF chunk size field: file length minus 8.
    pub fn riff_size(&self) -> u32 {
        self.data_size.saturating_add(36)
    }

    /// Number of sample frames in the payload.
    pub fn num_samples(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        (self.data_size / u32::from(self.block_align)) as usize
    }

    /// Duration of the payload in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples() as f64 / f64::from(self.sample_rate)
    }

    /// Serialize to the 44-byte on-disk layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(RIFF_TAG);
        out[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        out[8..12].copy_from_slice(WAVE_TAG);
        out[12..16].copy_from_slice(FMT_TAG);
        out[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(DATA_TAG);
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Parse a canonical 44-byte header from the start of `bytes`.
    ///
    /// Only the plain layout written by [`WavHeader::to_bytes`] is accepted:
    /// a 16-byte `fmt ` chunk immediately followed by the `data` chunk.
    pub fn parse(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() < HEADER_LEN {
            return Err(HeaderError::TooShort(bytes.len()));
        }

        for (offset, tag) in [(0, RIFF_TAG), (8, WAVE_TAG), (12, FMT_TAG), (36, DATA_TAG)] {
            if &bytes[offset..offset + 4] != tag {
                return Err(HeaderError::BadTag {
                    offset,
                    expected: *tag,
                });
            }
        }

        let fmt_len = read_u32(bytes, 16);
        if fmt_len != FMT_CHUNK_LEN {
            return Err(HeaderError::UnsupportedFmtChunk(fmt_len));
        }

        let header = Self {
            audio_format: read_u16(bytes, 20),
            channels: read_u16(bytes, 22),
            sample_rate: read_u32(bytes, 24),
            byte_rate: read_u32(bytes, 28),
            block_align: read_u16(bytes, 32),
            bits_per_sample: read_u16(bytes, 34),
            data_size: read_u32(bytes, 40),
        };

        let riff_size = read_u32(bytes, 4);
        if u64::from(riff_size) != 36 + u64::from(header.data_size) {
            return Err(HeaderError::SizeMismatch {
                riff_size,
                data_size: header.data_size,
            });
        }

        Ok(header)
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// A complete WAV file held in memory.
///
/// Immutable once built. The header is kept alongside the bytes so callers
/// can inspect it without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioContainer {
    header: WavHeader,
    bytes: Vec<u8>,
}

impl AudioContainer {
    /// Decoded header fields.
    pub fn header(&self) -> WavHeader {
        self.header
    }

    /// Complete file contents, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Sample payload following the header.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Total length in bytes, header included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload holds no samples.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == HEADER_LEN
    }

    /// Iterate over the payload as signed 16-bit samples.
    pub fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        self.payload()
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
    }

    /// Consume the container, returning the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for AudioContainer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<AudioContainer> for Vec<u8> {
    fn from(container: AudioContainer) -> Self {
        container.bytes
    }
}

/// Encode float samples as a 16-bit mono PCM WAV file.
///
/// Each sample goes through [`quantize_i16`]. Input longer than
/// [`MAX_SAMPLES`] is truncated.
pub fn encode_pcm16_mono(samples: &[f32], sample_rate: u32) -> AudioContainer {
    let samples = &samples[..samples.len().min(MAX_SAMPLES)];
    let header = WavHeader::pcm16_mono(sample_rate, samples.len());

    let mut bytes = Vec::with_capacity(HEADER_LEN + samples.len() * 2);
    bytes.extend_from_slice(&header.to_bytes());
    for &sample in samples {
        bytes.extend_from_slice(&quantize_i16(sample).to_le_bytes());
    }

    AudioContainer { header, bytes }
}
