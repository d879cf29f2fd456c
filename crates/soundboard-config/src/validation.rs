//! Board and sound validation.
//!
//! Configuration files are edited by hand, so every value is range-checked
//! after parsing. The tone encoder itself accepts any input; these checks keep
//! user mistakes (a negative pitch, a 0 Hz sample rate) from silently turning
//! into silent buttons.
//!
//! # Example
//!
//! ```rust
//! use soundboard_config::{SoundPreset, validate_sound, ValidationError};
//!
//! let bad = SoundPreset::new("zero", "Zero", 0.0, 100);
//! assert!(matches!(validate_sound(&bad), Err(ValidationError::InvalidFrequency { .. })));
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::{BoardConfig, SoundPreset};

/// Lowest accepted board sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted board sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Longest accepted tone in milliseconds.
pub const MAX_DURATION_MS: u32 = 60_000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Volume outside `[0, 1]`.
    #[error("volume {0} out of range [0, 1]")]
    VolumeOutOfRange(f32),

    /// Sample rate outside the supported range.
    #[error("sample rate {0} Hz out of range [{min}, {max}]", min = MIN_SAMPLE_RATE, max = MAX_SAMPLE_RATE)]
    SampleRateOutOfRange(u32),

    /// Empty sound id.
    #[error("sound id must not be empty")]
    EmptyId,

    /// Frequency not a positive finite number.
    #[error("sound '{id}': frequency {value} Hz must be positive and finite")]
    InvalidFrequency {
        /// Sound id.
        id: String,
        /// Offending frequency.
        value: f64,
    },

    /// Duration zero or too long.
    #[error("sound '{id}': duration {value} ms out of range [1, {max}]", max = MAX_DURATION_MS)]
    InvalidDuration {
        /// Sound id.
        id: String,
        /// Offending duration.
        value: u32,
    },

    /// Two sounds share an id.
    #[error("duplicate sound id '{0}'")]
    DuplicateId(String),
}

/// Check that a playback volume lies in `[0, 1]`.
pub fn validate_volume(volume: f32) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&volume) {
        Ok(())
    } else {
        Err(ValidationError::VolumeOutOfRange(volume))
    }
}

/// Check that a sample rate lies in `MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE`.
pub fn validate_sample_rate(sample_rate: u32) -> Result<(), ValidationError> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(ValidationError::SampleRateOutOfRange(sample_rate))
    }
}

/// Check that the tone `id` has a finite, positive frequency.
pub fn validate_frequency(id: &str, frequency_hz: f64) -> Result<(), ValidationError> {
    if frequency_hz.is_finite() && frequency_hz > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidFrequency {
            id: id.to_string(),
            value: frequency_hz,
        })
    }
}

/// Validate a single sound.
pub fn validate_sound(sound: &SoundPreset) -> Result<(), ValidationError> {
    if sound.id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }
    validate_frequency(&sound.id, sound.frequency_hz)?;
    if sound.duration_ms == 0 || sound.duration_ms > MAX_DURATION_MS {
        return Err(ValidationError::InvalidDuration {
            id: sound.id.clone(),
            value: sound.duration_ms,
        });
    }
    Ok(())
}

/// Validate board-wide settings and every user sound.
///
/// User sound ids must be unique among themselves (ASCII case-insensitive,
/// the same folding sound lookup uses); sharing
/// an id with a factory sound is allowed and overrides it.
pub fn validate_board(board: &BoardConfig) -> Result<(), ValidationError> {
    validate_volume(board.volume)?;
    validate_sample_rate(board.sample_rate)?;

    let mut seen = HashSet::new();
    for sound in &board.sounds {
        validate_sound(sound)?;
        if !seen.insert(sound.id.to_ascii_lowercase()) {
            return Err(ValidationError::DuplicateId(sound.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sound() {
        assert_eq!(validate_sound(&SoundPreset::new("a", "A", 440.0, 100)), Ok(()));
    }

    #[test]
    fn test_empty_id() {
        let sound = SoundPreset::new("  ", "Blank", 440.0, 100);
        assert_eq!(validate_sound(&sound), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_bad_frequencies() {
        for f in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let sound = SoundPreset::new("x", "X", f, 100);
            assert!(
                matches!(validate_sound(&sound), Err(ValidationError::InvalidFrequency { .. })),
                "frequency {f}"
            );
        }
    }

    #[test]
    fn test_bad_durations() {
        for ms in [0, MAX_DURATION_MS + 1] {
            let sound = SoundPreset::new("x", "X", 440.0, ms);
            assert_eq!(
                validate_sound(&sound),
                Err(ValidationError::InvalidDuration {
                    id: "x".into(),
                    value: ms
                })
            );
        }
    }

    #[test]
    fn test_board_volume_range() {
        let mut board = BoardConfig::default();
        board.volume = 1.01;
        assert_eq!(validate_board(&board), Err(ValidationError::VolumeOutOfRange(1.01)));
        board.volume = -0.1;
        assert!(validate_board(&board).is_err());
        board.volume = 0.0;
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_board_sample_rate_range() {
        let mut board = BoardConfig::default();
        board.sample_rate = 4000;
        assert_eq!(validate_board(&board), Err(ValidationError::SampleRateOutOfRange(4000)));
        board.sample_rate = 192_000;
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_duplicate_ids_case_insensitive() {
        let mut board = BoardConfig::default();
        board.sounds.push(SoundPreset::new("beep", "Beep", 880.0, 100));
        board.sounds.push(SoundPreset::new("BEEP", "Beep 2", 440.0, 100));
        assert_eq!(validate_board(&board), Err(ValidationError::DuplicateId("BEEP".into())));
    }

    #[test]
    fn test_duplicate_check_folds_ascii_only() {
        let mut board = BoardConfig::default();
        board.sounds.push(SoundPreset::new("\u{c4}", "Upper", 880.0, 100));
        board.sounds.push(SoundPreset::new("\u{e4}", "Lower", 440.0, 100));
        assert!(validate_board(&board).is_ok());
        // Lookup agrees: each id finds its own sound
        assert_eq!(board.find_sound("\u{c4}").unwrap().label, "Upper");
        assert_eq!(board.find_sound("\u{e4}").unwrap().label, "Lower");
    }

    #[test]
    fn test_override_checks() {
        assert!(validate_sample_rate(0).is_err());
        assert!(validate_sample_rate(MIN_SAMPLE_RATE - 1).is_err());
        assert!(validate_sample_rate(MAX_SAMPLE_RATE + 1).is_err());
        assert!(validate_sample_rate(44100).is_ok());
        assert!(validate_volume(f32::NAN).is_err());
        assert!(validate_volume(0.5).is_ok());
        assert!(validate_frequency("tone", 0.0).is_err());
        assert!(validate_frequency("tone", f64::NAN).is_err());
        assert!(validate_frequency("tone", 440.0).is_ok());
    }

    #[test]
    fn test_factory_override_allowed() {
        let mut board = BoardConfig::default();
        board.sounds.push(SoundPreset::new("bell", "Deep Bell", 250.0, 900));
        assert!(validate_board(&board).is_ok());
    }
}
