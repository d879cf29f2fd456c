//! A single button on the board.

use serde::{Deserialize, Serialize};
use soundboard_core::ToneRequest;

/// A named tone behind one board button.
///
/// # TOML Format
///
/// ```toml
/// [[sounds]]
/// id = "bell"
/// label = "Bell"
/// frequency_hz = 1000.0
/// duration_ms = 500
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundPreset {
    /// Stable identifier used on the command line.
    pub id: String,

    /// Button caption.
    pub label: String,

    /// Tone pitch in Hz.
    pub frequency_hz: f64,

    /// Tone length in milliseconds.
    pub duration_ms: u32,
}

impl SoundPreset {
    /// Create a sound preset.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        frequency_hz: f64,
        duration_ms: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            frequency_hz,
            duration_ms,
        }
    }

    /// The tone this button plays.
    pub fn request(&self) -> ToneRequest {
        ToneRequest::new(self.frequency_hz, self.duration_ms)
    }

    /// Case-insensitive match against the id or the label.
    pub fn matches(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name) || self.label.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_tone() {
        let sound = SoundPreset::new("drum", "Drum", 150.0, 300);
        assert_eq!(sound.request(), ToneRequest::new(150.0, 300));
    }

    #[test]
    fn test_sound_table_in_board_toml() {
        let board: crate::BoardConfig = toml::from_str(
            r#"
[[sounds]]
id = "tada"
label = "Tada"
frequency_hz = 523.0
duration_ms = 600
"#,
        )
        .unwrap();
        assert_eq!(board.sounds, [SoundPreset::new("tada", "Tada", 523.0, 600)]);
    }

    #[test]
    fn test_sound_table_missing_field() {
        let result = crate::BoardConfig::from_toml("[[sounds]]\nid = \"x\"\nlabel = \"X\"\n");
        assert!(matches!(result, Err(crate::ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_matches_id_or_label() {
        let sound = SoundPreset::new("airhorn", "Air Horn", 800.0, 600);
        assert!(sound.matches("AIRHORN"));
        assert!(sound.matches("air horn"));
        assert!(!sound.matches("horn"));
    }
}
