//! Board configuration file format and operations.

use serde::{Deserialize, Serialize};
use soundboard_core::DEFAULT_SAMPLE_RATE;
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_presets::factory_sounds;
use crate::paths::default_config_path;
use crate::sound::SoundPreset;
use crate::validation::validate_board;

/// Playback volume used when the config does not set one.
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Board-wide settings and user-defined sounds.
///
/// # TOML Format
///
/// ```toml
/// sample_rate = 44100
/// volume = 0.8
/// output_device = "USB Audio"
/// include_factory = true
///
/// [[sounds]]
/// id = "beep"
/// label = "Beep"
/// frequency_hz = 880.0
/// duration_ms = 150
/// ```
///
/// Every key is optional; an empty file is the default board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardConfig {
    /// Synthesis and container sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Playback volume in `[0, 1]`.
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Output device name filter (system default if `None`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_device: Option<String>,

    /// Whether the factory sounds appear on the board.
    #[serde(default = "default_include_factory")]
    pub include_factory: bool,

    /// User-defined sounds; an id shared with a factory sound replaces it.
    #[serde(default)]
    pub sounds: Vec<SoundPreset>,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_include_factory() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            volume: DEFAULT_VOLUME,
            output_device: None,
            include_factory: true,
            sounds: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Set the volume.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Add a user sound.
    pub fn with_sound(mut self, sound: SoundPreset) -> Self {
        self.sounds.push(sound);
        self
    }

    /// Load and validate a board config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), sounds = config.sounds.len(), "board config loaded");
        Ok(config)
    }

    /// Load the config at `path`, or the user's default config file.
    ///
    /// An explicit `path` must exist. Without one, a missing default file
    /// yields [`BoardConfig::default`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = default_config_path();
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            tracing::debug!(path = %default_path.display(), "no board config, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a board config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board(self)?;
        Ok(())
    }

    /// Every sound on the board, in display order.
    ///
    /// Factory sounds come first (unless disabled), with any user sound of the
    /// same id substituted in place; remaining user sounds follow.
    pub fn sounds(&self) -> Vec<SoundPreset> {
        let mut board: Vec<SoundPreset> = if self.include_factory {
            factory_sounds()
                .into_iter()
                .map(|factory| self.user_sound(&factory.id).cloned().unwrap_or(factory))
                .collect()
        } else {
            Vec::new()
        };

        for sound in &self.sounds {
            if !board.iter().any(|s| s.id.eq_ignore_ascii_case(&sound.id)) {
                board.push(sound.clone());
            }
        }
        board
    }

    /// Find a sound on the board by id, falling back to its label.
    ///
    /// Both matches are case-insensitive.
    pub fn find_sound(&self, name: &str) -> Option<SoundPreset> {
        let sounds = self.sounds();
        let by_id = sounds.iter().find(|s| s.id.eq_ignore_ascii_case(name));
        by_id.or_else(|| sounds.iter().find(|s| s.matches(name))).cloned()
    }

    /// Like [`BoardConfig::find_sound`], but an unknown name is an error.
    pub fn require_sound(&self, name: &str) -> Result<SoundPreset, ConfigError> {
        self.find_sound(name)
            .ok_or_else(|| ConfigError::SoundNotFound(name.to_string()))
    }

    fn user_sound(&self, id: &str) -> Option<&SoundPreset> {
        self.sounds.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }
}
