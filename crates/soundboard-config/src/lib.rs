//! Sound catalog and board configuration for the sound board.
//!
//! This crate describes *what* the board can play and *how loud*: the named
//! tone presets behind each button, plus the board-wide settings loaded from a
//! TOML file.
//!
//! # Features
//!
//! - **Sound presets**: [`SoundPreset`] pairs a button label with a tone
//! - **Factory catalog**: six built-in sounds, always available
//! - **Board config**: [`BoardConfig`] with sample rate, volume, output device
//!   and user-defined sounds, loaded from and saved to TOML
//! - **Validation**: range checks for every loaded value
//! - **Paths**: platform-specific config location
//!
//! # Example
//!
//! ```rust
//! use soundboard_config::{BoardConfig, SoundPreset};
//!
//! let config = BoardConfig::from_toml(r#"
//! volume = 0.8
//!
//! [[sounds]]
//! id = "beep"
//! label = "Beep"
//! frequency_hz = 880.0
//! duration_ms = 150
//! "#).unwrap();
//!
//! let beep = config.find_sound("beep").unwrap();
//! let wav = beep.request().encode(config.sample_rate);
//! assert_eq!(wav.header().num_samples(), 6615);
//!
//! // Factory sounds stay reachable alongside user sounds
//! assert!(config.find_sound("airhorn").is_some());
//! ```

mod board;
mod error;
mod sound;

/// Platform-specific configuration paths.
pub mod paths;

/// Board and sound validation.
pub mod validation;

/// Factory sounds bundled with the library.
pub mod factory_presets;

pub use board::{BoardConfig, DEFAULT_VOLUME};
pub use error::ConfigError;
pub use factory_presets::{factory_sounds, get_factory_sound, is_factory_sound};
pub use paths::{CONFIG_FILE_NAME, default_config_path, user_config_dir};
pub use sound::SoundPreset;
pub use validation::{
    MAX_DURATION_MS, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, ValidationError, validate_board,
    validate_frequency, validate_sample_rate, validate_sound, validate_volume,
};
