//! Platform-specific configuration paths.
//!
//! - Linux: `~/.config/soundboard/soundboard.toml`
//! - macOS: `~/Library/Application Support/soundboard/soundboard.toml`
//! - Windows: `%APPDATA%\soundboard\soundboard.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "soundboard";

/// File name of the board configuration.
pub const CONFIG_FILE_NAME: &str = "soundboard.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user's board configuration file.
pub fn default_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_layout() {
        let path = default_config_path();
        assert!(path.ends_with("soundboard/soundboard.toml"));
        assert_eq!(path.parent(), Some(user_config_dir().as_path()));
    }
}
