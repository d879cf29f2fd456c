//! Factory sounds bundled with the board.
//!
//! These six buttons are always available without a config file. User sounds
//! with the same id take precedence over them.

use crate::SoundPreset;

/// `(id, label, frequency_hz, duration_ms)` for each factory button.
static FACTORY_SOUNDS: &[(&str, &str, f64, u32)] = &[
    ("applause", "Applause", 400.0, 800),
    ("airhorn", "Airhorn", 800.0, 600),
    ("drum", "Drum", 150.0, 300),
    ("bell", "Bell", 1000.0, 500),
    ("laugh", "Laugh", 600.0, 700),
    ("tada", "Tada", 523.0, 600),
];

/// All factory sounds, in board order.
///
/// # Example
///
/// ```rust
/// use soundboard_config::factory_sounds;
///
/// for sound in factory_sounds() {
///     println!("{:<10} {:>6.1} Hz {:>4} ms", sound.label, sound.frequency_hz, sound.duration_ms);
/// }
/// ```
pub fn factory_sounds() -> Vec<SoundPreset> {
    FACTORY_SOUNDS
        .iter()
        .map(|&(id, label, freq, ms)| SoundPreset::new(id, label, freq, ms))
        .collect()
}

/// Get a factory sound by id or label (case-insensitive).
///
/// # Example
///
/// ```rust
/// use soundboard_config::get_factory_sound;
///
/// let bell = get_factory_sound("Bell").unwrap();
/// assert_eq!(bell.frequency_hz, 1000.0);
/// ```
pub fn get_factory_sound(name: &str) -> Option<SoundPreset> {
    factory_sounds().into_iter().find(|s| s.matches(name))
}

/// Check if a name refers to a factory sound (by id or label).
///
/// ```rust
/// use soundboard_config::is_factory_sound;
///
/// assert!(is_factory_sound("drum"));
/// assert!(is_factory_sound("DRUM"));
/// assert!(!is_factory_sound("kazoo"));
/// ```
pub fn is_factory_sound(name: &str) -> bool {
    get_factory_sound(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_sound;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<String> = factory_sounds().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["applause", "airhorn", "drum", "bell", "laugh", "tada"]);
    }

    #[test]
    fn test_all_factory_sounds_valid() {
        for sound in factory_sounds() {
            validate_sound(&sound).unwrap_or_else(|e| panic!("{}: {e}", sound.id));
        }
    }

    #[test]
    fn test_catalog_values() {
        let drum = get_factory_sound("drum").unwrap();
        assert_eq!(drum.frequency_hz, 150.0);
        assert_eq!(drum.duration_ms, 300);

        let tada = get_factory_sound("tada").unwrap();
        assert_eq!(tada.frequency_hz, 523.0);
        assert_eq!(tada.duration_ms, 600);
    }

    #[test]
    fn test_unknown_sound() {
        assert!(get_factory_sound("theremin").is_none());
    }
}
