//! Linear PCM sample conversion.

/// Scale applied to negative samples: `i16::MIN` magnitude.
const NEGATIVE_SCALE: f64 = 32768.0;

/// Scale applied to zero and positive samples: `i16::MAX`.
const POSITIVE_SCALE: f64 = 32767.0;

/// Quantize a float sample to signed 16-bit PCM.
///
/// The input is clamped to `[-1.0, 1.0]` and then scaled asymmetrically,
/// by 32768 below zero and by 32767 at or above zero, so the full signed
/// range `[-32768, 32767]` is reachable without wrapping. The scaled value is
/// truncated toward zero. NaN quantizes to 0.
///
/// # Example
///
/// ```rust
/// use soundboard_core::quantize_i16;
///
/// assert_eq!(quantize_i16(-1.0), i16::MIN);
/// assert_eq!(quantize_i16(1.0), i16::MAX);
/// assert_eq!(quantize_i16(0.5), 16383);
/// assert_eq!(quantize_i16(-0.5), -16384);
/// ```
#[inline]
pub fn quantize_i16(sample: f32) -> i16 {
    let s = f64::from(sample.clamp(-1.0, 1.0));
    if s < 0.0 {
        (s * NEGATIVE_SCALE) as i16
    } else {
        (s * POSITIVE_SCALE) as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale_endpoints() {
        assert_eq!(quantize_i16(1.0), 32767);
        assert_eq!(quantize_i16(-1.0), -32768);
        assert_eq!(quantize_i16(0.0), 0);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(quantize_i16(3.0), 32767);
        assert_eq!(quantize_i16(-7.5), -32768);
        assert_eq!(quantize_i16(f32::INFINITY), 32767);
        assert_eq!(quantize_i16(f32::NEG_INFINITY), -32768);
    }

    #[test]
    fn test_nan_is_silence() {
        assert_eq!(quantize_i16(f32::NAN), 0);
    }

    #[test]
    fn test_asymmetric_scaling() {
        // A single scale factor would map both halves to the same magnitude.
        assert_eq!(quantize_i16(0.5), 16383);
        assert_eq!(quantize_i16(-0.5), -16384);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.75 * 32767 = 24575.25
        assert_eq!(quantize_i16(0.75), 24575);
        // -0.75 * 32768 = -24576 exactly; a hair less negative truncates up
        assert_eq!(quantize_i16(-0.75), -24576);
        assert_eq!(quantize_i16(-0.000_01), 0);
    }
}
