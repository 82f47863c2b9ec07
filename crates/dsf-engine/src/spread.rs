//! Stereo spread: four detuned frequency images from one cutoff.
//!
//! The squared cutoff is scaled by two exponential bases raised to
//! opposite-signed powers of the spread, one pair per channel:
//!
//! ```text
//! c² = cutoff²
//! left1  = clamp(B1^(−spread) · c²) · R      right1 = clamp(B1^(+spread) · c²) · R
//! left2  = clamp(B2^(+spread) · c²) · R      right2 = clamp(B2^(−spread) · c²) · R
//! ```
//!
//! with `B1 = 4.0`, `B2 = 1.7` and `R = CUTOFF_RANGE`. Turning the spread
//! up pushes the first-base images apart across channels by up to two
//! octaves each way, while the second-base images move the other way by a
//! smaller ratio, so each channel ends up with an asymmetric, formant-like
//! pair. At `spread = 0` all four images coincide at `c² · R`.
//!
//! The clamp to `[0, 1]` happens before scaling to Hz. An image whose
//! exponential term overshoots 1 therefore pins at exactly `R`.

use dsf_core::clamp_unit;
use libm::powf;

use crate::CUTOFF_RANGE;

/// Exponential base of the first (wide) image pair.
pub const SPREAD_BASE_1: f32 = 4.0;

/// Exponential base of the second (narrow) image pair.
pub const SPREAD_BASE_2: f32 = 1.7;

/// Center frequencies in Hz of the four band filters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrequencyImages {
    /// Left channel, first base, negative exponent.
    pub left1: f32,
    /// Left channel, second base, positive exponent.
    pub left2: f32,
    /// Right channel, first base, positive exponent.
    pub right1: f32,
    /// Right channel, second base, negative exponent.
    pub right2: f32,
}

impl FrequencyImages {
    /// Returns the two left-channel images `[left1, left2]`.
    pub const fn left(&self) -> [f32; 2] {
        [self.left1, self.left2]
    }

    /// Returns the two right-channel images `[right1, right2]`.
    pub const fn right(&self) -> [f32; 2] {
        [self.right1, self.right2]
    }
}

#[inline]
fn image(base: f32, exponent: f32, cutoff_squared: f32) -> f32 {
    clamp_unit(powf(base, exponent) * cutoff_squared) * CUTOFF_RANGE
}

/// Derives the four frequency images from a normalized cutoff and a
/// bipolar spread.
///
/// # Example
///
/// ```rust
/// use dsf_engine::spread_images;
///
/// let images = spread_images(0.5, 0.0);
/// assert_eq!(images.left1, 5000.0);
/// assert_eq!(images.right2, 5000.0);
/// ```
pub fn spread_images(cutoff: f32, spread: f32) -> FrequencyImages {
    let cutoff_squared = cutoff * cutoff;
    FrequencyImages {
        left1: image(SPREAD_BASE_1, -spread, cutoff_squared),
        left2: image(SPREAD_BASE_2, spread, cutoff_squared),
        right1: image(SPREAD_BASE_1, spread, cutoff_squared),
        right2: image(SPREAD_BASE_2, -spread, cutoff_squared),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(images: &FrequencyImages) -> [f32; 4] {
        [images.left1, images.left2, images.right1, images.right2]
    }

    #[test]
    fn test_neutral_spread_collapses() {
        let images = spread_images(0.5, 0.0);
        for hz in all(&images) {
            assert_eq!(hz, 5000.0);
        }
    }

    #[test]
    fn test_zero_cutoff_is_zero() {
        for spread in [-1.0, 0.0, 1.0] {
            for hz in all(&spread_images(0.0, spread)) {
                assert_eq!(hz, 0.0);
            }
        }
    }

    #[test]
    fn test_full_spread_ratios() {
        // cutoff² = 0.04 keeps every image below the clamp.
        let images = spread_images(0.2, 1.0);
        let center = 0.04 * CUTOFF_RANGE;
        assert!((images.left1 - center / 4.0).abs() < 1e-2);
        assert!((images.right1 - center * 4.0).abs() < 1e-2);
        assert!((images.left2 - center * 1.7).abs() < 1e-2);
        assert!((images.right2 - center / 1.7).abs() < 1e-2);
    }

    #[test]
    fn test_spread_sign_mirrors_channels() {
        let up = spread_images(0.3, 0.6);
        let down = spread_images(0.3, -0.6);
        assert!((up.left1 - down.right1).abs() < 1e-3);
        assert!((up.left2 - down.right2).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_before_scaling() {
        // 4^1 · 0.81 = 3.24 overshoots; the image pins at the range ceiling.
        let images = spread_images(0.9, 1.0);
        assert_eq!(images.right1, CUTOFF_RANGE);
        assert_eq!(images.left2, CUTOFF_RANGE);
        assert!(images.left1 < CUTOFF_RANGE);
        assert!(images.right2 < CUTOFF_RANGE);
    }

    #[test]
    fn test_full_cutoff_neutral_is_range() {
        for hz in all(&spread_images(1.0, 0.0)) {
            assert_eq!(hz, CUTOFF_RANGE);
        }
    }

    #[test]
    fn test_channel_accessors() {
        let images = spread_images(0.4, 0.3);
        assert_eq!(images.left(), [images.left1, images.left2]);
        assert_eq!(images.right(), [images.right1, images.right2]);
    }
}
