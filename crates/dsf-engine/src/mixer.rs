//! Per-sample mixdown of each channel's filter pair.

use dsf_core::SvfTaps;

use crate::filter_bank::BankTaps;
use crate::mode::Mode;

/// Averages the mode-selected tap of two band filters.
#[inline]
pub fn mix_pair(pair: &[SvfTaps; 2], mode: Mode) -> f32 {
    let tap = mode.tap();
    0.5 * (pair[0].tap(tap) + pair[1].tap(tap))
}

/// Mixes one bank step down to a stereo `(left, right)` frame.
#[inline]
pub fn mix(taps: &BankTaps, mode: Mode) -> (f32, f32) {
    (mix_pair(&taps.left, mode), mix_pair(&taps.right, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct(offset: f32) -> SvfTaps {
        SvfTaps {
            low: 1.0 + offset,
            band: 2.0 + offset,
            high: 3.0 + offset,
            notch: 4.0 + offset,
            peak: 5.0 + offset,
        }
    }

    #[test]
    fn test_mode_reads_matching_tap() {
        let pair = [distinct(0.0), distinct(10.0)];
        // Average of (n, n + 10) is n + 5.
        let expected = [6.0, 7.0, 8.0, 9.0, 10.0];
        for (mode, want) in Mode::ALL.into_iter().zip(expected) {
            assert_eq!(mix_pair(&pair, mode), want, "mode {}", mode.name());
        }
    }

    #[test]
    fn test_stereo_mix_keeps_channels_apart() {
        let taps = BankTaps {
            left: [distinct(0.0), distinct(0.0)],
            right: [distinct(100.0), distinct(100.0)],
        };
        assert_eq!(mix(&taps, Mode::Notch), (4.0, 104.0));
    }

    #[test]
    fn test_silence_mixes_to_silence() {
        for mode in Mode::ALL {
            assert_eq!(mix(&BankTaps::default(), mode), (0.0, 0.0));
        }
    }
}
