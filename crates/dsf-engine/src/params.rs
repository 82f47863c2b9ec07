//! Control-rate parameter mapping.
//!
//! Once per block the eight raw control readings are folded into four
//! normalized parameters. Knob and CV contributions are summed and then
//! saturated; nothing here can fail.
//!
//! | Parameter | Formula | Range |
//! |-----------|---------|-------|
//! | `cutoff` | `clamp(fm_knob + fm_cv1 + fm_cv2)` | 0–1 |
//! | `resonance` | `clamp(res_knob + res_cv)` | 0–1 |
//! | `spread` | `2 · clamp(spread_knob + spread_cv) − 1` | −1–1 |
//! | `hp_cutoff` | `clamp(hp_cv)² · CUTOFF_RANGE` | 0–20 kHz |

use dsf_core::{clamp_unit, unipolar_to_bipolar};
use dsf_platform::{ControlId, PlatformController, patch_sm};

use crate::CUTOFF_RANGE;

/// The eight normalized control readings of one block.
///
/// Field order follows the card's ADC channels (`CV_1..CV_8`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInputs {
    /// `CV_1`: spread knob.
    pub spread_knob: f32,
    /// `CV_2`: resonance knob.
    pub resonance_knob: f32,
    /// `CV_3`: cutoff FM knob.
    pub cutoff_knob: f32,
    /// `CV_4`: highpass cutoff CV.
    pub highpass_cv: f32,
    /// `CV_5`: first cutoff FM CV.
    pub cutoff_cv1: f32,
    /// `CV_6`: second cutoff FM CV.
    pub cutoff_cv2: f32,
    /// `CV_7`: resonance CV.
    pub resonance_cv: f32,
    /// `CV_8`: spread CV.
    pub spread_cv: f32,
}

impl ControlInputs {
    /// Builds inputs from eight readings in `CV_1..CV_8` order.
    pub const fn from_array(cv: [f32; 8]) -> Self {
        Self {
            spread_knob: cv[0],
            resonance_knob: cv[1],
            cutoff_knob: cv[2],
            highpass_cv: cv[3],
            cutoff_cv1: cv[4],
            cutoff_cv2: cv[5],
            resonance_cv: cv[6],
            spread_cv: cv[7],
        }
    }

    /// Returns the readings in `CV_1..CV_8` order.
    pub const fn to_array(&self) -> [f32; 8] {
        [
            self.spread_knob,
            self.resonance_knob,
            self.cutoff_knob,
            self.highpass_cv,
            self.cutoff_cv1,
            self.cutoff_cv2,
            self.resonance_cv,
            self.spread_cv,
        ]
    }

    /// Reads all eight analog inputs from a controller.
    ///
    /// A control the controller does not recognize reads as 0.0.
    pub fn from_controller<P: PlatformController + ?Sized>(controller: &P) -> Self {
        let read = |id: ControlId| controller.read_control(id).map_or(0.0, |state| state.value);
        Self::from_array(patch_sm::CV_INPUTS.map(read))
    }
}

/// Parameters derived from one block's [`ControlInputs`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedParameters {
    /// Normalized cutoff, 0–1.
    pub cutoff: f32,
    /// Normalized resonance, 0–1.
    pub resonance: f32,
    /// Bipolar spread, −1–1.
    pub spread: f32,
    /// Highpass pre-filter cutoff in Hz, 0–[`CUTOFF_RANGE`].
    pub hp_cutoff: f32,
}

/// Folds raw control readings into clamped parameters.
///
/// # Example
///
/// ```rust
/// use dsf_engine::{ControlInputs, map_controls};
///
/// let inputs = ControlInputs {
///     cutoff_knob: 0.7,
///     cutoff_cv1: 0.6,
///     spread_knob: 0.5,
///     ..Default::default()
/// };
/// let params = map_controls(&inputs);
/// assert_eq!(params.cutoff, 1.0);
/// assert_eq!(params.spread, 0.0);
/// ```
pub fn map_controls(inputs: &ControlInputs) -> DerivedParameters {
    let cutoff = clamp_unit(inputs.cutoff_knob + inputs.cutoff_cv1 + inputs.cutoff_cv2);
    let resonance = clamp_unit(inputs.resonance_knob + inputs.resonance_cv);
    let spread = unipolar_to_bipolar(clamp_unit(inputs.spread_knob + inputs.spread_cv));

    // Quadratic taper; squaring a unit value stays in the unit range.
    let hp = clamp_unit(inputs.highpass_cv);
    let hp_cutoff = hp * hp * CUTOFF_RANGE;

    DerivedParameters {
        cutoff,
        resonance,
        spread,
        hp_cutoff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsf_platform::VirtualPanel;

    #[test]
    fn test_cutoff_sums_three_sources() {
        let inputs = ControlInputs {
            cutoff_knob: 0.2,
            cutoff_cv1: 0.1,
            cutoff_cv2: 0.3,
            ..Default::default()
        };
        assert!((map_controls(&inputs).cutoff - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_cutoff_saturates() {
        let inputs = ControlInputs {
            cutoff_knob: 0.5,
            cutoff_cv1: 0.5,
            cutoff_cv2: 0.5,
            ..Default::default()
        };
        assert_eq!(map_controls(&inputs).cutoff, 1.0);
    }

    #[test]
    fn test_resonance_saturates() {
        let inputs = ControlInputs {
            resonance_knob: 0.8,
            resonance_cv: 0.8,
            ..Default::default()
        };
        assert_eq!(map_controls(&inputs).resonance, 1.0);
    }

    #[test]
    fn test_negative_inputs_saturate_low() {
        let inputs = ControlInputs {
            cutoff_knob: -0.4,
            resonance_cv: -2.0,
            spread_cv: -1.0,
            highpass_cv: -0.5,
            ..Default::default()
        };
        let params = map_controls(&inputs);
        assert_eq!(params.cutoff, 0.0);
        assert_eq!(params.resonance, 0.0);
        assert_eq!(params.spread, -1.0);
        assert_eq!(params.hp_cutoff, 0.0);
    }

    #[test]
    fn test_spread_remap_boundaries() {
        let spread = |raw: f32| {
            map_controls(&ControlInputs {
                spread_knob: raw,
                ..Default::default()
            })
            .spread
        };
        assert_eq!(spread(0.0), -1.0);
        assert_eq!(spread(0.5), 0.0);
        assert_eq!(spread(1.0), 1.0);
    }

    #[test]
    fn test_spread_cv_adds_to_knob() {
        let inputs = ControlInputs {
            spread_knob: 0.25,
            spread_cv: 0.5,
            ..Default::default()
        };
        assert!((map_controls(&inputs).spread - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_highpass_quadratic_taper() {
        let hp = |cv: f32| {
            map_controls(&ControlInputs {
                highpass_cv: cv,
                ..Default::default()
            })
            .hp_cutoff
        };
        assert_eq!(hp(0.0), 0.0);
        assert_eq!(hp(0.5), 5000.0);
        assert_eq!(hp(1.0), CUTOFF_RANGE);
    }

    #[test]
    fn test_array_order_matches_adc_channels() {
        let cv = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        let inputs = ControlInputs::from_array(cv);
        assert_eq!(inputs.spread_knob, 0.1);
        assert_eq!(inputs.highpass_cv, 0.4);
        assert_eq!(inputs.spread_cv, 0.8);
        assert_eq!(inputs.to_array(), cv);
    }

    #[test]
    fn test_from_controller() {
        let mut panel = VirtualPanel::new();
        panel.set_all_cv([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);

        let inputs = ControlInputs::from_controller(&panel);
        assert_eq!(inputs.cutoff_knob, 0.3);
        assert_eq!(inputs.cutoff_cv2, 0.6);
        assert_eq!(inputs.resonance_cv, 0.7);
    }
}
