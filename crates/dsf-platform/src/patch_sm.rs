//! Control map of the Patch SM voice card.
//!
//! The card exposes eight ADC channels (four panel knobs and four CV jacks
//! on the reference front panel), one push-button, one PWM-driven LED and
//! one DC-coupled CV output. The assignment below is fixed by the panel.
//!
//! | Control | Function |
//! |---------|----------|
//! | `CV_1` | spread knob |
//! | `CV_2` | resonance knob |
//! | `CV_3` | cutoff FM knob |
//! | `CV_4` | highpass CV |
//! | `CV_5`, `CV_6` | cutoff FM CVs |
//! | `CV_7` | resonance CV |
//! | `CV_8` | spread CV |

use crate::{ControlId, ControlType};

/// Spread knob.
pub const CV_1: ControlId = ControlId::analog(0);
/// Resonance knob.
pub const CV_2: ControlId = ControlId::analog(1);
/// Cutoff FM knob.
pub const CV_3: ControlId = ControlId::analog(2);
/// Highpass cutoff CV.
pub const CV_4: ControlId = ControlId::analog(3);
/// First cutoff FM CV.
pub const CV_5: ControlId = ControlId::analog(4);
/// Second cutoff FM CV.
pub const CV_6: ControlId = ControlId::analog(5);
/// Resonance CV.
pub const CV_7: ControlId = ControlId::analog(6);
/// Spread CV.
pub const CV_8: ControlId = ControlId::analog(7);

/// All eight analog inputs in ADC channel order.
pub const CV_INPUTS: [ControlId; 8] = [CV_1, CV_2, CV_3, CV_4, CV_5, CV_6, CV_7, CV_8];

/// Mode push-button.
pub const BUTTON: ControlId = ControlId::digital(0);

/// Front-panel LED.
pub const LED: ControlId = ControlId::output(0);

/// DC-coupled CV output.
pub const CV_OUT: ControlId = ControlId::output(1);

/// Full-scale voltage of the CV output DAC.
pub const CV_OUT_MAX_VOLTS: f32 = 5.0;

/// Native codec sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;

/// Audio block size the firmware runs at.
pub const DEFAULT_BLOCK_SIZE: usize = 4;

/// Total number of controls on the card.
pub const CONTROL_COUNT: usize = CV_INPUTS.len() + 3;

/// Returns the control ID at `index` in the card's enumeration order
/// (CV_1..CV_8, BUTTON, LED, CV_OUT).
pub fn control_id(index: usize) -> Option<ControlId> {
    match index {
        0..=7 => Some(CV_INPUTS[index]),
        8 => Some(BUTTON),
        9 => Some(LED),
        10 => Some(CV_OUT),
        _ => None,
    }
}

/// Returns the physical type of a control on the card.
///
/// The first four ADC channels sit behind panel knobs, the last four behind
/// CV jacks.
pub fn control_type(id: ControlId) -> Option<ControlType> {
    match id {
        CV_1 | CV_2 | CV_3 => Some(ControlType::Knob),
        CV_4 | CV_5 | CV_6 | CV_7 | CV_8 => Some(ControlType::CvInput),
        BUTTON => Some(ControlType::Button),
        LED => Some(ControlType::Led),
        CV_OUT => Some(ControlType::CvOutput),
        _ => None,
    }
}

/// Converts a voltage to the normalized value written to [`CV_OUT`].
#[inline]
pub fn volts_to_cv_out(volts: f32) -> f32 {
    dsf_core::clamp_unit(volts / CV_OUT_MAX_VOLTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_enumeration() {
        for index in 0..CONTROL_COUNT {
            let id = control_id(index).unwrap();
            assert!(control_type(id).is_some(), "control {index} has no type");
        }
        assert_eq!(control_id(CONTROL_COUNT), None);
    }

    #[test]
    fn test_cv_inputs_are_analog() {
        for (i, id) in CV_INPUTS.iter().enumerate() {
            assert!(id.is_analog());
            assert_eq!(id.index() as usize, i);
        }
    }

    #[test]
    fn test_control_types() {
        assert_eq!(control_type(CV_1), Some(ControlType::Knob));
        assert_eq!(control_type(CV_4), Some(ControlType::CvInput));
        assert_eq!(control_type(BUTTON), Some(ControlType::Button));
        assert_eq!(control_type(LED), Some(ControlType::Led));
        assert_eq!(control_type(CV_OUT), Some(ControlType::CvOutput));
        assert_eq!(control_type(ControlId::analog(8)), None);
    }

    #[test]
    fn test_volts_to_cv_out() {
        assert_eq!(volts_to_cv_out(0.0), 0.0);
        assert!((volts_to_cv_out(3.5) - 0.7).abs() < 1e-6);
        assert_eq!(volts_to_cv_out(9.0), 1.0);
    }
}
