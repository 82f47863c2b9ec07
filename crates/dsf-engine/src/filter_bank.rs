//! Filter bank: two highpass conditioners feeding four resonant filters.
//!
//! ```text
//!            ┌─► band L1 ─┐
//! in L ─► HP L ┤            ├─► taps L
//!            └─► band L2 ─┘
//!            ┌─► band R1 ─┐
//! in R ─► HP R ┤            ├─► taps R
//!            └─► band R2 ─┘
//! ```
//!
//! Both band filters of a channel see the same high-passed input and differ
//! only in center frequency. Coefficients change once per block in
//! [`FilterBank::set_coefficients`]; filter state advances once per sample
//! in [`FilterBank::process`] and is never cleared while the engine runs.

use dsf_core::{ResonantFilter, StateVariableFilter, SvfTaps};

use crate::params::DerivedParameters;
use crate::spread::FrequencyImages;

/// Resonance pushed into the highpass conditioners.
pub const HIGHPASS_RESONANCE: f32 = 0.0;

/// Taps of all four band filters after one sample step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BankTaps {
    /// Left channel band filters `[L1, L2]`.
    pub left: [SvfTaps; 2],
    /// Right channel band filters `[R1, R2]`.
    pub right: [SvfTaps; 2],
}

/// Six persistent filter instances making up the stereo spread bank.
#[derive(Debug, Clone)]
pub struct FilterBank<F: ResonantFilter = StateVariableFilter> {
    left: [F; 2],
    right: [F; 2],
    highpass_left: F,
    highpass_right: F,
}

impl<F: ResonantFilter> FilterBank<F> {
    /// Creates all six filters for `sample_rate` with zeroed state.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            left: [F::new(sample_rate), F::new(sample_rate)],
            right: [F::new(sample_rate), F::new(sample_rate)],
            highpass_left: F::new(sample_rate),
            highpass_right: F::new(sample_rate),
        }
    }

    /// Retunes the bank for the coming block.
    ///
    /// Band filters take the frequency images and the shared resonance;
    /// the highpass conditioners take `hp_cutoff` with zero resonance.
    pub fn set_coefficients(&mut self, images: &FrequencyImages, params: &DerivedParameters) {
        for (filter, hz) in self.left.iter_mut().zip(images.left()) {
            filter.set_frequency(hz);
            filter.set_resonance(params.resonance);
        }
        for (filter, hz) in self.right.iter_mut().zip(images.right()) {
            filter.set_frequency(hz);
            filter.set_resonance(params.resonance);
        }
        for highpass in [&mut self.highpass_left, &mut self.highpass_right] {
            highpass.set_frequency(params.hp_cutoff);
            highpass.set_resonance(HIGHPASS_RESONANCE);
        }
    }

    /// Advances every filter by one sample.
    #[inline]
    pub fn process(&mut self, left: f32, right: f32) -> BankTaps {
        let conditioned_left = self.highpass_left.process(left).high;
        let conditioned_right = self.highpass_right.process(right).high;

        BankTaps {
            left: [
                self.left[0].process(conditioned_left),
                self.left[1].process(conditioned_left),
            ],
            right: [
                self.right[0].process(conditioned_right),
                self.right[1].process(conditioned_right),
            ],
        }
    }

    /// Left band filters `[L1, L2]`.
    pub fn left(&self) -> &[F; 2] {
        &self.left
    }

    /// Right band filters `[R1, R2]`.
    pub fn right(&self) -> &[F; 2] {
        &self.right
    }

    /// Highpass conditioners `(left, right)`.
    pub fn highpass(&self) -> (&F, &F) {
        (&self.highpass_left, &self.highpass_right)
    }
}
