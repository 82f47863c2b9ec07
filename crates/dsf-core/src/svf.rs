//! State Variable Filter with five simultaneous response taps.
//!
//! Every call to [`StateVariableFilter::process`] advances the filter by one
//! sample and returns all of its responses at once as [`SvfTaps`]: low-pass,
//! band-pass, high-pass, notch and peak. Which of them reaches the output is
//! decided by the caller, so one filter instance can feed several consumers
//! without being run twice.
//!
//! # Topology
//!
//! Implements the Topology-Preserving Transform (TPT) SVF after Zavalishin,
//! "The Art of VA Filter Design" (2012). The trapezoidal integrator
//! discretization preserves the analog prototype's response and keeps the
//! filter stable when the cutoff is swept once per block.
//!
//! # Resonance
//!
//! Resonance is normalized to `[0, 1]` like a panel knob. It maps to the
//! damping coefficient as `k = 2 · (1 − r^¼)`, so `r = 0` is a non-resonant
//! Q of 0.5 and `r → 1` approaches self-oscillation. Damping never drops
//! below [`MIN_DAMPING`].
//!
//! # Performance
//!
//! [`set_frequency`](StateVariableFilter::set_frequency) uses [`fast_tan`]
//! while the prewarp argument `π·f/sr` stays below [`FAST_TAN_MAX_ARG`]
//! (about 10 kHz at 48 kHz) and falls back to [`libm::tanf`] above, where
//! the Padé approximation loses accuracy.
//!
//! # Reference
//!
//! Zavalishin, "The Art of VA Filter Design", rev. 2.1.2 (2018), Chapter 3.

use core::f32::consts::PI;
use libm::{powf, tanf};

use crate::fast_math::fast_tan;
use crate::filter::ResonantFilter;
use crate::math::{clamp, clamp_unit, flush_denormal};

/// Lowest cutoff the filter will tune to, in Hz.
pub const MIN_FREQUENCY: f32 = 20.0;

/// Highest cutoff as a fraction of the sample rate.
pub const MAX_FREQUENCY_RATIO: f32 = 0.49;

/// Damping floor reached at full resonance (Q = 50).
pub const MIN_DAMPING: f32 = 0.02;

/// Largest prewarp argument handed to [`fast_tan`], in radians.
pub const FAST_TAN_MAX_ARG: f32 = 0.65;

/// Selects one response tap of a state variable filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SvfOutput {
    /// Low-pass response.
    #[default]
    Lowpass,
    /// Band-pass response, unity gain at the center frequency.
    Bandpass,
    /// High-pass response.
    Highpass,
    /// Notch (band-reject) response: `low + high`.
    Notch,
    /// Peak response: `low − high`.
    Peak,
}

/// All five responses of one SVF sample step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SvfTaps {
    /// Low-pass output.
    pub low: f32,
    /// Band-pass output.
    pub band: f32,
    /// High-pass output.
    pub high: f32,
    /// Notch output.
    pub notch: f32,
    /// Peak output.
    pub peak: f32,
}

impl SvfTaps {
    /// Returns the response selected by `output`.
    #[inline]
    pub fn tap(&self, output: SvfOutput) -> f32 {
        match output {
            SvfOutput::Lowpass => self.low,
            SvfOutput::Bandpass => self.band,
            SvfOutput::Highpass => self.high,
            SvfOutput::Notch => self.notch,
            SvfOutput::Peak => self.peak,
        }
    }
}

/// State Variable Filter (2-pole, 12 dB/oct).
///
/// ## Parameters
///
/// - `frequency`: center/cutoff frequency in Hz (20.0 to sr×0.49, default 1000.0)
/// - `resonance`: normalized resonance (0.0 to 1.0, default 0.0)
///
/// # Example
///
/// ```rust
/// use dsf_core::{StateVariableFilter, SvfOutput};
///
/// let mut svf = StateVariableFilter::new(48000.0);
/// svf.set_frequency(1000.0);
/// svf.set_resonance(0.3);
///
/// let taps = svf.process(0.5);
/// let low = taps.tap(SvfOutput::Lowpass);
/// # assert!(low.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct StateVariableFilter {
    // Integrator state
    ic1eq: f32,
    ic2eq: f32,

    // Coefficients
    g: f32,
    k: f32,
    a1: f32,

    // Parameters
    sample_rate: f32,
    frequency: f32,
    resonance: f32,
}

impl Default for StateVariableFilter {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl StateVariableFilter {
    /// Create a new SVF for the given sample rate.
    ///
    /// Initialises with frequency = 1000 Hz and resonance = 0 (Q = 0.5).
    pub fn new(sample_rate: f32) -> Self {
        let mut svf = Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            g: 0.0,
            k: 2.0,
            a1: 0.0,
            sample_rate,
            frequency: 1000.0,
            resonance: 0.0,
        };
        svf.update_coefficients();
        svf
    }

    /// Set the cutoff/center frequency in Hz.
    ///
    /// Clamped to `[MIN_FREQUENCY, sample_rate × MAX_FREQUENCY_RATIO]`.
    pub fn set_frequency(&mut self, hz: f32) {
        let max = (self.sample_rate * MAX_FREQUENCY_RATIO).max(MIN_FREQUENCY);
        self.frequency = clamp(hz, MIN_FREQUENCY, max);
        self.update_coefficients();
    }

    /// Current cutoff/center frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Set the normalized resonance (clamped to `[0, 1]`).
    pub fn set_resonance(&mut self, resonance: f32) {
        self.resonance = clamp_unit(resonance);
        self.update_coefficients();
    }

    /// Current normalized resonance.
    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    /// Sample rate the filter was created for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Clear the integrator state.
    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    fn update_coefficients(&mut self) {
        let arg = PI * self.frequency / self.sample_rate;
        self.g = if arg < FAST_TAN_MAX_ARG {
            fast_tan(arg)
        } else {
            tanf(arg)
        };
        self.k = (2.0 * (1.0 - powf(self.resonance, 0.25))).max(MIN_DAMPING);
        self.a1 = 1.0 / (1.0 + self.g * (self.g + self.k));
    }

    /// Advance the filter by one sample and return every response tap.
    pub fn process(&mut self, input: f32) -> SvfTaps {
        let v3 = input - self.ic2eq;
        let v1 = (self.g * v3 + self.ic1eq) * self.a1;
        let v2 = self.ic2eq + self.g * v1;

        self.ic1eq = flush_denormal(2.0 * v1 - self.ic1eq);
        self.ic2eq = flush_denormal(2.0 * v2 - self.ic2eq);

        let low = v2;
        let band = v1;
        let high = input - self.k * v1 - v2;

        SvfTaps {
            low,
            band,
            high,
            notch: low + high,
            peak: low - high,
        }
    }
}

impl ResonantFilter for StateVariableFilter {
    fn new(sample_rate: f32) -> Self {
        StateVariableFilter::new(sample_rate)
    }

    fn set_frequency(&mut self, hz: f32) {
        StateVariableFilter::set_frequency(self, hz);
    }

    fn set_resonance(&mut self, resonance: f32) {
        StateVariableFilter::set_resonance(self, resonance);
    }

    fn process(&mut self, input: f32) -> SvfTaps {
        StateVariableFilter::process(self, input)
    }
}
