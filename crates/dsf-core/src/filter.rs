//! Resonant filter capability trait.
//!
//! [`ResonantFilter`] is the seam between the filter bank and the filter
//! primitive. The bank only needs to retune a filter once per block and
//! advance it once per sample; everything else about the filter's topology
//! stays behind this trait.
//!
//! ## Design Decisions
//!
//! - **All taps at once**: `process` returns every response in [`SvfTaps`].
//!   Tap selection belongs to the caller, so switching output modes never
//!   touches filter state.
//!
//! - **Static dispatch**: the bank is generic over the filter type. Tests
//!   substitute stub filters with known tap values.
//!
//! - **No allocations**: every method is callable from the audio callback.

use crate::svf::SvfTaps;

/// A tunable second-order filter exposing five response taps.
///
/// # Example
///
/// ```rust
/// use dsf_core::{ResonantFilter, SvfTaps};
///
/// /// Returns the input on every tap.
/// struct Wire;
///
/// impl ResonantFilter for Wire {
///     fn new(_sample_rate: f32) -> Self {
///         Wire
///     }
///     fn set_frequency(&mut self, _hz: f32) {}
///     fn set_resonance(&mut self, _resonance: f32) {}
///     fn process(&mut self, input: f32) -> SvfTaps {
///         SvfTaps { low: input, band: input, high: input, notch: input, peak: input }
///     }
/// }
///
/// let mut wire = Wire::new(48000.0);
/// assert_eq!(wire.process(0.25).high, 0.25);
/// ```
pub trait ResonantFilter {
    /// Create a filter running at `sample_rate` with zeroed state.
    ///
    /// Filters are created once at startup; there is no way to change the
    /// sample rate of a running filter.
    fn new(sample_rate: f32) -> Self
    where
        Self: Sized;

    /// Set the cutoff/center frequency in Hz.
    fn set_frequency(&mut self, hz: f32);

    /// Set the normalized resonance in `[0, 1]`.
    fn set_resonance(&mut self, resonance: f32);

    /// Advance by one sample and return every response tap.
    fn process(&mut self, input: f32) -> SvfTaps;
}
