//! Mathematical utility functions for control-rate and audio-rate code.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Saturation
//!
//! Control inputs on a modular voice card routinely overshoot their nominal
//! range when a knob and one or more CV jacks are summed. Nothing in the
//! signal path rejects such values; they are saturated with [`clamp`] and
//! [`clamp_unit`].
//!
//! # Utilities
//!
//! - [`clamp`] / [`clamp_unit`] - NaN-absorbing value limiting
//! - [`unipolar_to_bipolar`] - Remap \[0, 1\] to \[-1, 1\]
//! - [`flush_denormal`] - Denormal protection for integrator state

/// Clamp a value to `[min, max]`.
///
/// Unlike [`f32::clamp`], this never panics when `min > max` and maps NaN to
/// `min`, so a noisy or uninitialised reading saturates instead of
/// propagating through the filter coefficients.
///
/// # Arguments
/// * `x` - Input value
/// * `min` - Lower bound
/// * `max` - Upper bound
///
/// # Example
/// ```rust
/// use dsf_core::clamp;
///
/// assert_eq!(clamp(1.7, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-0.2, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(f32::NAN, 0.0, 1.0), 0.0);
/// ```
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    x.max(min).min(max)
}

/// Clamp a value to the unit range `[0, 1]`.
#[inline]
pub fn clamp_unit(x: f32) -> f32 {
    clamp(x, 0.0, 1.0)
}

/// Remap a unipolar value in `[0, 1]` to the symmetric range `[-1, 1]`.
///
/// `0.0 → -1.0`, `0.5 → 0.0`, `1.0 → 1.0`.
#[inline]
pub fn unipolar_to_bipolar(x: f32) -> f32 {
    2.0 * x - 1.0
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Subnormal floats cause severe slowdowns on Cortex-M and x86 alike. Values
/// below 1e-20 are replaced with zero, leaving margin before the IEEE 754
/// subnormal range begins.
///
/// Reference: IEEE 754-2008, Section 3.4 (Subnormal numbers)
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
