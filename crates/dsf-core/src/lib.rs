//! DSF Core - filter primitives for the dual spread filter
//!
//! This crate provides the signal-processing building blocks the spread
//! filter engine consumes, designed for real-time processing with zero
//! allocation in the audio path.
//!
//! # Core Abstractions
//!
//! - [`ResonantFilter`] - Capability trait for a tunable multi-tap filter
//! - [`StateVariableFilter`] - TPT SVF with low/band/high/notch/peak taps
//! - [`SvfTaps`] / [`SvfOutput`] - Per-sample tap bundle and tap selector
//!
//! ## Utilities
//!
//! - Saturation: [`clamp`], [`clamp_unit`], [`unipolar_to_bipolar`]
//! - Denormal protection: [`flush_denormal`]
//! - Coefficient math: [`fast_tan`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! dsf-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Saturate, never reject**: out-of-range parameters are clamped

#![cfg_attr(not(feature = "std"), no_std)]

pub mod fast_math;
pub mod filter;
pub mod math;
pub mod svf;

// Re-export main types at crate root
pub use fast_math::fast_tan;
pub use filter::ResonantFilter;
pub use math::{clamp, clamp_unit, flush_denormal, unipolar_to_bipolar};
pub use svf::{
    MAX_FREQUENCY_RATIO, MIN_DAMPING, MIN_FREQUENCY, StateVariableFilter, SvfOutput, SvfTaps,
};
