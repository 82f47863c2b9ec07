//! DSF Engine - the stereo dual spread filter
//!
//! Each channel runs its input through a highpass conditioner and then two
//! resonant filters tuned to detuned "images" of one cutoff. The images
//! move apart in opposite directions across the two channels as the spread
//! control turns, which widens the stereo field. A button cycles the output
//! between the low-pass, band-pass, high-pass, notch and peak taps.
//!
//! # Pipeline
//!
//! | Stage | Rate | Module |
//! |-------|------|--------|
//! | Control mapping | per block | [`params`] |
//! | Frequency images | per block | [`spread`] |
//! | Filter retune | per block | [`filter_bank`] |
//! | Mode selection | per block | [`mode`] |
//! | Filtering | per sample | [`filter_bank`] |
//! | Mixdown | per sample | [`mixer`] |
//!
//! [`DsfEngine`] owns all persistent state and runs the pipeline. It is
//! driven either with explicit [`ControlInputs`] via
//! [`DsfEngine::process_block`], or against any
//! [`PlatformController`](dsf_platform::PlatformController) via
//! [`DsfEngine::run_block`].
//!
//! # Logging
//!
//! With the `tracing` feature enabled the engine logs its configuration at
//! `info` on construction and each mode change at `debug`. Nothing is logged
//! per sample.
//!
//! # no_std Support
//!
//! ```toml
//! [dependencies]
//! dsf-engine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod filter_bank;
pub mod mixer;
pub mod mode;
pub mod params;
pub mod spread;

/// Full-scale filter frequency in Hz; a normalized cutoff of 1.0 maps here.
pub const CUTOFF_RANGE: f32 = 20_000.0;

pub use engine::{BlockReport, CV_MIRROR_VOLTS_PER_UNIT, DsfEngine, EngineConfig};
pub use filter_bank::{BankTaps, FilterBank};
pub use mixer::{mix, mix_pair};
pub use mode::{ButtonState, Mode, ModeSelector};
pub use params::{ControlInputs, DerivedParameters, map_controls};
pub use spread::{FrequencyImages, spread_images};
