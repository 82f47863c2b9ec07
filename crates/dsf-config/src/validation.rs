//! Preset validation.
//!
//! The engine saturates whatever it is given, so nothing here is needed for
//! safe audio. Validation exists to catch preset files that would not mean
//! what their author intended: a knob at 1.4, a mode that does not exist,
//! a block size the card cannot run.
//!
//! # Example
//!
//! ```rust
//! use dsf_config::{Preset, ValidationError, validate_preset};
//!
//! let mut preset = Preset::new("Bad");
//! preset.mode = 9;
//! assert_eq!(validate_preset(&preset), Err(ValidationError::InvalidMode(9)));
//! ```

use dsf_engine::Mode;
use thiserror::Error;

use crate::preset::{PanelControls, Preset};

/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8_000;

/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Largest accepted block size in samples.
pub const MAX_BLOCK_SIZE: usize = 4096;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Control position is NaN or infinite.
    #[error("control '{control}' is not a finite number")]
    NonFinite {
        /// Name of the control.
        control: String,
    },

    /// Control position outside `[0, 1]`.
    #[error("control '{control}' value {value} out of range [0, 1]")]
    OutOfRange {
        /// Name of the control.
        control: String,
        /// The value that was out of range.
        value: f32,
    },

    /// CV channel number outside `1..=8`.
    #[error("unknown CV channel {0} (expected 1-8)")]
    UnknownChannel(usize),

    /// Mode index past the last mode.
    #[error("mode {0} out of range (0-4)")]
    InvalidMode(usize),

    /// Block size zero or above [`MAX_BLOCK_SIZE`].
    #[error("block size {0} out of range [1, {max}]", max = MAX_BLOCK_SIZE)]
    InvalidBlockSize(usize),

    /// Sample rate outside [`MIN_SAMPLE_RATE`]..=[`MAX_SAMPLE_RATE`].
    #[error("sample rate {0} Hz out of range [{min}, {max}]", min = MIN_SAMPLE_RATE, max = MAX_SAMPLE_RATE)]
    InvalidSampleRate(u32),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn check_position(control: &str, value: f32) -> ValidationResult<()> {
    if !value.is_finite() {
        Err(ValidationError::NonFinite {
            control: control.to_string(),
        })
    } else if !(0.0..=1.0).contains(&value) {
        Err(ValidationError::OutOfRange {
            control: control.to_string(),
            value,
        })
    } else {
        Ok(())
    }
}

fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

/// Validate all eight control positions.
pub fn validate_controls(controls: &PanelControls) -> ValidationResult<()> {
    let errors = PanelControls::NAMES
        .iter()
        .zip(controls.to_array())
        .filter_map(|(name, value)| check_position(name, value).err())
        .collect();
    collect(errors)
}

/// Validate a whole preset, reporting every problem found.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&preset.sample_rate) {
        errors.push(ValidationError::InvalidSampleRate(preset.sample_rate));
    }
    if preset.block_size == 0 || preset.block_size > MAX_BLOCK_SIZE {
        errors.push(ValidationError::InvalidBlockSize(preset.block_size));
    }
    if preset.mode >= Mode::COUNT {
        errors.push(ValidationError::InvalidMode(preset.mode));
    }
    match validate_controls(&preset.controls) {
        Ok(()) => {}
        Err(ValidationError::Multiple(nested)) => errors.extend(nested),
        Err(e) => errors.push(e),
    }

    collect(errors)
}
