//! Panel presets for the dual spread filter.
//!
//! A preset captures everything needed to reproduce a sound on the host:
//! the eight knob/CV positions, the starting output mode, the block size and
//! sample rate the card would run at, and whether the CV mirror is on.
//!
//! # Features
//!
//! - **Preset files**: Load and save panel presets as TOML
//! - **Validation**: Reject non-finite or out-of-range positions and settings
//! - **Factory presets**: Built-in starting points, always available
//!
//! # Example
//!
//! ```rust,no_run
//! use dsf_config::{PanelControls, Preset};
//!
//! let preset = Preset::load("wide.toml").unwrap();
//! preset.validate().unwrap();
//!
//! let mut custom = Preset::new("Dark").with_controls(PanelControls {
//!     cutoff_knob: 0.3,
//!     resonance_knob: 0.6,
//!     ..Default::default()
//! });
//! custom.cv_mirror = true;
//! custom.save("dark.toml").unwrap();
//! ```

mod error;
mod preset;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset, resolve_preset,
};
pub use preset::{PanelControls, Preset};
pub use validation::{ValidationError, ValidationResult, validate_controls, validate_preset};
