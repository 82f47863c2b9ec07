//! Preset file format and operations.

use dsf_engine::{ControlInputs, EngineConfig, Mode};
use dsf_platform::patch_sm;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{ValidationError, ValidationResult, validate_preset};

/// The eight knob and CV positions of the panel, each normalized to 0–1.
///
/// Field names match [`ControlInputs`]. Any field missing from a TOML file
/// takes its value from [`PanelControls::default`], which is a centered
/// spread with the cutoff fully open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelControls {
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

impl Default for PanelControls {
    fn default() -> Self {
        Self {
            spread_knob: 0.5,
            resonance_knob: 0.0,
            cutoff_knob: 1.0,
            highpass_cv: 0.0,
            cutoff_cv1: 0.0,
            cutoff_cv2: 0.0,
            resonance_cv: 0.0,
            spread_cv: 0.0,
        }
    }
}

impl PanelControls {
    /// Control names in `CV_1..CV_8` order, as they appear in TOML.
    pub const NAMES: [&'static str; 8] = [
        "spread_knob",
        "resonance_knob",
        "cutoff_knob",
        "highpass_cv",
        "cutoff_cv1",
        "cutoff_cv2",
        "resonance_cv",
        "spread_cv",
    ];

    /// Returns the positions in `CV_1..CV_8` order.
    pub fn to_array(&self) -> [f32; 8] {
        self.to_control_inputs().to_array()
    }

    /// Converts to the engine's per-block control readings.
    pub fn to_control_inputs(&self) -> ControlInputs {
        ControlInputs {
            spread_knob: self.spread_knob,
            resonance_knob: self.resonance_knob,
            cutoff_knob: self.cutoff_knob,
            highpass_cv: self.highpass_cv,
            cutoff_cv1: self.cutoff_cv1,
            cutoff_cv2: self.cutoff_cv2,
            resonance_cv: self.resonance_cv,
            spread_cv: self.spread_cv,
        }
    }

    /// Sets input `CV_<channel>` (1-based, as printed on the panel).
    pub fn set_cv(&mut self, channel: usize, value: f32) -> ValidationResult<()> {
        let slot = match channel {
            1 => &mut self.spread_knob,
            2 => &mut self.resonance_knob,
            3 => &mut self.cutoff_knob,
            4 => &mut self.highpass_cv,
            5 => &mut self.cutoff_cv1,
            6 => &mut self.cutoff_cv2,
            7 => &mut self.resonance_cv,
            8 => &mut self.spread_cv,
            _ => return Err(ValidationError::UnknownChannel(channel)),
        };
        *slot = value;
        Ok(())
    }
}

impl From<ControlInputs> for PanelControls {
    fn from(inputs: ControlInputs) -> Self {
        Self {
            spread_knob: inputs.spread_knob,
            resonance_knob: inputs.resonance_knob,
            cutoff_knob: inputs.cutoff_knob,
            highpass_cv: inputs.highpass_cv,
            cutoff_cv1: inputs.cutoff_cv1,
            cutoff_cv2: inputs.cutoff_cv2,
            resonance_cv: inputs.resonance_cv,
            spread_cv: inputs.spread_cv,
        }
    }
}

/// A saved panel state.
///
/// # TOML Format
///
/// ```toml
/// name = "Wide"
/// description = "Full spread, gentle resonance"
/// sample_rate = 48000
/// block_size = 4
/// mode = 1
/// cv_mirror = false
///
/// [controls]
/// spread_knob = 1.0
/// resonance_knob = 0.3
/// cutoff_knob = 0.45
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate the engine is created at (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Samples per block (defaults to 4, as on the card).
    #[serde(default = "default_block_size")]
    pub block_size: usize,

    /// Starting output mode index, 0–4.
    #[serde(default)]
    pub mode: usize,

    /// Mirror the cutoff to the CV output.
    #[serde(default)]
    pub cv_mirror: bool,

    /// Knob and CV positions.
    #[serde(default)]
    pub controls: PanelControls,
}

fn default_sample_rate() -> u32 {
    patch_sm::DEFAULT_SAMPLE_RATE as u32
}

fn default_block_size() -> usize {
    patch_sm::DEFAULT_BLOCK_SIZE
}

impl Preset {
    /// Create a preset with default panel positions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            block_size: default_block_size(),
            mode: 0,
            cv_mirror: false,
            controls: PanelControls::default(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the panel positions.
    pub fn with_controls(mut self, controls: PanelControls) -> Self {
        self.controls = controls;
        self
    }

    /// Set the starting mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode.index();
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every setting, reporting all problems found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_preset(self)?;
        Ok(())
    }

    /// Starting mode, or `None` if the index is out of range.
    pub fn initial_mode(&self) -> Option<Mode> {
        Mode::from_index(self.mode)
    }

    /// Engine configuration for this preset.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            sample_rate: self.sample_rate as f32,
            cv_mirror: self.cv_mirror,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_new() {
        let preset = Preset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.block_size, 4);
        assert_eq!(preset.mode, 0);
        assert!(!preset.cv_mirror);
        assert_eq!(preset.controls, PanelControls::default());
    }

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Test"
description = "A test preset"
sample_rate = 44100
block_size = 32
mode = 3
cv_mirror = true

[controls]
spread_knob = 0.9
cutoff_knob = 0.4
resonance_cv = 0.25
"#;

        let preset = Preset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Test");
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.block_size, 32);
        assert_eq!(preset.initial_mode(), Some(Mode::Notch));
        assert!(preset.cv_mirror);
        assert_eq!(preset.controls.spread_knob, 0.9);
        assert_eq!(preset.controls.cutoff_knob, 0.4);
        assert_eq!(preset.controls.resonance_cv, 0.25);
        // Unlisted controls fall back to the panel default.
        assert_eq!(preset.controls.resonance_knob, 0.0);
        assert_eq!(preset.controls.highpass_cv, 0.0);
    }

    #[test]
    fn test_minimal_toml() {
        let preset = Preset::from_toml(r#"name = "Minimal""#).unwrap();
        assert_eq!(preset.name, "Minimal");
        assert!(preset.description.is_none());
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.block_size, 4);
        assert_eq!(preset.controls, PanelControls::default());
    }

    #[test]
    fn test_missing_name_is_parse_error() {
        let err = Preset::from_toml("mode = 1").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_preset_to_toml() {
        let preset = Preset::new("Test")
            .with_description("Test description")
            .with_mode(Mode::Bandpass);

        let toml = preset.to_toml().unwrap();
        assert!(toml.contains("name = \"Test\""));
        assert!(toml.contains("description = \"Test description\""));
        assert!(toml.contains("mode = 1"));
        assert!(toml.contains("[controls]"));
    }

    #[test]
    fn test_preset_roundtrip() {
        let original = Preset::new("Roundtrip")
            .with_description("Serialization")
            .with_mode(Mode::Peak)
            .with_controls(PanelControls {
                spread_knob: 0.75,
                highpass_cv: 0.125,
                ..Default::default()
            });

        let parsed = Preset::from_toml(&original.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_controls_bridge_to_engine() {
        let controls = PanelControls {
            spread_knob: 0.1,
            resonance_knob: 0.2,
            cutoff_knob: 0.3,
            highpass_cv: 0.4,
            cutoff_cv1: 0.5,
            cutoff_cv2: 0.6,
            resonance_cv: 0.7,
            spread_cv: 0.8,
        };
        let inputs = controls.to_control_inputs();
        assert_eq!(inputs.to_array(), [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        assert_eq!(PanelControls::from(inputs), controls);
    }

    #[test]
    fn test_set_cv_by_channel() {
        let mut controls = PanelControls::default();
        controls.set_cv(4, 0.6).unwrap();
        controls.set_cv(8, 0.2).unwrap();
        assert_eq!(controls.highpass_cv, 0.6);
        assert_eq!(controls.spread_cv, 0.2);

        assert_eq!(
            controls.set_cv(0, 1.0),
            Err(ValidationError::UnknownChannel(0))
        );
        assert_eq!(
            controls.set_cv(9, 1.0),
            Err(ValidationError::UnknownChannel(9))
        );
    }

    #[test]
    fn test_names_match_serialized_keys() {
        let toml = toml::to_string(&PanelControls::default()).unwrap();
        for name in PanelControls::NAMES {
            assert!(toml.contains(&format!("{name} = ")), "missing {name}");
        }
    }

    #[test]
    fn test_engine_config() {
        let mut preset = Preset::new("Mirror");
        preset.sample_rate = 96000;
        preset.cv_mirror = true;
        let config = preset.engine_config();
        assert_eq!(config.sample_rate, 96000.0);
        assert!(config.cv_mirror);
    }

    #[test]
    fn test_validate_wraps_error() {
        let mut preset = Preset::new("Bad");
        preset.mode = 5;
        assert!(matches!(
            preset.validate(),
            Err(ConfigError::Validation(ValidationError::InvalidMode(5)))
        ));
    }
}
