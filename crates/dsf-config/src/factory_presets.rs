//! Factory presets bundled with the library.
//!
//! These are embedded at compile time and always available, so the CLI and
//! tests have known-good panel states without touching the filesystem.

use std::path::Path;

use crate::{ConfigError, Preset};

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &["neutral", "wide", "formant", "resonant-sweep"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("neutral", NEUTRAL_PRESET),
    ("wide", WIDE_PRESET),
    ("formant", FORMANT_PRESET),
    ("resonant-sweep", RESONANT_SWEEP_PRESET),
];

/// Open low-pass, no spread: close to transparent.
const NEUTRAL_PRESET: &str = r#"
name = "Neutral"
description = "Fully open low-pass with centered spread"
mode = 0

[controls]
spread_knob = 0.5
resonance_knob = 0.0
cutoff_knob = 1.0
"#;

/// Full spread for maximum stereo width.
const WIDE_PRESET: &str = r#"
name = "Wide"
description = "Full spread, gentle resonance, low-pass"
mode = 0

[controls]
spread_knob = 1.0
resonance_knob = 0.3
cutoff_knob = 0.55
"#;

/// Resonant band-pass pairs for vowel-like peaks.
const FORMANT_PRESET: &str = r#"
name = "Formant"
description = "Resonant band-pass pairs spread into vowel-like peaks"
mode = 1

[controls]
spread_knob = 0.8
resonance_knob = 0.75
cutoff_knob = 0.5
highpass_cv = 0.05
"#;

/// High resonance, low cutoff, ready for an external cutoff sweep.
const RESONANT_SWEEP_PRESET: &str = r#"
name = "Resonant Sweep"
description = "Near self-oscillating low-pass for sweeping from the cutoff CVs"
mode = 0
cv_mirror = true

[controls]
spread_knob = 0.35
resonance_knob = 0.9
cutoff_knob = 0.35
highpass_cv = 0.1
"#;

/// Returns all factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by internal name or display name, ignoring case.
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let name_lower = name.to_lowercase();

    for (preset_name, toml) in FACTORY_PRESETS_TOML {
        if *preset_name == name_lower {
            return Preset::from_toml(toml).ok();
        }
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Returns the internal names of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Check if a name refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

/// Resolve a preset argument: an existing file path is loaded, anything
/// else is looked up among the factory presets.
pub fn resolve_preset(name_or_path: &str) -> Result<Preset, ConfigError> {
    let path = Path::new(name_or_path);
    if path.is_file() {
        return Preset::load(path);
    }
    get_factory_preset(name_or_path)
        .ok_or_else(|| ConfigError::PresetNotFound(name_or_path.to_string()))
}
