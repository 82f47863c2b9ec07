//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use dsf_config::{Preset, resolve_preset};

/// Parse a `N=VALUE` CV override for clap's `value_parser`.
///
/// `N` is the panel channel number, 1–8.
pub fn parse_cv(s: &str) -> Result<(usize, f32), String> {
    let (channel, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid CV format: '{s}' (expected N=VALUE)"))?;
    let channel = channel
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid CV channel '{channel}': {e}"))?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("Invalid CV value '{value}': {e}"))?;
    Ok((channel, value))
}

/// Load a preset by factory name or file path, or the default panel if
/// none is given, then apply CV overrides.
pub fn load_panel(preset: Option<&str>, cv: &[(usize, f32)]) -> anyhow::Result<Preset> {
    let mut preset = match preset {
        Some(name) => resolve_preset(name).with_context(|| {
            format!("could not load preset '{name}' (see 'dsf presets' for factory presets)")
        })?,
        None => Preset::default(),
    };

    for &(channel, value) in cv {
        preset.controls.set_cv(channel, value)?;
    }
    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cv() {
        assert_eq!(parse_cv("3=0.25"), Ok((3, 0.25)));
        assert_eq!(parse_cv(" 8 = 1 "), Ok((8, 1.0)));
        assert!(parse_cv("3").is_err());
        assert!(parse_cv("x=0.5").is_err());
        assert!(parse_cv("2=loud").is_err());
    }

    #[test]
    fn test_load_panel_applies_overrides() {
        let preset = load_panel(Some("wide"), &[(3, 0.2), (7, 0.4)]).unwrap();
        assert_eq!(preset.name, "Wide");
        assert_eq!(preset.controls.cutoff_knob, 0.2);
        assert_eq!(preset.controls.resonance_cv, 0.4);
    }

    #[test]
    fn test_load_panel_rejects_bad_channel() {
        assert!(load_panel(None, &[(0, 0.5)]).is_err());
    }

    #[test]
    fn test_load_panel_unknown_preset() {
        let err = load_panel(Some("nope"), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("preset not found: nope"));
    }
}
