//! Integration tests for dsf-config.
//!
//! These tests verify presets end to end: files on disk, validation, and
//! rendering through the engine.

use dsf_config::{
    ConfigError, PanelControls, Preset, ValidationError, factory_presets, get_factory_preset,
    resolve_preset,
};
use dsf_engine::{DsfEngine, Mode};
use tempfile::TempDir;

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dark.toml");

    let original = Preset::new("Dark")
        .with_description("Low cutoff, resonant")
        .with_mode(Mode::Notch)
        .with_controls(PanelControls {
            cutoff_knob: 0.25,
            resonance_knob: 0.6,
            ..Default::default()
        });
    original.save(&path).unwrap();
    assert!(path.exists(), "save should create parent directories");

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Preset::load(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_load_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "name = \n[controls").unwrap();
    assert!(matches!(
        Preset::load(&path),
        Err(ConfigError::TomlParse(_))
    ));
}

#[test]
fn test_loaded_file_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hot.toml");
    std::fs::write(
        &path,
        "name = \"Hot\"\nblock_size = 0\n\n[controls]\ncutoff_knob = 1.4\n",
    )
    .unwrap();

    let preset = Preset::load(&path).unwrap();
    match preset.validate() {
        Err(ConfigError::Validation(ValidationError::Multiple(errors))) => {
            assert!(errors.contains(&ValidationError::InvalidBlockSize(0)));
            assert!(errors.contains(&ValidationError::OutOfRange {
                control: "cutoff_knob".to_string(),
                value: 1.4,
            }));
        }
        other => panic!("expected two validation errors, got {other:?}"),
    }
}

#[test]
fn test_resolve_prefers_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wide.toml");
    Preset::new("My Wide").save(&path).unwrap();

    let from_file = resolve_preset(path.to_str().unwrap()).unwrap();
    assert_eq!(from_file.name, "My Wide");

    let factory = resolve_preset("wide").unwrap();
    assert_eq!(factory.name, "Wide");
}

#[test]
fn test_factory_presets_render_through_engine() {
    let input: Vec<f32> = (0..4800).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();

    for preset in factory_presets() {
        let mut engine = DsfEngine::new(preset.engine_config());
        let controls = preset.controls.to_control_inputs();

        let mut left = vec![0.0f32; input.len()];
        let mut right = vec![0.0f32; input.len()];
        for ((chunk, l), r) in input
            .chunks(preset.block_size)
            .zip(left.chunks_mut(preset.block_size))
            .zip(right.chunks_mut(preset.block_size))
        {
            engine.process_block(&controls, false, chunk, chunk, l, r);
        }

        assert!(
            left.iter().chain(&right).all(|s| s.is_finite()),
            "preset '{}' produced non-finite output",
            preset.name
        );
        assert!(
            left.iter().any(|&s| s != 0.0),
            "preset '{}' produced silence",
            preset.name
        );
    }
}

#[test]
fn test_wide_preset_is_stereo() {
    let preset = get_factory_preset("wide").unwrap();
    let mut engine = DsfEngine::new(preset.engine_config());
    let controls = preset.controls.to_control_inputs();

    let input: Vec<f32> = (0..4096).map(|i| (i as f32 * 0.13).sin() * 0.5).collect();
    let mut left = vec![0.0f32; input.len()];
    let mut right = vec![0.0f32; input.len()];
    let report = engine.process_block(&controls, false, &input, &input, &mut left, &mut right);

    assert_eq!(report.parameters.spread, 1.0);
    assert_ne!(left, right);
}
