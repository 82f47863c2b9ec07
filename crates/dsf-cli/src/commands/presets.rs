//! Factory preset listing.

use clap::Args;
use dsf_config::{FACTORY_PRESET_NAMES, Preset, get_factory_preset, resolve_preset};
use dsf_engine::Mode;

#[derive(Args)]
pub struct PresetsArgs {
    /// Print this preset (factory name or file) as TOML instead of listing
    name: Option<String>,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.name {
        Some(name) => show(&name),
        None => {
            list();
            Ok(())
        }
    }
}

fn list() {
    println!("Factory Presets");
    println!("===============\n");

    for &id in FACTORY_PRESET_NAMES {
        let Some(preset) = get_factory_preset(id) else {
            continue;
        };
        println!("  {:<16} {}", id, summary(&preset));
        if let Some(desc) = &preset.description {
            println!("  {:<16} {}", "", desc);
        }
    }

    println!("\nUse 'dsf presets <name>' to print a preset as TOML.");
}

fn summary(preset: &Preset) -> String {
    let c = &preset.controls;
    format!(
        "mode={} spread={:.2} res={:.2} cutoff={:.2}{}",
        preset.initial_mode().map_or("?", Mode::name),
        c.spread_knob,
        c.resonance_knob,
        c.cutoff_knob,
        if preset.cv_mirror { " cv-mirror" } else { "" },
    )
}

fn show(name: &str) -> anyhow::Result<()> {
    let preset = resolve_preset(name)?;
    print!("{}", preset.to_toml()?);
    Ok(())
}
