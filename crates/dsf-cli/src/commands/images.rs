//! Shows what a panel setting does to the filter bank.

use super::common::{load_panel, parse_cv};
use clap::Args;
use dsf_engine::{DerivedParameters, FrequencyImages, map_controls, spread_images};

#[derive(Args)]
pub struct ImagesArgs {
    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Set a panel input (e.g., "1=0.9" sets CV_1, the spread knob)
    #[arg(long, value_parser = parse_cv, number_of_values = 1)]
    cv: Vec<(usize, f32)>,
}

pub fn run(args: ImagesArgs) -> anyhow::Result<()> {
    let preset = load_panel(args.preset.as_deref(), &args.cv)?;
    let params = map_controls(&preset.controls.to_control_inputs());
    let images = spread_images(params.cutoff, params.spread);

    println!("Preset: {}\n", preset.name);
    print!("{}", render(&params, &images));
    Ok(())
}

fn render(params: &DerivedParameters, images: &FrequencyImages) -> String {
    format!(
        "Parameters:\n\
         \x20 cutoff      {:.3}\n\
         \x20 resonance   {:.3}\n\
         \x20 spread      {:+.3}\n\
         \x20 highpass    {:.1} Hz\n\
         \n\
         Frequency images:\n\
         \x20 left1   {:>9.1} Hz    right1  {:>9.1} Hz\n\
         \x20 left2   {:>9.1} Hz    right2  {:>9.1} Hz\n",
        params.cutoff,
        params.resonance,
        params.spread,
        params.hp_cutoff,
        images.left1,
        images.right1,
        images.left2,
        images.right2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_neutral() {
        let params = DerivedParameters {
            cutoff: 0.5,
            resonance: 0.0,
            spread: 0.0,
            hp_cutoff: 0.0,
        };
        let text = render(&params, &spread_images(0.5, 0.0));
        assert!(text.contains("spread      +0.000"));
        assert_eq!(text.matches("5000.0 Hz").count(), 4);
    }
}
