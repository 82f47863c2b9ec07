//! Lists the controls of the Patch SM panel and their positions.

use super::common::{load_panel, parse_cv};
use clap::Args;
use dsf_platform::{ControlType, PlatformController, VirtualPanel};

#[derive(Args)]
pub struct PanelArgs {
    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Set a panel input (e.g., "4=0.3" sets CV_4, the highpass CV)
    #[arg(long, value_parser = parse_cv, number_of_values = 1)]
    cv: Vec<(usize, f32)>,
}

pub fn run(args: PanelArgs) -> anyhow::Result<()> {
    let preset = load_panel(args.preset.as_deref(), &args.cv)?;

    let mut panel = VirtualPanel::new();
    panel.set_all_cv(preset.controls.to_array());

    println!("Preset: {}\n", preset.name);
    print!("{}", render(&panel));
    Ok(())
}

fn type_label(control_type: ControlType) -> &'static str {
    match control_type {
        ControlType::Knob => "knob",
        ControlType::CvInput => "cv in",
        ControlType::Button => "button",
        ControlType::Led => "led",
        ControlType::CvOutput => "cv out",
    }
}

/// Renders one line per control in the controller's enumeration order.
fn render<P: PlatformController + ?Sized>(controller: &P) -> String {
    let mut out = String::from("Controls:\n");
    let mut inputs = 0;
    let mut outputs = 0;

    for index in 0..controller.control_count() {
        let Some(id) = controller.control_id(index) else {
            continue;
        };
        let Some(control_type) = controller.control_type(id) else {
            continue;
        };

        let direction = if control_type.is_input() {
            inputs += 1;
            "in "
        } else {
            outputs += 1;
            "out"
        };
        let range = match control_type.discrete_positions() {
            Some(positions) => format!("{positions} positions"),
            None => "continuous".to_string(),
        };
        let value = controller
            .read_control(id)
            .map_or_else(|| "-".to_string(), |state| format!("{:.3}", state.value));

        out.push_str(&format!(
            "  [{index:>2}] 0x{:04X}  {direction}  {:<7} {range:<12} {value}\n",
            id.raw(),
            type_label(control_type),
        ));
    }

    out.push_str(&format!("\nTotal: {inputs} input(s), {outputs} output(s)\n"));
    out
}
