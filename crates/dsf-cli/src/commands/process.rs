//! Offline rendering of a WAV file through the spread filter.

use super::common::{load_panel, parse_cv};
use crate::wav::{StereoSamples, read_wav_stereo, write_wav_stereo};
use clap::{Args, ValueEnum};
use dsf_engine::{ControlInputs, DsfEngine, Mode};
use dsf_platform::VirtualPanel;
use dsf_platform::debounce::DEBOUNCE_SAMPLES;
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::Range;
use std::path::PathBuf;

/// How long a scheduled button press is held down.
pub const PRESS_HOLD_SECONDS: f64 = 0.05;

/// Output modes for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliMode {
    Lowpass,
    Bandpass,
    Highpass,
    Notch,
    Peak,
}

impl From<CliMode> for Mode {
    fn from(m: CliMode) -> Self {
        match m {
            CliMode::Lowpass => Mode::Lowpass,
            CliMode::Bandpass => Mode::Bandpass,
            CliMode::Highpass => Mode::Highpass,
            CliMode::Notch => Mode::Notch,
            CliMode::Peak => Mode::Peak,
        }
    }
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono is duplicated to both channels)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Factory preset name or preset file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Set a panel input (e.g., "3=0.4" sets CV_3, the cutoff knob)
    #[arg(long, value_parser = parse_cv, number_of_values = 1)]
    cv: Vec<(usize, f32)>,

    /// Press the mode button at this time in seconds (repeatable)
    #[arg(long, value_name = "SECONDS")]
    press: Vec<f64>,

    /// Starting output mode (overrides the preset)
    #[arg(short, long, value_enum)]
    mode: Option<CliMode>,

    /// Processing block size (overrides the preset)
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,

    /// Mirror the cutoff to the CV output
    #[arg(long)]
    cv_mirror: bool,
}

/// Button level per block for a list of press times.
///
/// Each press holds the button for [`PRESS_HOLD_SECONDS`], but never for
/// fewer blocks than the debouncer needs to see it. Presses that overlap
/// merge into one.
#[derive(Debug, Default)]
pub struct PressSchedule {
    spans: Vec<Range<usize>>,
}

impl PressSchedule {
    /// Builds the schedule for `times` in seconds.
    pub fn new(times: &[f64], sample_rate: u32, block_size: usize) -> Self {
        let blocks_per_second = f64::from(sample_rate) / block_size as f64;
        let hold = ((PRESS_HOLD_SECONDS * blocks_per_second).ceil() as usize)
            .max(DEBOUNCE_SAMPLES as usize);
        let mut spans: Vec<Range<usize>> = times
            .iter()
            .map(|&t| {
                let start = (t * blocks_per_second) as usize;
                start..start.saturating_add(hold)
            })
            .collect();
        spans.sort_by_key(|span| span.start);
        Self { spans }
    }

    /// Raw button level for `block`.
    pub fn is_pressed(&self, block: usize) -> bool {
        self.spans.iter().any(|span| span.contains(&block))
    }
}

/// Cycles the mode to `target` with clean presses that process no audio.
fn preselect_mode(engine: &mut DsfEngine, controls: &ControlInputs, target: Mode) {
    while engine.mode() != target {
        for level in [true, false] {
            for _ in 0..DEBOUNCE_SAMPLES {
                engine.process_block(controls, level, &[], &[], &mut [], &mut []);
            }
        }
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if let Some(bad) = args.press.iter().find(|t| !t.is_finite() || **t < 0.0) {
        anyhow::bail!("Invalid press time: {bad} (expected seconds >= 0)");
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("Invalid bit depth: {} (expected 16, 24 or 32)", args.bit_depth);
    }

    println!("Reading {}...", args.input.display());
    let (input, sample_rate) = read_wav_stereo(&args.input)?;
    println!(
        "  {} frames, {} Hz, {:.2}s",
        input.len(),
        sample_rate,
        input.len() as f32 / sample_rate as f32
    );

    let mut preset = load_panel(args.preset.as_deref(), &args.cv)?;
    preset.sample_rate = sample_rate;
    if let Some(block_size) = args.block_size {
        preset.block_size = block_size;
    }
    if let Some(mode) = args.mode {
        preset.mode = Mode::from(mode).index();
    }
    preset.cv_mirror |= args.cv_mirror;
    preset.validate()?;

    let block_size = preset.block_size;
    let start_mode = preset.initial_mode().unwrap_or_default();
    tracing::info!(
        preset = %preset.name,
        sample_rate,
        block_size,
        mode = start_mode.name(),
        cv_mirror = preset.cv_mirror,
        presses = args.press.len(),
        "render settings"
    );

    let controls = preset.controls.to_control_inputs();
    let mut engine = DsfEngine::new(preset.engine_config());
    preselect_mode(&mut engine, &controls, start_mode);

    let mut panel = VirtualPanel::new();
    panel.set_all_cv(preset.controls.to_array());
    let schedule = PressSchedule::new(&args.press, sample_rate, block_size);

    println!("Processing with preset '{}'...", preset.name);
    let pb = ProgressBar::new(input.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut output = StereoSamples::silence(input.len());
    let mut last_report = None;
    let blocks = input
        .left
        .chunks(block_size)
        .zip(input.right.chunks(block_size))
        .zip(output.left.chunks_mut(block_size))
        .zip(output.right.chunks_mut(block_size))
        .enumerate();

    for (block, (((in_l, in_r), out_l), out_r)) in blocks {
        panel.set_button(schedule.is_pressed(block));
        let report = engine.run_block(&mut panel, in_l, in_r, out_l, out_r);
        if report.mode_changed {
            tracing::info!(
                time = (block * block_size) as f64 / f64::from(sample_rate),
                mode = report.mode.name(),
                "button press"
            );
        }
        last_report = Some(report);
        pb.set_position(((block + 1) * block_size).min(input.len()) as u64);
    }

    pb.finish_with_message("done");

    println!("\nStats:");
    for (label, left, right) in [
        ("Input ", &input.left, &input.right),
        ("Output", &output.left, &output.right),
    ] {
        println!(
            "  {label}: L RMS {:.1} dB, Peak {:.1} dB | R RMS {:.1} dB, Peak {:.1} dB",
            linear_to_db(rms(left)),
            linear_to_db(peak(left)),
            linear_to_db(rms(right)),
            linear_to_db(peak(right)),
        );
    }
    if let Some(report) = last_report {
        println!("  Final mode: {}", report.mode.name());
        println!("  LED: {:.2}", panel.led());
        if report.cv_out_volts.is_some() {
            println!("  CV out: {:.2} V", panel.cv_out_volts());
        }
    }

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, sample_rate, args.bit_depth)?;
    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsf_engine::EngineConfig;

    #[test]
    fn test_schedule_hold_length() {
        // 48 kHz / 4-sample blocks: 50 ms is 600 blocks.
        let schedule = PressSchedule::new(&[1.0], 48000, 4);
        assert!(!schedule.is_pressed(11_999));
        assert!(schedule.is_pressed(12_000));
        assert!(schedule.is_pressed(12_599));
        assert!(!schedule.is_pressed(12_610));
    }

    #[test]
    fn test_schedule_far_future_press_saturates() {
        // Lands past any real file; the button simply never goes down.
        let schedule = PressSchedule::new(&[1e30, 0.0], 48000, 4);
        assert!(schedule.is_pressed(0));
        assert!(!schedule.is_pressed(1_000_000));
        assert!(!schedule.is_pressed(usize::MAX - 1));
    }

    #[test]
    fn test_schedule_hold_covers_debounce() {
        // 4096-sample blocks would hold for one block; the debouncer needs 8.
        let schedule = PressSchedule::new(&[0.0], 48000, 4096);
        let held = (0..100).filter(|&b| schedule.is_pressed(b)).count();
        assert_eq!(held, DEBOUNCE_SAMPLES as usize);
    }

    #[test]
    fn test_scheduled_presses_advance_mode() {
        let sample_rate = 48000;
        let block_size = 64;
        let schedule = PressSchedule::new(&[0.1, 0.3, 0.5], sample_rate, block_size);
        let mut engine = DsfEngine::new(EngineConfig::default());
        let controls = ControlInputs::default();

        let blocks = sample_rate as usize / block_size;
        let presses = (0..blocks)
            .filter(|&b| {
                engine
                    .process_block(&controls, schedule.is_pressed(b), &[], &[], &mut [], &mut [])
                    .mode_changed
            })
            .count();
        assert_eq!(presses, 3);
        assert_eq!(engine.mode(), Mode::Notch);
    }

    #[test]
    fn test_preselect_mode() {
        let mut engine = DsfEngine::new(EngineConfig::default());
        preselect_mode(&mut engine, &ControlInputs::default(), Mode::Peak);
        assert_eq!(engine.mode(), Mode::Peak);
    }

    #[test]
    fn test_cli_mode_conversion() {
        assert_eq!(Mode::from(CliMode::Lowpass), Mode::Lowpass);
        assert_eq!(Mode::from(CliMode::Peak), Mode::Peak);
    }

    #[test]
    fn test_stats_helpers() {
        assert_eq!(rms(&[]), 0.0);
        assert_eq!(peak(&[0.2, -0.7, 0.5]), 0.7);
        assert_eq!(linear_to_db(0.0), -120.0);
        assert!((linear_to_db(1.0)).abs() < 1e-6);
    }
}
