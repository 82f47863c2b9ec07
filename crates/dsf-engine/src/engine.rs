//! The per-block entry point.
//!
//! [`DsfEngine`] owns everything that persists between audio callbacks: the
//! six filters and the mode selector. Each call to
//! [`process_block`](DsfEngine::process_block) runs the control-rate
//! pipeline exactly once and then the audio-rate loop over the block:
//!
//! ```text
//! controls ─► map_controls ─► spread_images ─► bank.set_coefficients
//! button   ─► selector.update
//! for each frame: bank.process ─► mix ─► output
//! ```
//!
//! The engine never allocates, locks or fails after construction.

use dsf_core::{ResonantFilter, StateVariableFilter};
use dsf_platform::{PlatformController, patch_sm};

use crate::filter_bank::FilterBank;
use crate::mixer::mix;
use crate::mode::{Mode, ModeSelector};
use crate::params::{ControlInputs, DerivedParameters, map_controls};
use crate::spread::{FrequencyImages, spread_images};

/// Volts per unit cutoff on the auxiliary CV mirror output.
pub const CV_MIRROR_VOLTS_PER_UNIT: f32 = 3.5;

/// Startup configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Hardware sample rate in Hz, fixed for the life of the engine.
    pub sample_rate: f32,
    /// Mirror `cutoff × 3.5 V` to the CV output.
    pub cv_mirror: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: patch_sm::DEFAULT_SAMPLE_RATE,
            cv_mirror: false,
        }
    }
}

/// What one block computed, for driving panel outputs and for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockReport {
    /// Parameters derived from this block's controls.
    pub parameters: DerivedParameters,
    /// Frequency images pushed to the band filters.
    pub images: FrequencyImages,
    /// Mode the block was mixed in.
    pub mode: Mode,
    /// True if a button press advanced the mode on this block.
    pub mode_changed: bool,
    /// LED brightness, 0–1.
    pub led: f32,
    /// CV mirror voltage, when enabled.
    pub cv_out_volts: Option<f32>,
}

/// Stereo spread filter engine.
///
/// # Example
///
/// ```rust
/// use dsf_engine::{ControlInputs, DsfEngine, EngineConfig};
///
/// let mut engine = DsfEngine::new(EngineConfig::default());
/// let controls = ControlInputs {
///     cutoff_knob: 0.6,
///     resonance_knob: 0.4,
///     spread_knob: 0.7,
///     ..Default::default()
/// };
///
/// let input = [0.25f32; 4];
/// let (mut left, mut right) = ([0.0f32; 4], [0.0f32; 4]);
/// let report = engine.process_block(&controls, false, &input, &input, &mut left, &mut right);
/// assert_eq!(report.led, 0.6);
/// ```
#[derive(Debug, Clone)]
pub struct DsfEngine<F: ResonantFilter = StateVariableFilter> {
    config: EngineConfig,
    bank: FilterBank<F>,
    selector: ModeSelector,
}

impl DsfEngine {
    /// Creates an engine backed by [`StateVariableFilter`]s.
    pub fn new(config: EngineConfig) -> Self {
        Self::from_config(config)
    }
}

impl Default for DsfEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<F: ResonantFilter> DsfEngine<F> {
    /// Creates an engine over any [`ResonantFilter`] implementation.
    ///
    /// Filters are initialised here, once, at `config.sample_rate`.
    pub fn from_config(config: EngineConfig) -> Self {
        #[cfg(feature = "tracing")]
        tracing::info!(
            sample_rate = config.sample_rate,
            cv_mirror = config.cv_mirror,
            "spread filter engine initialised"
        );
        Self {
            config,
            bank: FilterBank::new(config.sample_rate),
            selector: ModeSelector::new(),
        }
    }

    /// Processes one audio block.
    ///
    /// `button` is the raw button level sampled for this block. The block
    /// length is the shortest of the four buffers.
    pub fn process_block(
        &mut self,
        controls: &ControlInputs,
        button: bool,
        left_in: &[f32],
        right_in: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) -> BlockReport {
        let parameters = map_controls(controls);
        let images = spread_images(parameters.cutoff, parameters.spread);
        self.bank.set_coefficients(&images, &parameters);

        let mode_changed = self.selector.update(button);
        let mode = self.selector.mode();
        #[cfg(feature = "tracing")]
        if mode_changed {
            tracing::debug!(mode = mode.name(), index = mode.index(), "mode advanced");
        }

        let frames = left_in
            .iter()
            .zip(right_in)
            .zip(left_out.iter_mut().zip(right_out.iter_mut()));
        for ((&l, &r), (out_l, out_r)) in frames {
            let taps = self.bank.process(l, r);
            (*out_l, *out_r) = mix(&taps, mode);
        }

        BlockReport {
            parameters,
            images,
            mode,
            mode_changed,
            led: parameters.cutoff,
            cv_out_volts: self
                .config
                .cv_mirror
                .then_some(parameters.cutoff * CV_MIRROR_VOLTS_PER_UNIT),
        }
    }

    /// Runs one block against a platform controller.
    ///
    /// Polls the controller, reads the eight CVs and the button, processes
    /// the audio, writes the LED (and the CV mirror when enabled), then
    /// flushes.
    pub fn run_block<P: PlatformController + ?Sized>(
        &mut self,
        controller: &mut P,
        left_in: &[f32],
        right_in: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) -> BlockReport {
        controller.poll();
        let controls = ControlInputs::from_controller(controller);
        let button = controller
            .read_control(patch_sm::BUTTON)
            .is_some_and(|state| state.is_high());

        let report =
            self.process_block(&controls, button, left_in, right_in, left_out, right_out);

        controller.write_control(patch_sm::LED, report.led);
        if let Some(volts) = report.cv_out_volts {
            controller.write_control(patch_sm::CV_OUT, patch_sm::volts_to_cv_out(volts));
        }
        controller.flush();
        report
    }

    /// Current output mode.
    pub fn mode(&self) -> Mode {
        self.selector.mode()
    }

    /// Startup configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The filter bank.
    pub fn bank(&self) -> &FilterBank<F> {
        &self.bank
    }
}
