//! Button-driven output mode selection.
//!
//! The raw button level is sampled once per block, debounced, and fed to a
//! two-state machine. Only a `Released → Pressed` transition advances the
//! mode; holding the button or releasing it does nothing.
//!
//! ```text
//!            level high / advance mode
//!   Released ─────────────────────────► Pressed
//!      ▲                                   │
//!      └───────────── level low ───────────┘
//! ```

use dsf_core::SvfOutput;
use dsf_platform::Debouncer;

/// Output mode: which filter tap the mixer reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Mode 0: low-pass.
    #[default]
    Lowpass,
    /// Mode 1: band-pass.
    Bandpass,
    /// Mode 2: high-pass.
    Highpass,
    /// Mode 3: notch.
    Notch,
    /// Mode 4: peak.
    Peak,
}

impl Mode {
    /// Number of modes in the cycle.
    pub const COUNT: usize = 5;

    /// All modes in cycle order.
    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::Lowpass,
        Mode::Bandpass,
        Mode::Highpass,
        Mode::Notch,
        Mode::Peak,
    ];

    /// Returns the mode at `index`, or `None` if `index >= Mode::COUNT`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Position of this mode in the cycle, 0–4.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The mode after this one, wrapping from `Peak` to `Lowpass`.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The filter tap this mode selects.
    pub const fn tap(self) -> SvfOutput {
        match self {
            Mode::Lowpass => SvfOutput::Lowpass,
            Mode::Bandpass => SvfOutput::Bandpass,
            Mode::Highpass => SvfOutput::Highpass,
            Mode::Notch => SvfOutput::Notch,
            Mode::Peak => SvfOutput::Peak,
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Lowpass => "lowpass",
            Mode::Bandpass => "bandpass",
            Mode::Highpass => "highpass",
            Mode::Notch => "notch",
            Mode::Peak => "peak",
        }
    }
}

/// Debounced button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// Button up.
    #[default]
    Released,
    /// Button down.
    Pressed,
}

impl ButtonState {
    /// Pure transition function.
    ///
    /// Returns the next state and whether this step was a rising edge.
    pub const fn transition(self, level: bool) -> (Self, bool) {
        match (self, level) {
            (ButtonState::Released, true) => (ButtonState::Pressed, true),
            (ButtonState::Pressed, false) => (ButtonState::Released, false),
            (state, _) => (state, false),
        }
    }
}

/// Debounces the mode button and cycles through [`Mode`] on each press.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeSelector {
    debouncer: Debouncer,
    button: ButtonState,
    mode: Mode,
}

impl ModeSelector {
    /// Creates a selector in [`Mode::Lowpass`] with the button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the raw button level once. Returns `true` if the mode
    /// advanced.
    pub fn update(&mut self, raw: bool) -> bool {
        let level = self.debouncer.update(raw);
        let (button, rising) = self.button.transition(level);
        self.button = button;
        if rising {
            self.mode = self.mode.next();
        }
        rising
    }

    /// Current output mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current debounced button state.
    pub fn button(&self) -> ButtonState {
        self.button
    }
}
