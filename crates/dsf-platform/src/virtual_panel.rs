//! In-memory Patch SM panel for host rendering and tests.
//!
//! [`VirtualPanel`] implements [`PlatformController`] over the
//! [`patch_sm`](crate::patch_sm) control map without any hardware behind
//! it. Knob and CV positions and the button level are set directly; LED
//! brightness and CV output written by the engine are recorded for
//! inspection.

use crate::patch_sm::{self, BUTTON, CV_INPUTS, CV_OUT, CV_OUT_MAX_VOLTS, LED};
use crate::{ControlId, ControlState, ControlType, PlatformController};
use dsf_core::clamp_unit;

/// Host-side stand-in for the Patch SM front panel.
#[derive(Debug, Clone, Default)]
pub struct VirtualPanel {
    cv: [ControlState; 8],
    button: bool,
    led: f32,
    cv_out: f32,
    flushes: u64,
}

impl VirtualPanel {
    /// Creates a panel with every CV at 0, the button released and all
    /// outputs dark.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of analog input `index` (0 = `CV_1`).
    ///
    /// The value is stored as given; saturation happens downstream. Indices
    /// past `CV_8` are ignored.
    pub fn set_cv(&mut self, index: usize, value: f32) {
        if let Some(state) = self.cv.get_mut(index) {
            store(state, value);
        }
    }

    /// Sets all eight analog inputs at once, in `CV_1..CV_8` order.
    pub fn set_all_cv(&mut self, values: [f32; 8]) {
        for (state, value) in self.cv.iter_mut().zip(values) {
            store(state, value);
        }
    }

    /// Returns the value of analog input `index`.
    pub fn cv(&self, index: usize) -> Option<f32> {
        self.cv.get(index).map(|state| state.value)
    }

    /// Sets the raw (undebounced) button level.
    pub fn set_button(&mut self, pressed: bool) {
        self.button = pressed;
    }

    /// Returns the raw button level.
    pub fn button(&self) -> bool {
        self.button
    }

    /// Last LED brightness written, 0.0–1.0.
    pub fn led(&self) -> f32 {
        self.led
    }

    /// Last CV output value written, normalized 0.0–1.0.
    pub fn cv_out(&self) -> f32 {
        self.cv_out
    }

    /// Last CV output value written, in volts.
    pub fn cv_out_volts(&self) -> f32 {
        self.cv_out * CV_OUT_MAX_VOLTS
    }

    /// Number of completed `flush` calls, one per processed block.
    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

/// Stores `value` exactly, flagging any difference as a change.
fn store(state: &mut ControlState, value: f32) {
    if state.value != value {
        state.value = value;
        state.changed = true;
    }
}

impl PlatformController for VirtualPanel {
    fn control_count(&self) -> usize {
        patch_sm::CONTROL_COUNT
    }

    fn control_id(&self, index: usize) -> Option<ControlId> {
        patch_sm::control_id(index)
    }

    fn control_type(&self, id: ControlId) -> Option<ControlType> {
        patch_sm::control_type(id)
    }

    fn read_control(&self, id: ControlId) -> Option<ControlState> {
        if id == BUTTON {
            return Some(ControlState::new(if self.button { 1.0 } else { 0.0 }));
        }
        CV_INPUTS
            .iter()
            .position(|&cv| cv == id)
            .map(|index| self.cv[index])
    }

    fn write_control(&mut self, id: ControlId, value: f32) -> bool {
        match id {
            LED => {
                self.led = clamp_unit(value);
                true
            }
            CV_OUT => {
                self.cv_out = clamp_unit(value);
                true
            }
            _ => false,
        }
    }

    fn poll(&mut self) {
        for state in &mut self.cv {
            state.clear_changed();
        }
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
