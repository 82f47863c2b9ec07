//! DSF Platform - hardware abstraction for the voice card
//!
//! This crate is the boundary between the spread filter engine and the
//! hardware it runs on. The engine never touches an ADC, a GPIO pin or a
//! PWM channel directly; it reads and writes normalized control values
//! through [`PlatformController`].
//!
//! # Core Abstractions
//!
//! ## Control System
//!
//! - [`ControlId`] - Namespaced control identifier (analog, digital, output)
//! - [`ControlType`] - Physical control type (knob, CV jack, button, LED, CV out)
//! - [`ControlState`] - Current control state with change flag
//!
//! ## Platform Controller
//!
//! - [`PlatformController`] - Trait for hardware/host platform implementations
//! - [`patch_sm`] - Control map of the Patch SM voice card
//! - [`VirtualPanel`] - Host-side controller implementing the Patch SM map
//!
//! ## Capabilities
//!
//! - [`Debouncer`] - Shift-register switch debouncer
//!
//! # Control ID Namespaces
//!
//! Control IDs use a 16-bit identifier with namespace prefixes:
//!
//! - `0x00XX` - Analog inputs (knobs, CV jacks)
//! - `0x01XX` - Digital inputs (buttons, gates)
//! - `0x02XX` - Outputs (LEDs, CV outputs)
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! dsf-platform = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use dsf_platform::{PlatformController, VirtualPanel, patch_sm};
//!
//! let mut panel = VirtualPanel::new();
//! panel.set_cv(0, 0.75);
//!
//! let state = panel.read_control(patch_sm::CV_1).unwrap();
//! assert_eq!(state.value, 0.75);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod debounce;
pub mod patch_sm;
pub mod virtual_panel;

pub use debounce::Debouncer;
pub use virtual_panel::VirtualPanel;

/// Namespace identifiers for control sources.
pub mod namespace {
    /// Analog inputs (knobs, CV jacks).
    pub const ANALOG: u16 = 0x0000;
    /// Digital inputs (buttons, gate jacks).
    pub const DIGITAL: u16 = 0x0100;
    /// Outputs (LEDs, CV outputs).
    pub const OUTPUT: u16 = 0x0200;
}

/// A namespaced control identifier.
///
/// The high byte is the namespace, the low byte is the control index within
/// that namespace.
///
/// # Example
///
/// ```rust
/// use dsf_platform::ControlId;
///
/// let cv = ControlId::analog(0x03);
/// assert_eq!(cv.raw(), 0x0003);
/// assert!(cv.is_analog());
///
/// let button = ControlId::digital(0x00);
/// assert_eq!(button.raw(), 0x0100);
/// assert!(button.is_digital());
///
/// let led = ControlId::output(0x01);
/// assert_eq!(led.raw(), 0x0201);
/// assert!(led.is_output());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u16);

impl ControlId {
    /// Creates an analog input ID (namespace 0x00XX).
    #[inline]
    pub const fn analog(index: u8) -> Self {
        Self(namespace::ANALOG | index as u16)
    }

    /// Creates a digital input ID (namespace 0x01XX).
    #[inline]
    pub const fn digital(index: u8) -> Self {
        Self(namespace::DIGITAL | index as u16)
    }

    /// Creates an output ID (namespace 0x02XX).
    #[inline]
    pub const fn output(index: u8) -> Self {
        Self(namespace::OUTPUT | index as u16)
    }

    /// Returns the raw 16-bit value.
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// Returns the namespace portion (high byte).
    #[inline]
    pub const fn namespace(&self) -> u16 {
        self.0 & 0xFF00
    }

    /// Returns the index within the namespace (low byte).
    #[inline]
    pub const fn index(&self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// Returns true if this is an analog input.
    #[inline]
    pub const fn is_analog(&self) -> bool {
        self.namespace() == namespace::ANALOG
    }

    /// Returns true if this is a digital input.
    #[inline]
    pub const fn is_digital(&self) -> bool {
        self.namespace() == namespace::DIGITAL
    }

    /// Returns true if this is an output.
    #[inline]
    pub const fn is_output(&self) -> bool {
        self.namespace() == namespace::OUTPUT
    }
}

/// Physical control type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlType {
    /// Panel potentiometer (0.0 = fully counter-clockwise, 1.0 = fully clockwise).
    Knob,
    /// Control-voltage input jack, normalized to 0.0–1.0 by the ADC layer.
    CvInput,
    /// Momentary push-button (pressed = 1.0, released = 0.0).
    Button,
    /// LED indicator (0.0 = off, 1.0 = full brightness).
    Led,
    /// Control-voltage output (0.0–1.0 of the DAC's full-scale voltage).
    CvOutput,
}

impl ControlType {
    /// Returns the number of discrete positions for this control type.
    ///
    /// Returns `None` for continuous controls.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dsf_platform::ControlType;
    ///
    /// assert_eq!(ControlType::Button.discrete_positions(), Some(2));
    /// assert_eq!(ControlType::Knob.discrete_positions(), None);
    /// ```
    #[inline]
    pub const fn discrete_positions(&self) -> Option<u8> {
        match self {
            ControlType::Button => Some(2),
            ControlType::Knob | ControlType::CvInput | ControlType::Led | ControlType::CvOutput => {
                None
            }
        }
    }

    /// Returns true if this is an output control.
    #[inline]
    pub const fn is_output(&self) -> bool {
        matches!(self, ControlType::Led | ControlType::CvOutput)
    }

    /// Returns true if this is an input control.
    #[inline]
    pub const fn is_input(&self) -> bool {
        !self.is_output()
    }
}

/// Current state of a control.
///
/// All control values are normalized to 0.0–1.0. Inputs that are summed
/// downstream (a knob plus its CV jack) may legitimately add up beyond 1.0;
/// the engine saturates those sums, not the controller.
///
/// # Example
///
/// ```rust
/// use dsf_platform::ControlState;
///
/// let state = ControlState::new(0.75);
/// assert_eq!(state.value, 0.75);
/// assert!(!state.changed);
/// assert!(state.is_high());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// Normalized control value (0.0 to 1.0).
    pub value: f32,
    /// True if the value has changed since last read.
    pub changed: bool,
}

impl ControlState {
    /// Creates a new control state with the given value (not marked as changed).
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    /// Returns true if the value reads as a logical high (≥ 0.5).
    #[inline]
    pub fn is_high(&self) -> bool {
        self.value >= 0.5
    }

    /// Clears the changed flag.
    #[inline]
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Trait for platform-specific controller implementations.
///
/// A board support crate implements this over its ADC, GPIO and PWM drivers;
/// [`VirtualPanel`] implements it in memory for host rendering and tests.
///
/// All methods run inside the audio callback and must not block or
/// allocate.
///
/// # Example
///
/// ```rust
/// use dsf_platform::{ControlId, ControlState, ControlType, PlatformController};
///
/// struct OneKnob {
///     knob: f32,
///     led: f32,
/// }
///
/// impl PlatformController for OneKnob {
///     fn control_count(&self) -> usize { 2 }
///
///     fn control_id(&self, index: usize) -> Option<ControlId> {
///         match index {
///             0 => Some(ControlId::analog(0)),
///             1 => Some(ControlId::output(0)),
///             _ => None,
///         }
///     }
///
///     fn control_type(&self, id: ControlId) -> Option<ControlType> {
///         match id.raw() {
///             0x0000 => Some(ControlType::Knob),
///             0x0200 => Some(ControlType::Led),
///             _ => None,
///         }
///     }
///
///     fn read_control(&self, id: ControlId) -> Option<ControlState> {
///         (id == ControlId::analog(0)).then(|| ControlState::new(self.knob))
///     }
///
///     fn write_control(&mut self, id: ControlId, value: f32) -> bool {
///         if id == ControlId::output(0) {
///             self.led = value;
///             return true;
///         }
///         false
///     }
/// }
///
/// let mut panel = OneKnob { knob: 0.3, led: 0.0 };
/// assert!(panel.write_control(ControlId::output(0), 1.0));
/// assert_eq!(panel.read_control(ControlId::analog(0)).unwrap().value, 0.3);
/// ```
pub trait PlatformController {
    /// Returns the total number of controls on this platform.
    fn control_count(&self) -> usize;

    /// Returns the control ID at the given index.
    ///
    /// Returns `None` if `index >= control_count()`.
    fn control_id(&self, index: usize) -> Option<ControlId>;

    /// Returns the type of the specified control.
    ///
    /// Returns `None` if the control ID is not recognized.
    fn control_type(&self, id: ControlId) -> Option<ControlType>;

    /// Reads the current state of a control.
    ///
    /// Returns `None` if the control ID is not recognized or is not readable.
    fn read_control(&self, id: ControlId) -> Option<ControlState>;

    /// Writes a normalized value (0.0 to 1.0) to an output control.
    ///
    /// Returns `true` if the write was accepted, `false` if the control is
    /// not writable or the ID is not recognized.
    fn write_control(&mut self, id: ControlId, value: f32) -> bool;

    /// Samples the hardware (ADC conversion results, GPIO levels).
    ///
    /// Called once at the start of every audio block. Default implementation
    /// does nothing (for controllers with interrupt-driven updates).
    fn poll(&mut self) {}

    /// Pushes pending output changes to the hardware.
    ///
    /// Called once at the end of every audio block. Default implementation
    /// does nothing.
    fn flush(&mut self) {}
}
