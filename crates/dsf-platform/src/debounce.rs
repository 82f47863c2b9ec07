//! Shift-register switch debouncer.
//!
//! Mechanical push-buttons bounce for a few milliseconds on every press and
//! release. [`Debouncer`] shifts one raw sample per call into an 8-bit
//! history and only changes its stable level once the whole history agrees:
//!
//! ```text
//! history = (history << 1) | raw
//! 0xFF → stable high
//! 0x00 → stable low
//! else → hold previous stable level
//! ```
//!
//! Sampled once per audio block (4 samples at 48 kHz on the card), eight
//! agreeing samples correspond to roughly 0.7 ms of settled contact.

/// Number of consecutive agreeing samples required for a level change.
pub const DEBOUNCE_SAMPLES: u32 = u8::BITS;

/// 8-sample shift-register debouncer.
///
/// # Example
///
/// ```rust
/// use dsf_platform::Debouncer;
///
/// let mut button = Debouncer::new();
/// for _ in 0..7 {
///     assert!(!button.update(true));
/// }
/// assert!(button.update(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    history: u8,
    level: bool,
}

impl Debouncer {
    /// Creates a debouncer whose stable level starts low.
    pub const fn new() -> Self {
        Self {
            history: 0,
            level: false,
        }
    }

    /// Shifts in one raw sample and returns the stable level.
    #[inline]
    pub fn update(&mut self, raw: bool) -> bool {
        self.history = (self.history << 1) | u8::from(raw);
        match self.history {
            0xFF => self.level = true,
            0x00 => self.level = false,
            _ => {}
        }
        self.level
    }

    /// Returns the current stable level without sampling.
    #[inline]
    pub fn level(&self) -> bool {
        self.level
    }
}
