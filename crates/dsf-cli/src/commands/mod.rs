//! CLI command implementations.

pub mod common;
pub mod images;
pub mod panel;
pub mod presets;
pub mod process;
