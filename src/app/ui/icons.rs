//! Unicode UI icon constants.
//!
//! Uses a BMP-only "safe" subset for broad font coverage (no emoji fonts needed).

pub const ICON_OPEN: &str = "☰";
pub const ICON_PROCESS: &str = "▶";
pub const ICON_INFO: &str = "ℹ";
