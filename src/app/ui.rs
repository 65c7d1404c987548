use egui::Color32;

mod icons;
mod panes;
mod status;
mod top;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x33, 0x66, 0x99);
pub const SELECT_FILL: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x67);
pub const COMBO_FILL: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const PROCESS_FILL: Color32 = Color32::from_rgb(0x00, 0x8C, 0xBA);
pub const COMBO_HOVER_FILL: Color32 = Color32::from_rgb(0x5C, 0xBF, 0x60);
