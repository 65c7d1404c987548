use super::super::GrayscopeApp;
use super::icons;
use egui::{Color32, RichText};

impl GrayscopeApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let file_label = self.image_meta.as_ref().map_or_else(
                || "No image selected".to_string(),
                |meta| format!("{} {}", icons::ICON_INFO, meta.summary()),
            );
            let response = ui.label(
                RichText::new(file_label)
                    .small()
                    .color(Color32::from_gray(180)),
            );
            if let Some(meta) = &self.image_meta {
                response.on_hover_text(meta.path().display().to_string());
            }
            if let Some(msg) = &self.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }
}
