use super::super::GrayscopeApp;
use super::{COMBO_FILL, COMBO_HOVER_FILL, PROCESS_FILL, SELECT_FILL, icons};
use crate::processor::Algorithm;
use egui::{Color32, RichText};

const CONTROL_WIDTH: f32 = 190.0;

impl GrayscopeApp {
    pub(crate) fn ui_main_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            self.ui_select_button(ui);
            ui.add_space(10.0);
            self.ui_algorithm_combo(ui);
            ui.add_space(10.0);
            self.ui_process_button(ui);
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "kernel {k}×{k} · gamma {g:.2}",
                    k = self.params.kernel_size,
                    g = self.params.gamma
                ))
                .small()
                .color(Color32::from_gray(220)),
            );
        });
    }

    fn ui_select_button(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(
            RichText::new(format!("{} Select image…", icons::ICON_OPEN)).color(Color32::WHITE),
        )
        .fill(SELECT_FILL)
        .min_size(egui::vec2(CONTROL_WIDTH, 0.0));
        if ui
            .add(button)
            .on_hover_text("Choose an image file (Ctrl+O). You can also drop a file here.")
            .clicked()
        {
            self.open_image_dialog();
        }
    }

    fn ui_algorithm_combo(&mut self, ui: &mut egui::Ui) {
        ui.scope(|ui| {
            let widgets = &mut ui.visuals_mut().widgets;
            widgets.inactive.weak_bg_fill = COMBO_FILL;
            widgets.hovered.weak_bg_fill = COMBO_HOVER_FILL;
            widgets.inactive.fg_stroke.color = Color32::WHITE;
            egui::ComboBox::from_id_salt("algorithm_combo")
                .selected_text(self.algorithm.label())
                .width(CONTROL_WIDTH)
                .show_ui(ui, |ui| {
                    for algorithm in Algorithm::ALL {
                        ui.selectable_value(&mut self.algorithm, algorithm, algorithm.label())
                            .on_hover_text(algorithm.description());
                    }
                })
                .response
                .on_hover_text("Filter to apply");
        });
    }

    fn ui_process_button(&mut self, ui: &mut egui::Ui) {
        let has_image = self.image_path.is_some();
        let button = egui::Button::new(
            RichText::new(format!("{} Process", icons::ICON_PROCESS)).color(Color32::WHITE),
        )
        .fill(PROCESS_FILL)
        .min_size(egui::vec2(CONTROL_WIDTH, 0.0));
        let hover = if has_image {
            "Apply the selected filter (Ctrl+Enter)"
        } else {
            "Select an image first"
        };
        if ui.add(button).on_hover_text(hover).clicked() {
            self.process_selected(ui.ctx());
        }
    }
}
