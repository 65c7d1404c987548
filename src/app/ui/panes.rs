use super::super::GrayscopeApp;
use egui::{ViewportBuilder, ViewportClass, ViewportId};

/// What the user asked of a result pane this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaneAction {
    Keep,
    Close,
}

impl GrayscopeApp {
    /// Show every open result pane in its own viewport and drop the ones closed this frame.
    pub(crate) fn ui_result_panes(&mut self, ctx: &egui::Context) {
        let mut closed: Vec<ViewportId> = Vec::new();

        for pane in &self.panes {
            let size = pane.inner_size();
            let texture_id = pane.texture.id();
            let builder = ViewportBuilder::default()
                .with_title(pane.title.as_str())
                .with_inner_size(size)
                .with_resizable(false);

            let action = ctx.show_viewport_immediate(pane.viewport_id, builder, |ui, class| {
                ui_pane_contents(ui, class, egui::Image::new((texture_id, size)))
            });
            if action == PaneAction::Close {
                closed.push(pane.viewport_id);
            }
        }

        if !closed.is_empty() {
            self.panes.retain(|p| !closed.contains(&p.viewport_id));
            log::debug!("Closed {} result pane(s)", closed.len());
        }
    }
}

/// Draw one pane's image. `ui` already belongs to the pane: its own native
/// window, or a `Window` inside the main one when viewports are embedded.
pub(crate) fn ui_pane_contents(
    ui: &mut egui::Ui,
    class: ViewportClass,
    image: egui::Image<'_>,
) -> PaneAction {
    let mut close_clicked = false;
    if class == ViewportClass::EmbeddedWindow {
        // Embedded windows have no title-bar close button.
        ui.add(image);
        close_clicked = ui.button("Close").clicked();
    } else {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show_inside(ui, |ui| ui.add(image));
    }
    if close_clicked || ui.input(|i| i.viewport().close_requested()) {
        PaneAction::Close
    } else {
        PaneAction::Keep
    }
}
