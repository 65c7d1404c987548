use super::GrayscopeApp;
use egui::Context;
use egui_file_dialog::{DialogState, FileDialog};
use std::path::{Path, PathBuf};

enum DialogOutcome {
    Pending,
    Picked(PathBuf),
    Cancelled,
    Closed,
}

impl GrayscopeApp {
    pub(crate) fn open_image_dialog(&mut self) {
        let mut dialog = Self::make_open_dialog(self.last_image_dir.as_deref());
        dialog.pick_file();
        self.active_dialog = Some(dialog);
    }

    pub(crate) fn poll_open_dialog(&mut self, ctx: &Context) {
        let outcome = match self.active_dialog.as_mut() {
            None => return,
            Some(dialog) => {
                dialog.update(ctx);
                if let Some(path) = dialog.take_picked() {
                    DialogOutcome::Picked(path)
                } else {
                    match dialog.state() {
                        DialogState::Cancelled => DialogOutcome::Cancelled,
                        DialogState::Closed => DialogOutcome::Closed,
                        _ => DialogOutcome::Pending,
                    }
                }
            }
        };

        match outcome {
            DialogOutcome::Pending => {}
            DialogOutcome::Picked(path) => {
                self.active_dialog = None;
                self.select_image(path);
            }
            DialogOutcome::Cancelled => {
                self.active_dialog = None;
                self.set_status("Selection canceled.");
            }
            DialogOutcome::Closed => self.active_dialog = None,
        }
    }

    pub(crate) fn remember_image_dir_from_path(&mut self, path: &Path) {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.last_image_dir = Some(dir);
    }

    pub(crate) fn make_open_dialog(initial_dir: Option<&Path>) -> FileDialog {
        // Keep in sync with enabled `image` crate features.
        let mut dialog = FileDialog::new()
            .title("Select image")
            .add_file_filter_extensions(
                "All images",
                vec![
                    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tga", "tiff", "tif", "pnm",
                    "pbm", "pgm", "ppm", "hdr", "dds",
                ],
            )
            .add_file_filter_extensions("PNG", vec!["png"])
            .add_file_filter_extensions("JPEG/JPG", vec!["jpg", "jpeg"])
            .add_file_filter_extensions("BMP", vec!["bmp"])
            .add_file_filter_extensions("TIFF", vec!["tiff", "tif"])
            .default_file_filter("All images");
        if let Some(dir) = initial_dir {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog
    }
}
