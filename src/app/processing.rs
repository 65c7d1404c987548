use super::GrayscopeApp;
use crate::image::{ImageMeta, ResultPane};
use crate::processor::{Algorithm, ImageProcessor, ProcessedImages};
use egui::Context;
use image::GrayImage;
use std::path::PathBuf;

pub const ORIGINAL_TITLE: &str = "Original Image";

/// Pane title for one output of `algorithm`; `part` distinguishes paired outputs.
pub fn result_title(algorithm: Algorithm, part: Option<&str>) -> String {
    match part {
        Some(part) => format!("Processed with {} ({part})", algorithm.label()),
        None => format!("Processed with {}", algorithm.label()),
    }
}

impl GrayscopeApp {
    pub(crate) fn select_image(&mut self, path: PathBuf) {
        self.remember_image_dir_from_path(&path);
        let meta = ImageMeta::from_path(&path);
        self.set_status(format!("Selected {}", meta.display_name()));
        log::info!("Selected image {}", path.display());
        self.image_meta = Some(meta);
        self.image_path = Some(path);
    }

    /// Run the selected algorithm on the selected file and open result panes.
    ///
    /// Returns the number of panes opened. Without a selected file this does nothing.
    pub(crate) fn process_selected(&mut self, ctx: &Context) -> usize {
        let Some(path) = self.image_path.clone() else {
            log::debug!("Process requested without a selected image");
            return 0;
        };
        let algorithm = self.algorithm;
        let limits = self.config.effective_image_limits();
        let result = ImageProcessor::new(&path, self.params)
            .map(|processor| processor.with_limits(limits))
            .and_then(|processor| processor.apply_filter(algorithm));

        match result {
            Ok(images) => {
                let opened = self.open_result_panes(ctx, algorithm, &images);
                self.set_status(format!("{algorithm}: opened {opened} windows."));
                opened
            }
            Err(err) => {
                log::warn!("{algorithm} failed for {}: {err}", path.display());
                self.set_status(format!("{}: {err}", err.kind_label()));
                0
            }
        }
    }

    fn open_result_panes(
        &mut self,
        ctx: &Context,
        algorithm: Algorithm,
        images: &ProcessedImages,
    ) -> usize {
        let mut opened = vec![self.make_pane(ctx, ORIGINAL_TITLE.to_string(), &images.original)];
        for (part, image) in images.output.parts() {
            opened.push(self.make_pane(ctx, result_title(algorithm, part), image));
        }
        let count = opened.len();
        self.panes.extend(opened);
        count
    }

    fn make_pane(&mut self, ctx: &Context, title: String, image: &GrayImage) -> ResultPane {
        let id = self.next_pane_id;
        self.next_pane_id += 1;
        ResultPane::from_gray(ctx, id, title, image)
    }
}
