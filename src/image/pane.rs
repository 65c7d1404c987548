use egui::{ColorImage, Context, TextureHandle, TextureOptions, ViewportId};
use image::GrayImage;

/// Convert a grayscale buffer into an egui image for upload.
pub fn gray_to_color_image(gray: &GrayImage) -> ColorImage {
    let (w, h) = gray.dimensions();
    ColorImage::from_gray([w as usize, h as usize], gray.as_raw())
}

/// A single static image shown in its own native viewport.
pub struct ResultPane {
    pub viewport_id: ViewportId,
    pub title: String,
    pub size: [usize; 2],
    pub texture: TextureHandle,
}

impl ResultPane {
    pub fn from_gray(ctx: &Context, id: u64, title: impl Into<String>, gray: &GrayImage) -> Self {
        let title = title.into();
        let pixels = gray_to_color_image(gray);
        let size = pixels.size;
        let texture = ctx.load_texture(format!("pane_{id}"), pixels, TextureOptions::NEAREST);
        Self {
            viewport_id: ViewportId::from_hash_of(("result_pane", id)),
            title,
            size,
            texture,
        }
    }

    /// Inner size of the viewport in points; one point per pixel.
    pub fn inner_size(&self) -> egui::Vec2 {
        egui::vec2(
            crate::util::safe_usize_to_f32(self.size[0]).max(1.0),
            crate::util::safe_usize_to_f32(self.size[1]).max(1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn pane_matches_image_dimensions() {
        let ctx = Context::default();
        let gray = GrayImage::from_pixel(5, 3, Luma([42]));
        let pane = ResultPane::from_gray(&ctx, 1, "Original Image", &gray);
        assert_eq!(pane.size, [5, 3]);
        assert_eq!(pane.title, "Original Image");
        assert_eq!(pane.inner_size(), egui::vec2(5.0, 3.0));
    }

    #[test]
    fn gray_conversion_keeps_intensity() {
        let gray = GrayImage::from_raw(2, 1, vec![0, 255]).expect("raw buffer");
        let color = gray_to_color_image(&gray);
        assert_eq!(color.size, [2, 1]);
        assert_eq!(color.pixels[0].to_array(), [0, 0, 0, 255]);
        assert_eq!(color.pixels[1].to_array(), [255, 255, 255, 255]);
    }
}
