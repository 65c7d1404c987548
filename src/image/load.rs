use crate::config::ImageLimits;
use crate::error::{ProcessError, ProcessResult};
use image::{GenericImageView, GrayImage, ImageReader, Limits};
use std::path::Path;

/// Load and decode an image from a filesystem path, discarding color information.
pub fn decode_gray_from_path(limits: &ImageLimits, path: &Path) -> ProcessResult<GrayImage> {
    let io_err = |source| ProcessError::Load {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;

    let il = limits.sanitized();
    let mut decode_limits = Limits::default();
    decode_limits.max_image_width = Some(il.image_dim);
    decode_limits.max_image_height = Some(il.image_dim);
    decode_limits.max_alloc = Some(il.alloc_bytes);
    reader.limits(decode_limits);

    let img = reader.decode().map_err(|source| ProcessError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    if u64::from(width) * u64::from(height) > il.total_pixels {
        return Err(ProcessError::TooLarge {
            width,
            height,
            limit: il.total_pixels,
        });
    }

    log::debug!("Decoded {} ({width}x{height})", path.display());
    Ok(img.to_luma8())
}
