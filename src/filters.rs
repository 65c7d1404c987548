//! Spatial-domain transforms over 8-bit grayscale buffers.
//!
//! Every filter returns a new buffer with the input's dimensions; the input is
//! never modified.

mod border;
mod clahe;
mod gaussian;
mod median;
mod morph;
mod stretch;

pub use clahe::clahe;
pub use gaussian::gaussian_blur;
pub use median::median_filter;
pub use morph::{max_min_filter, midpoint_filter};
pub use stretch::gamma_stretch;

use crate::error::{ProcessError, ProcessResult};
use image::GrayImage;
use rayon::prelude::*;

/// Minimum pixel count before parallelizing per-row work.
const PARALLEL_PIXEL_THRESHOLD: usize = 262_144; // 512x512

/// Largest accepted kernel edge.
pub const MAX_KERNEL_SIZE: u32 = 255;

/// Kernels must be odd so the window has a center pixel.
pub fn validate_kernel_size(kernel_size: u32) -> ProcessResult<()> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(ProcessError::invalid(format!(
            "kernel size must be odd and at least 1, got {kernel_size}"
        )));
    }
    if kernel_size > MAX_KERNEL_SIZE {
        return Err(ProcessError::invalid(format!(
            "kernel size must be at most {MAX_KERNEL_SIZE}, got {kernel_size}"
        )));
    }
    Ok(())
}

/// Fill `out` row by row; `f` receives the row index and the row slice.
fn fill_rows<T>(out: &mut [T], width: usize, f: impl Fn(usize, &mut [T]) + Sync + Send)
where
    T: Send,
{
    if width == 0 {
        return;
    }
    if out.len() >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        for (y, row) in out.chunks_mut(width).enumerate() {
            f(y, row);
        }
    }
}

/// Allocate a buffer shaped like `like` and fill it row by row.
fn map_gray_rows(
    like: &GrayImage,
    f: impl Fn(usize, &mut [u8]) + Sync + Send,
) -> GrayImage {
    let (w, h) = like.dimensions();
    let mut out = GrayImage::new(w, h);
    let buf: &mut [u8] = &mut out;
    fill_rows(buf, crate::util::u32_to_usize(w), f);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_and_zero_kernels_are_rejected() {
        for k in [0, 2, 4, 10] {
            assert!(matches!(
                validate_kernel_size(k),
                Err(ProcessError::InvalidParameter(_))
            ));
        }
        assert!(validate_kernel_size(MAX_KERNEL_SIZE + 2).is_err());
        for k in [1, 3, 5, 7, 31] {
            assert!(validate_kernel_size(k).is_ok());
        }
    }

    #[test]
    fn large_buffers_fill_every_row() {
        let width = 1024;
        let mut out = vec![0usize; width * 300];
        fill_rows(&mut out, width, |y, row| row.fill(y + 1));
        assert!(out.chunks(width).enumerate().all(|(y, row)| row.iter().all(|&v| v == y + 1)));
    }
}
