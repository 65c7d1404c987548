use super::validate_kernel_size;
use crate::error::{ProcessError, ProcessResult};
use image::GrayImage;
use imageproc::morphology::{self, Mask};

/// Local maximum over a `kernel_size`×`kernel_size` square.
pub fn dilate(image: &GrayImage, kernel_size: u32) -> ProcessResult<GrayImage> {
    let mask = square_mask(kernel_size)?;
    if image.width() == 0 || image.height() == 0 {
        return Ok(image.clone());
    }
    Ok(morphology::grayscale_dilate(image, &mask))
}

/// Local minimum over a `kernel_size`×`kernel_size` square.
pub fn erode(image: &GrayImage, kernel_size: u32) -> ProcessResult<GrayImage> {
    let mask = square_mask(kernel_size)?;
    if image.width() == 0 || image.height() == 0 {
        return Ok(image.clone());
    }
    Ok(morphology::grayscale_erode(image, &mask))
}

/// Dilation and erosion of the same input, returned as `(max, min)`.
pub fn max_min_filter(image: &GrayImage, kernel_size: u32) -> ProcessResult<(GrayImage, GrayImage)> {
    Ok((dilate(image, kernel_size)?, erode(image, kernel_size)?))
}

/// Pixelwise floor of the mean of dilation and erosion.
pub fn midpoint_filter(image: &GrayImage, kernel_size: u32) -> ProcessResult<GrayImage> {
    let (max, min) = max_min_filter(image, kernel_size)?;
    let mut out = max;
    let buf: &mut [u8] = &mut out;
    for (hi, &lo) in buf.iter_mut().zip(min.as_raw()) {
        *hi = u8::try_from((u16::from(*hi) + u16::from(lo)) / 2).unwrap_or(u8::MAX);
    }
    Ok(out)
}

/// Square structuring element; mask points outside the image are skipped.
fn square_mask(kernel_size: u32) -> ProcessResult<Mask> {
    validate_kernel_size(kernel_size)?;
    let radius = u8::try_from(kernel_size / 2).map_err(|_| {
        ProcessError::invalid(format!("kernel size {kernel_size} is too large"))
    })?;
    Ok(Mask::square(radius))
}
