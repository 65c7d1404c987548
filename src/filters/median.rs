use super::validate_kernel_size;
use crate::error::ProcessResult;
use image::GrayImage;

/// Replace each pixel with the median of its `kernel_size`×`kernel_size` window.
///
/// Samples past the edge take the value of the nearest border pixel.
pub fn median_filter(image: &GrayImage, kernel_size: u32) -> ProcessResult<GrayImage> {
    validate_kernel_size(kernel_size)?;
    if kernel_size == 1 || image.width() == 0 || image.height() == 0 {
        return Ok(image.clone());
    }
    let radius = kernel_size / 2;
    Ok(imageproc::filter::median_filter(image, radius, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{constant, gray, noise};

    #[test]
    fn constant_image_is_unchanged() {
        let img = constant(4, 4, 100);
        let out = median_filter(&img, 3).expect("median");
        assert_eq!(out, img);
    }

    #[test]
    fn removes_isolated_spike() {
        let mut data = vec![10u8; 25];
        data[12] = 250;
        let out = median_filter(&gray(5, 5, &data), 3).expect("median");
        assert!(out.as_raw().iter().all(|&v| v == 10));
    }

    #[test]
    fn matches_brute_force_with_replicated_border() {
        let img = noise(9, 7, 17);
        let out = median_filter(&img, 5).expect("median");
        let (w, h) = img.dimensions();
        for y in 0..h as isize {
            for x in 0..w as isize {
                let mut window = Vec::new();
                for dy in -2..=2 {
                    for dx in -2..=2 {
                        let sx = (x + dx).clamp(0, w as isize - 1) as u32;
                        let sy = (y + dy).clamp(0, h as isize - 1) as u32;
                        window.push(img.get_pixel(sx, sy)[0]);
                    }
                }
                window.sort_unstable();
                assert_eq!(out.get_pixel(x as u32, y as u32)[0], window[12]);
            }
        }
    }

    #[test]
    fn kernel_one_is_identity_and_even_kernel_fails() {
        let img = noise(6, 3, 5);
        assert_eq!(median_filter(&img, 1).expect("k=1"), img);
        assert!(median_filter(&img, 4).is_err());
    }

    #[test]
    fn kernel_larger_than_image_keeps_dimensions() {
        let img = noise(3, 2, 9);
        let out = median_filter(&img, 7).expect("median");
        assert_eq!(out.dimensions(), (3, 2));
    }
}
