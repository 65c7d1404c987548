use crate::error::{ProcessError, ProcessResult};
use crate::util::rounded_u8;
use image::GrayImage;

/// Power-law stretch relative to the brightest pixel: `255 * (v / max)^gamma`.
///
/// An all-black image has no usable maximum; it is treated as 1 and the
/// output stays black.
pub fn gamma_stretch(image: &GrayImage, gamma: f64) -> ProcessResult<GrayImage> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(ProcessError::invalid(format!(
            "gamma must be a positive number, got {gamma}"
        )));
    }
    let max = image.as_raw().iter().copied().max().unwrap_or(0).max(1);
    let max = f64::from(max);
    let lut: Vec<u8> = (0..=u8::MAX)
        .map(|v| rounded_u8((f64::from(v) / max).min(1.0).powf(gamma) * 255.0))
        .collect();

    let mut out = image.clone();
    let buf: &mut [u8] = &mut out;
    for px in buf.iter_mut() {
        *px = lut[usize::from(*px)];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{constant, gray, noise};

    #[test]
    fn gamma_two_on_extremes() {
        let img = gray(2, 2, &[0, 0, 0, 255]);
        let out = gamma_stretch(&img, 2.0).expect("stretch");
        assert_eq!(out.as_raw(), &vec![0, 0, 0, 255]);
    }

    #[test]
    fn gamma_one_is_identity_when_max_is_full_scale() {
        let img = GrayImage::from_fn(16, 16, |x, y| image::Luma([(x + 16 * y) as u8]));
        assert_eq!(img.as_raw().iter().max(), Some(&255));
        let out = gamma_stretch(&img, 1.0).expect("stretch");
        assert_eq!(out, img);
    }

    #[test]
    fn gamma_one_scales_to_full_range() {
        let img = gray(3, 1, &[0, 50, 100]);
        let out = gamma_stretch(&img, 1.0).expect("stretch");
        assert_eq!(out.as_raw(), &vec![0, 128, 255]);
    }

    #[test]
    fn all_zero_image_stays_zero() {
        let out = gamma_stretch(&constant(3, 3, 0), 1.5).expect("stretch");
        assert!(out.as_raw().iter().all(|&v| v == 0));
    }

    #[test]
    fn brightest_pixel_maps_to_full_scale() {
        let img = noise(10, 10, 21);
        let max = *img.as_raw().iter().max().expect("pixels");
        let out = gamma_stretch(&img, 1.5).expect("stretch");
        for (a, b) in img.as_raw().iter().zip(out.as_raw()) {
            if *a == max {
                assert_eq!(*b, 255);
            }
        }
    }

    #[test]
    fn non_positive_gamma_is_rejected() {
        let img = constant(2, 2, 9);
        assert!(gamma_stretch(&img, 0.0).is_err());
        assert!(gamma_stretch(&img, -1.0).is_err());
        assert!(gamma_stretch(&img, f64::INFINITY).is_err());
    }
}
