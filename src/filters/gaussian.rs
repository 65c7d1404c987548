use super::border::reflect_101;
use super::{fill_rows, map_gray_rows, validate_kernel_size};
use crate::error::ProcessResult;
use crate::util::{rounded_u8, u32_to_usize, usize_to_isize};
use image::GrayImage;

/// Binomial tables used for small kernels when sigma is derived automatically.
const SMALL_KERNELS: [&[f64]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
    ],
];

/// Normalized 1-D Gaussian weights of length `size`.
///
/// A non-positive `sigma` derives it from the size as
/// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`; sizes up to 7 then use fixed
/// binomial tables.
pub fn gaussian_kernel_1d(size: u32, sigma: f64) -> Vec<f64> {
    let n = u32_to_usize(size.max(1));
    if sigma <= 0.0 && n % 2 == 1 && n <= 7 {
        return SMALL_KERNELS[n / 2].to_vec();
    }
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        (f64::from(size) - 1.0).mul_add(0.5, -1.0).mul_add(0.3, 0.8)
    };
    let scale = -0.5 / (sigma * sigma);
    let center = (f64::from(size) - 1.0) * 0.5;
    let mut weights: Vec<f64> = (0..size)
        .map(|i| {
            let x = f64::from(i) - center;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Separable Gaussian blur with a `kernel_size`×`kernel_size` kernel.
///
/// Sigma is derived from the kernel size and borders use reflect-101.
pub fn gaussian_blur(image: &GrayImage, kernel_size: u32) -> ProcessResult<GrayImage> {
    validate_kernel_size(kernel_size)?;
    let (w, h) = image.dimensions();
    if kernel_size == 1 || w == 0 || h == 0 {
        return Ok(image.clone());
    }

    let width = u32_to_usize(w);
    let height = u32_to_usize(h);
    let weights = gaussian_kernel_1d(kernel_size, 0.0);
    let radius = usize_to_isize(weights.len() / 2);
    let src = image.as_raw();

    let mut horizontal = vec![0.0f64; width * height];
    fill_rows(&mut horizontal, width, |y, row| {
        let line = &src[y * width..(y + 1) * width];
        for (x, out) in row.iter_mut().enumerate() {
            let xi = usize_to_isize(x);
            *out = weights
                .iter()
                .zip(-radius..=radius)
                .map(|(&wt, dx)| wt * f64::from(line[reflect_101(xi + dx, width)]))
                .sum();
        }
    });

    Ok(map_gray_rows(image, |y, row| {
        let yi = usize_to_isize(y);
        let rows: Vec<&[f64]> = (-radius..=radius)
            .map(|dy| {
                let sy = reflect_101(yi + dy, height);
                &horizontal[sy * width..(sy + 1) * width]
            })
            .collect();
        for (x, out) in row.iter_mut().enumerate() {
            let acc: f64 = weights
                .iter()
                .zip(&rows)
                .map(|(&wt, line)| wt * line[x])
                .sum();
            *out = rounded_u8(acc);
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{constant, gray, noise};

    #[test]
    fn kernels_are_normalized_and_symmetric() {
        for size in [1, 3, 5, 7, 9, 15] {
            let k = gaussian_kernel_1d(size, 0.0);
            assert_eq!(k.len(), size as usize);
            let sum: f64 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "size {size} sums to {sum}");
            for i in 0..k.len() {
                assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn derived_sigma_for_large_kernel() {
        // size 9 -> sigma 1.7
        let k = gaussian_kernel_1d(9, 0.0);
        let explicit = gaussian_kernel_1d(9, 1.7);
        for (a, b) in k.iter().zip(&explicit) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_image_stays_constant() {
        let img = constant(6, 5, 77);
        assert_eq!(gaussian_blur(&img, 5).expect("blur"), img);
    }

    #[test]
    fn three_tap_blur_of_a_step() {
        let img = gray(4, 1, &[0, 0, 255, 255]);
        let out = gaussian_blur(&img, 3).expect("blur");
        // Rows reflect onto themselves, so only the horizontal pass matters.
        assert_eq!(out.as_raw(), &vec![0, 64, 191, 255]);
    }

    #[test]
    fn preserves_dimensions_and_rejects_even_kernel() {
        let img = noise(11, 4, 3);
        assert_eq!(gaussian_blur(&img, 7).expect("blur").dimensions(), (11, 4));
        assert!(gaussian_blur(&img, 6).is_err());
    }
}
