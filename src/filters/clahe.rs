use super::border::reflect_101;
use super::map_gray_rows;
use crate::error::{ProcessError, ProcessResult};
use crate::util::{rounded_u8, u32_to_usize, usize_to_isize};
use image::GrayImage;

const BINS: usize = 256;

/// Contrast-limited adaptive histogram equalization.
///
/// The image is split into a `grid[0]`×`grid[1]` tile grid. Each tile's
/// histogram is clipped at `clip_limit` times the mean bin count, the excess
/// is spread over all bins, and the resulting CDF becomes the tile's lookup
/// table. Output pixels blend the four nearest tile tables bilinearly.
pub fn clahe(image: &GrayImage, clip_limit: f64, grid: [u32; 2]) -> ProcessResult<GrayImage> {
    if !clip_limit.is_finite() || clip_limit <= 0.0 {
        return Err(ProcessError::invalid(format!(
            "clip limit must be positive, got {clip_limit}"
        )));
    }
    if grid[0] == 0 || grid[1] == 0 {
        return Err(ProcessError::invalid(format!(
            "tile grid must be at least 1x1, got {}x{}",
            grid[0], grid[1]
        )));
    }
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Ok(image.clone());
    }

    let width = u32_to_usize(w);
    let height = u32_to_usize(h);
    let tiles_x = u32_to_usize(grid[0]);
    let tiles_y = u32_to_usize(grid[1]);

    // Both axes are padded whenever either one is uneven.
    let (ext_w, ext_h) = if width % tiles_x == 0 && height % tiles_y == 0 {
        (width, height)
    } else {
        (
            width + tiles_x - width % tiles_x,
            height + tiles_y - height % tiles_y,
        )
    };
    let tile_w = ext_w / tiles_x;
    let tile_h = ext_h / tiles_y;
    let src = image.as_raw();

    let luts: Vec<[u8; BINS]> = (0..tiles_x * tiles_y)
        .map(|idx| {
            let (tx, ty) = (idx % tiles_x, idx / tiles_x);
            let mut hist = [0usize; BINS];
            for y in ty * tile_h..(ty + 1) * tile_h {
                let row = reflect_101(usize_to_isize(y), height) * width;
                for x in tx * tile_w..(tx + 1) * tile_w {
                    let col = reflect_101(usize_to_isize(x), width);
                    hist[usize::from(src[row + col])] += 1;
                }
            }
            tile_lut(&mut hist, tile_w * tile_h, clip_limit)
        })
        .collect();

    let x_weights: Vec<Blend> = (0..width).map(|x| Blend::new(x, tile_w, tiles_x)).collect();

    Ok(map_gray_rows(image, |y, row| {
        let by = Blend::new(y, tile_h, tiles_y);
        let top = &luts[by.lo * tiles_x..(by.lo + 1) * tiles_x];
        let bottom = &luts[by.hi * tiles_x..(by.hi + 1) * tiles_x];
        for (x, out) in row.iter_mut().enumerate() {
            let bx = &x_weights[x];
            let v = usize::from(src[y * width + x]);
            let upper = bx.mix(top[bx.lo][v], top[bx.hi][v]);
            let lower = bx.mix(bottom[bx.lo][v], bottom[bx.hi][v]);
            *out = rounded_u8(upper.mul_add(1.0 - by.t, lower * by.t));
        }
    }))
}

/// Clip `hist`, redistribute the excess and turn the CDF into a lookup table.
fn tile_lut(hist: &mut [usize; BINS], tile_area: usize, clip_limit: f64) -> [u8; BINS] {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let clip = ((clip_limit * tile_area as f64 / BINS as f64) as usize).max(1);

    let mut clipped = 0;
    for bin in hist.iter_mut() {
        if *bin > clip {
            clipped += *bin - clip;
            *bin = clip;
        }
    }

    let batch = clipped / BINS;
    let mut residual = clipped - batch * BINS;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    if residual > 0 {
        let step = (BINS / residual).max(1);
        let mut i = 0;
        while i < BINS && residual > 0 {
            hist[i] += 1;
            residual -= 1;
            i += step;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = (BINS - 1) as f64 / tile_area as f64;
    let mut lut = [0u8; BINS];
    let mut sum = 0usize;
    for (slot, &count) in lut.iter_mut().zip(hist.iter()) {
        sum += count;
        #[allow(clippy::cast_precision_loss)]
        let scaled = sum as f64 * scale;
        *slot = rounded_u8(scaled);
    }
    lut
}

/// Neighboring tile indices and interpolation weight along one axis.
struct Blend {
    lo: usize,
    hi: usize,
    t: f64,
}

impl Blend {
    fn new(pos: usize, tile: usize, tiles: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let f = pos as f64 / tile as f64 - 0.5;
        let base = f.floor();
        let t = f - base;
        #[allow(clippy::cast_possible_truncation)]
        let lo = base as isize;
        let last = tiles - 1;
        Self {
            lo: usize::try_from(lo).map_or(0, |v| v.min(last)),
            hi: usize::try_from(lo + 1).map_or(0, |v| v.min(last)),
            t,
        }
    }

    fn mix(&self, a: u8, b: u8) -> f64 {
        f64::from(a).mul_add(1.0 - self.t, f64::from(b) * self.t)
    }
}
