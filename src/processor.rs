//! Algorithm selection and the load → grayscale → transform entry point.

use crate::config::ImageLimits;
use crate::error::{ProcessError, ProcessResult};
use crate::filters;
use crate::image::decode_gray_from_path;
use image::GrayImage;
use std::fmt;
use std::path::PathBuf;

/// One of the six available transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Median,
    NoiseReduction,
    Contrast,
    Stretch,
    MaxMin,
    Midpoint,
}

impl Algorithm {
    pub const ALL: [Self; 6] = [
        Self::Median,
        Self::NoiseReduction,
        Self::Contrast,
        Self::Stretch,
        Self::MaxMin,
        Self::Midpoint,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Median => "Median Filter",
            Self::NoiseReduction => "Noise Reduction",
            Self::Contrast => "Contrast",
            Self::Stretch => "Stretch",
            Self::MaxMin => "Max - Min Filter",
            Self::Midpoint => "Midpoint Filter",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Median => "Median of each kernel window",
            Self::NoiseReduction => "Gaussian blur, sigma derived from kernel size",
            Self::Contrast => "Adaptive histogram equalization (CLAHE)",
            Self::Stretch => "Gamma curve relative to the brightest pixel",
            Self::MaxMin => "Dilation and erosion, shown side by side",
            Self::Midpoint => "Mean of local maximum and minimum",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters shared by every transform of one processing action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub kernel_size: u32,
    pub gamma: f64,
    pub clip_limit: f64,
    pub tile_grid: [u32; 2],
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            gamma: 1.5,
            clip_limit: 2.0,
            tile_grid: [8, 8],
        }
    }
}

impl FilterParams {
    pub fn validate(&self) -> ProcessResult<()> {
        filters::validate_kernel_size(self.kernel_size)?;
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ProcessError::invalid(format!(
                "gamma must be a positive number, got {}",
                self.gamma
            )));
        }
        if !self.clip_limit.is_finite() || self.clip_limit <= 0.0 {
            return Err(ProcessError::invalid(format!(
                "clip limit must be positive, got {}",
                self.clip_limit
            )));
        }
        if self.tile_grid.contains(&0) {
            return Err(ProcessError::invalid("tile grid must be at least 1x1"));
        }
        Ok(())
    }
}

/// Result of a transform: most produce one image, max-min produces two.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutput {
    Single(GrayImage),
    Pair { max: GrayImage, min: GrayImage },
}

impl FilterOutput {
    /// Output images with an optional part label ("max"/"min").
    pub fn parts(&self) -> Vec<(Option<&'static str>, &GrayImage)> {
        match self {
            Self::Single(img) => vec![(None, img)],
            Self::Pair { max, min } => vec![(Some("max"), max), (Some("min"), min)],
        }
    }
}

/// Grayscale input alongside the transform output.
#[derive(Debug, Clone)]
pub struct ProcessedImages {
    pub original: GrayImage,
    pub output: FilterOutput,
}

/// Loads one image file and applies transforms with fixed parameters.
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    image_path: PathBuf,
    params: FilterParams,
    limits: ImageLimits,
}

impl ImageProcessor {
    pub fn new(image_path: impl Into<PathBuf>, params: FilterParams) -> ProcessResult<Self> {
        params.validate()?;
        Ok(Self {
            image_path: image_path.into(),
            params,
            limits: ImageLimits::default(),
        })
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ImageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn load_gray(&self) -> ProcessResult<GrayImage> {
        decode_gray_from_path(&self.limits, &self.image_path)
    }

    /// Load the file, convert to grayscale and run `algorithm` on it.
    pub fn apply_filter(&self, algorithm: Algorithm) -> ProcessResult<ProcessedImages> {
        let original = self.load_gray()?;
        let output = self.apply_to(&original, algorithm)?;
        log::info!(
            "Applied {algorithm} to {} ({}x{})",
            self.image_path.display(),
            original.width(),
            original.height()
        );
        Ok(ProcessedImages { original, output })
    }

    pub fn apply_to(&self, gray: &GrayImage, algorithm: Algorithm) -> ProcessResult<FilterOutput> {
        Ok(match algorithm {
            Algorithm::Median => FilterOutput::Single(self.median(gray)?),
            Algorithm::NoiseReduction => FilterOutput::Single(self.noise_reduction(gray)?),
            Algorithm::Contrast => FilterOutput::Single(self.contrast(gray)?),
            Algorithm::Stretch => FilterOutput::Single(self.stretch(gray)?),
            Algorithm::MaxMin => {
                let (max, min) = self.max_min(gray)?;
                FilterOutput::Pair { max, min }
            }
            Algorithm::Midpoint => FilterOutput::Single(self.midpoint(gray)?),
        })
    }

    pub fn median(&self, gray: &GrayImage) -> ProcessResult<GrayImage> {
        filters::median_filter(gray, self.params.kernel_size)
    }

    pub fn noise_reduction(&self, gray: &GrayImage) -> ProcessResult<GrayImage> {
        filters::gaussian_blur(gray, self.params.kernel_size)
    }

    pub fn contrast(&self, gray: &GrayImage) -> ProcessResult<GrayImage> {
        filters::clahe(gray, self.params.clip_limit, self.params.tile_grid)
    }

    pub fn stretch(&self, gray: &GrayImage) -> ProcessResult<GrayImage> {
        filters::gamma_stretch(gray, self.params.gamma)
    }

    pub fn max_min(&self, gray: &GrayImage) -> ProcessResult<(GrayImage, GrayImage)> {
        filters::max_min_filter(gray, self.params.kernel_size)
    }

    pub fn midpoint(&self, gray: &GrayImage) -> ProcessResult<GrayImage> {
        filters::midpoint_filter(gray, self.params.kernel_size)
    }
}
