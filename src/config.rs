use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

use crate::filters::validate_kernel_size;
use crate::processor::FilterParams;

const CONFIG_FILE_NAME: &str = "grayscope.toml";

/// Filter parameter defaults used for every processing action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub kernel_size: u32,
    pub gamma: f64,
    pub clip_limit: f64,
    pub tile_grid: [u32; 2],
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            gamma: 1.5,
            clip_limit: 2.0,
            tile_grid: [8, 8],
        }
    }
}

impl FilterDefaults {
    /// Pull values into ranges the filters accept, warning about every change.
    ///
    /// The kernel size is kept as configured so an even, zero or oversized
    /// value surfaces as an invalid-parameter error when processing.
    pub fn sanitized(&self) -> Self {
        if let Err(err) = validate_kernel_size(self.kernel_size) {
            log::warn!("Configured filters.kernel_size will be rejected: {err}");
        }
        let fallback = Self::default();
        let gamma = if self.gamma.is_finite() && self.gamma > 0.0 {
            self.gamma.clamp(0.05, 20.0)
        } else {
            fallback.gamma
        };
        let clip_limit = if self.clip_limit.is_finite() && self.clip_limit > 0.0 {
            self.clip_limit.min(256.0)
        } else {
            fallback.clip_limit
        };
        let tile_grid = [self.tile_grid[0].clamp(1, 64), self.tile_grid[1].clamp(1, 64)];

        if gamma.to_bits() != self.gamma.to_bits() {
            log::warn!("Configured filters.gamma {} replaced with {gamma}", self.gamma);
        }
        if clip_limit.to_bits() != self.clip_limit.to_bits() {
            log::warn!(
                "Configured filters.clip_limit {} replaced with {clip_limit}",
                self.clip_limit
            );
        }
        if tile_grid != self.tile_grid {
            log::warn!(
                "Configured filters.tile_grid {:?} replaced with {tile_grid:?}",
                self.tile_grid
            );
        }
        Self {
            kernel_size: self.kernel_size,
            gamma,
            clip_limit,
            tile_grid,
        }
    }

    pub fn params(&self) -> FilterParams {
        let s = self.sanitized();
        FilterParams {
            kernel_size: s.kernel_size,
            gamma: s.gamma,
            clip_limit: s.clip_limit,
            tile_grid: s.tile_grid,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub filters: FilterDefaults,
    pub image_limits: ImageLimits,
    pub main_window: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            filters: FilterDefaults::default(),
            image_limits: ImageLimits::default(),
            main_window: [360.0, 260.0],
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match Self::parse(&contents) {
                    Ok(cfg) => {
                        log::info!("Loaded config from {}", path.display());
                        return cfg;
                    }
                    Err(err) => {
                        log::warn!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(contents)
    }

    pub fn filter_params(&self) -> FilterParams {
        self.filters.params()
    }

    pub fn effective_image_limits(&self) -> ImageLimits {
        self.image_limits.sanitized()
    }

    pub const fn main_window_size(&self) -> [f32; 2] {
        [
            self.main_window[0].clamp(240.0, 4096.0),
            self.main_window[1].clamp(180.0, 4096.0),
        ]
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Grayscope", "Grayscope") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("grayscope")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    pub image_dim: u32,
    pub total_pixels: u64,
    pub alloc_bytes: u64,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            image_dim: 12_000,
            total_pixels: 80_000_000,       // ~80 MP
            alloc_bytes: 512 * 1024 * 1024, // 512 MiB
        }
    }
}

impl ImageLimits {
    pub fn sanitized(&self) -> Self {
        let dim = self.image_dim.clamp(64, 100_000);
        let pixels = self.total_pixels.clamp(1_000_000, 5_000_000_000); // 1 MP .. 5 GP
        let alloc = self
            .alloc_bytes
            .clamp(8 * 1024 * 1024, 8 * 1024 * 1024 * 1024); // 8 MiB .. 8 GiB
        Self {
            image_dim: dim,
            total_pixels: pixels,
            alloc_bytes: alloc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::MAX_KERNEL_SIZE;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::parse("").expect("parse empty config");
        let params = cfg.filter_params();
        assert_eq!(params.kernel_size, 5);
        assert!((params.gamma - 1.5).abs() < f64::EPSILON);
        assert!((params.clip_limit - 2.0).abs() < f64::EPSILON);
        assert_eq!(params.tile_grid, [8, 8]);
    }

    #[test]
    fn partial_filters_table_keeps_other_defaults() {
        let cfg = AppConfig::parse("[filters]\nkernel_size = 7\n").expect("parse config");
        let params = cfg.filter_params();
        assert_eq!(params.kernel_size, 7);
        assert!((params.gamma - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn sanitizing_fixes_bad_gamma_clip_and_grid() {
        let defaults = FilterDefaults {
            kernel_size: 5,
            gamma: -3.0,
            clip_limit: f64::NAN,
            tile_grid: [0, 200],
        }
        .sanitized();
        assert_eq!(defaults.kernel_size, 5);
        assert!((defaults.gamma - 1.5).abs() < f64::EPSILON);
        assert!((defaults.clip_limit - 2.0).abs() < f64::EPSILON);
        assert_eq!(defaults.tile_grid, [1, 64]);
    }

    #[test]
    fn configured_kernel_reaches_validation_unchanged() {
        for kernel_size in [4, 0, MAX_KERNEL_SIZE + 2] {
            let cfg = AppConfig::parse(&format!("[filters]\nkernel_size = {kernel_size}\n"))
                .expect("parse config");
            let params = cfg.filter_params();
            assert_eq!(params.kernel_size, kernel_size);
            assert!(matches!(
                params.validate(),
                Err(crate::error::ProcessError::InvalidParameter(_))
            ));
        }
        let cfg = AppConfig::parse("[filters]\nkernel_size = 101\n").expect("parse config");
        assert_eq!(cfg.filter_params().kernel_size, 101);
        assert!(cfg.filter_params().validate().is_ok());
    }

    #[test]
    fn image_limits_are_clamped() {
        let limits = ImageLimits {
            image_dim: 1,
            total_pixels: 1,
            alloc_bytes: 1,
        }
        .sanitized();
        assert_eq!(limits.image_dim, 64);
        assert_eq!(limits.total_pixels, 1_000_000);
        assert_eq!(limits.alloc_bytes, 8 * 1024 * 1024);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(AppConfig::parse("filters = 3").is_err());
    }
}
