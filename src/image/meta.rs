use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata describing the selected image file.
#[derive(Debug, Clone)]
pub struct ImageMeta {
    path: PathBuf,
    byte_len: Option<u64>,
    last_modified: Option<SystemTime>,
}

impl ImageMeta {
    /// Build metadata from a filesystem path (size and modified time when available).
    pub fn from_path(path: &Path) -> Self {
        let metadata = std::fs::metadata(path).ok();
        let (byte_len, last_modified) = metadata.map_or((None, None), |meta| {
            (Some(meta.len()), meta.modified().ok())
        });
        Self {
            path: path.to_owned(),
            byte_len,
            last_modified,
        }
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .map_or_else(|| self.path.display().to_string(), ToOwned::to_owned)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One-line description for the status area.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.display_name()];
        match self.byte_len {
            Some(bytes) => parts.push(human_readable_bytes(bytes)),
            None => parts.push("unreadable".to_string()),
        }
        if let Some(time) = self.last_modified {
            parts.push(format_system_time(time));
        }
        parts.join(" · ")
    }
}

/// Format a byte count with binary units (KiB, MiB, ...).
pub fn human_readable_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit_idx = 0;
    while value >= 1024.0 && unit_idx < UNITS.len() - 1 {
        value /= 1024.0;
        unit_idx += 1;
    }
    if unit_idx == 0 {
        format!("{bytes} {}", UNITS[unit_idx])
    } else {
        format!("{value:.2} {}", UNITS[unit_idx])
    }
}

/// Format a `SystemTime` as a UTC timestamp string.
pub fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = DateTime::from(time);
    datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn byte_units() {
        assert_eq!(human_readable_bytes(512), "512 B");
        assert_eq!(human_readable_bytes(1536), "1.50 KiB");
        assert_eq!(human_readable_bytes(3 * 1024 * 1024), "3.00 MiB");
    }

    #[test]
    fn epoch_formats_as_utc() {
        let t = UNIX_EPOCH + Duration::from_secs(86_400);
        assert_eq!(format_system_time(t), "1970-01-02 00:00:00 UTC");
    }

    #[test]
    fn missing_file_summary_marks_unreadable() {
        let meta = ImageMeta::from_path(Path::new("/definitely/not/here.png"));
        assert_eq!(meta.display_name(), "here.png");
        assert!(meta.byte_len.is_none());
        assert_eq!(meta.summary(), "here.png · unreadable");
    }
}
