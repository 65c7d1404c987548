use std::path::PathBuf;

/// Failures of a single processing action.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image too large: {width}x{height} (~{} MP) exceeds limit (~{} MP)", (u64::from(*width) * u64::from(*height)) / 1_000_000, limit / 1_000_000)]
    TooLarge { width: u32, height: u32, limit: u64 },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ProcessError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Short category label for status messages.
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Load { .. } => "Load error",
            Self::Decode { .. } => "Unsupported or corrupt image",
            Self::TooLarge { .. } => "Image too large",
            Self::InvalidParameter(_) => "Invalid parameter",
        }
    }
}

pub type ProcessResult<T> = Result<T, ProcessError>;
