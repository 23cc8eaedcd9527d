// File: crates/chart-core/src/error.rs
// Summary: Error type shared by rendering, normalization and configuration checks.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Parameters that cannot produce a chart (zero DPI, negative spread, ...).
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode PNG")]
    Encode,

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("chart has no finite values to plot")]
    EmptyChart,

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
