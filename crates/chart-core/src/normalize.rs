// File: crates/chart-core/src/normalize.rs
// Summary: Post-render pass that forces a PNG on disk to an exact pixel size.

use std::path::Path;

use image::imageops::FilterType;
use image::{ImageError, ImageFormat};
use tracing::{debug, info};

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// The file already had the requested size and was left untouched.
    Unchanged,
    /// The file was resampled from `from` and overwritten.
    Resized { from: (u32, u32) },
}

/// Reopen the image at `path` and, unless it is exactly `target` (width, height),
/// resample it with a Lanczos filter to that size and overwrite it as PNG.
pub fn normalize_png(path: impl AsRef<Path>, target: (u32, u32)) -> Result<NormalizeOutcome> {
    let path = path.as_ref();
    let (tw, th) = target;
    if tw == 0 || th == 0 {
        return Err(ChartError::Config(format!("target size must be non-zero, got {}x{}", tw, th)));
    }

    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(e) => ChartError::io(path, e),
        other => ChartError::Decode { path: path.to_path_buf(), source: other },
    })?;

    let from = (img.width(), img.height());
    if from == target {
        debug!(path = %path.display(), width = tw, height = th, "image already at target size");
        return Ok(NormalizeOutcome::Unchanged);
    }

    info!(
        path = %path.display(),
        from_width = from.0,
        from_height = from.1,
        width = tw,
        height = th,
        "resizing image to target size"
    );
    let resized = img.resize_exact(tw, th, FilterType::Lanczos3);
    resized
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ChartError::Save { path: path.to_path_buf(), source })?;
    Ok(NormalizeOutcome::Resized { from })
}
