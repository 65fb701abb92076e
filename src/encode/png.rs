use std::path::{Path, PathBuf};

use crate::{
    encode::sink::SurfaceSink,
    foundation::error::{HoleMaskError, HoleMaskResult},
    raster::buffer::FrameRGBA,
};

/// Write a frame as an RGBA8 PNG, creating parent directories as needed.
pub fn save_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> HoleMaskResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            HoleMaskError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| HoleMaskError::io(format!("write png '{}': {e}", path.display())))
}

/// Sink writing every uploaded frame as `<dir>/<prefix>_<index>.png`.
#[derive(Debug)]
pub struct PngSink {
    dir: PathBuf,
    prefix: String,
    next: u64,
}

impl PngSink {
    /// Write frames into `dir` with the given file name prefix.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Number of frames written so far.
    pub fn written(&self) -> u64 {
        self.next
    }

    /// Path the frame with index `idx` is written to.
    pub fn frame_path(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}_{idx:05}.png", self.prefix))
    }
}

impl SurfaceSink for PngSink {
    fn upload(&mut self, frame: &FrameRGBA) -> HoleMaskResult<()> {
        save_png(frame, self.frame_path(self.next))?;
        self.next += 1;
        Ok(())
    }

    fn finish(&mut self) -> HoleMaskResult<()> {
        tracing::debug!(frames = self.next, dir = %self.dir.display(), "png sequence written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
