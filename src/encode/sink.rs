use crate::{foundation::error::HoleMaskResult, raster::buffer::FrameRGBA};

/// Display-surface boundary: receives the raster every time it should be shown.
///
/// Frames arrive in the order they were produced. `finish` is called once after the last
/// upload.
pub trait SurfaceSink {
    /// Present one frame.
    fn upload(&mut self, frame: &FrameRGBA) -> HoleMaskResult<()>;

    /// Called once after the last frame.
    fn finish(&mut self) -> HoleMaskResult<()> {
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    frames: Vec<FrameRGBA>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in upload order.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&FrameRGBA> {
        self.frames.last()
    }

    /// Whether `finish` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SurfaceSink for InMemorySink {
    fn upload(&mut self, frame: &FrameRGBA) -> HoleMaskResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> HoleMaskResult<()> {
        self.finished = true;
        Ok(())
    }
}
