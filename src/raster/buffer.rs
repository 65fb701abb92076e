use crate::foundation::core::{Canvas, Rgba8};

/// A raster frame as RGBA8 bytes, ready for upload to a display surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 bytes, tightly packed, row-major, row 0 first.
    pub data: Vec<u8>,
}

/// Width×height grid of colors with bounds-checked access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    canvas: Canvas,
    data: Vec<Rgba8>,
}

/// Hole mask raster: mask color everywhere except transparent holes and filled pixels.
pub type RasterMask = PixelBuffer;

/// Paint tool raster: last write wins per cell.
pub type PaintBuffer = PixelBuffer;

impl PixelBuffer {
    /// Allocate a buffer with every cell set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let canvas = Canvas::new(width, height);
        Self {
            canvas,
            data: vec![color; canvas.pixel_count()],
        }
    }

    /// Buffer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.canvas.index_of(x, y).map(|i| self.data[i])
    }

    /// Write `color` at `(x, y)`. Returns `false` (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, color: Rgba8) -> bool {
        match self.canvas.index_of(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }

    /// Set every cell to `color`.
    pub fn fill(&mut self, color: Rgba8) {
        self.data.fill(color);
    }

    /// All cells, row-major.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.data
    }

    /// Number of cells matching `pred`.
    pub fn count_where(&self, pred: impl Fn(Rgba8) -> bool) -> usize {
        self.data.iter().filter(|&&c| pred(c)).count()
    }

    /// Copy the buffer out as packed RGBA8 bytes.
    pub fn to_frame(&self) -> FrameRGBA {
        let mut data = Vec::with_capacity(self.data.len() * 4);
        for c in &self.data {
            data.extend_from_slice(&c.to_array());
        }
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
