use crate::{
    config::model::DrawBoardConfig,
    foundation::core::{Point, Vec2},
    foundation::error::HoleMaskResult,
    paint::canvas::{clear, local_to_texel, stamp},
    raster::buffer::{FrameRGBA, PaintBuffer},
};

/// Free-hand paint surface stamping a round brush at pointer positions.
#[derive(Clone, Debug)]
pub struct DrawBoard {
    config: DrawBoardConfig,
    buffer: PaintBuffer,
}

impl DrawBoard {
    /// Validate `config` and allocate a canvas in the clear color.
    pub fn new(config: DrawBoardConfig) -> HoleMaskResult<Self> {
        config.validate()?;
        let buffer =
            PaintBuffer::filled(config.texture_width, config.texture_height, config.clear_color);
        Ok(Self { config, buffer })
    }

    /// Reset the canvas to the clear color.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&mut self) {
        tracing::debug!(
            width = self.config.texture_width,
            height = self.config.texture_height,
            "draw board ready"
        );
        self.clear();
    }

    /// Stamp the brush under a pointer given in the surface's centered local space.
    ///
    /// Returns the number of cells written; `0` when the rectangle is degenerate or the brush
    /// lands wholly outside the canvas.
    pub fn pointer_down(&mut self, local: Point, rect_size: Vec2) -> usize {
        match local_to_texel(local, rect_size, self.config.canvas()) {
            Some((x, y)) => self.stamp_texel(x, y),
            None => {
                tracing::debug!(?local, ?rect_size, "pointer not over drawing area");
                0
            }
        }
    }

    /// Stamp the brush centered on a texel.
    pub fn stamp_texel(&mut self, x: i32, y: i32) -> usize {
        stamp(
            &mut self.buffer,
            x,
            y,
            self.config.brush_size,
            self.config.brush_color,
        )
    }

    /// Reset every cell to the clear color.
    pub fn clear(&mut self) {
        clear(&mut self.buffer, self.config.clear_color);
    }

    /// Current paint buffer.
    pub fn buffer(&self) -> &PaintBuffer {
        &self.buffer
    }

    /// Paint buffer as RGBA8 bytes for upload.
    pub fn frame(&self) -> FrameRGBA {
        self.buffer.to_frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/draw_board.rs"]
mod tests;
