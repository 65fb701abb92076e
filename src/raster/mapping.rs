use crate::{foundation::core::Point, path::polyline::Polyline};

/// Maps square design-space coordinates into raster space.
///
/// The design square of side `design_size` is scaled uniformly to fit `(width-1)×(height-1)` and
/// centered. With `flip_y` set the vertical coordinate is
///
/// `py = height - (-(y_offset + y) * scale) + offset_y`
///
/// and without it `py = y * scale + offset_y`. The two branches are not mirror images of each
/// other: the flipped branch carries `y_offset` and a `height` term that the plain branch does
/// not. Both are kept exactly as authored content depends on them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoordMap {
    /// Side length of the square design space.
    pub design_size: f64,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Apply the flipped vertical formula.
    pub flip_y: bool,
    /// Vertical pre-shift applied in flipped mode only.
    pub y_offset: f64,
}

impl CoordMap {
    /// Uniform design-to-raster scale factor.
    pub fn scale(&self) -> f64 {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let sx = (w - 1.0) / self.design_size;
        let sy = (h - 1.0) / self.design_size;
        sx.min(sy)
    }

    /// Horizontal and vertical centering offsets.
    pub fn offsets(&self) -> (f64, f64) {
        let scaled = self.design_size * self.scale();
        (
            (f64::from(self.width) - scaled) / 2.0,
            (f64::from(self.height) - scaled) / 2.0,
        )
    }

    /// Map one design-space point into raster space.
    pub fn map_point(&self, p: Point) -> Point {
        let scale = self.scale();
        let (offset_x, offset_y) = self.offsets();
        let h = f64::from(self.height);

        let py = if self.flip_y {
            h - (-(self.y_offset + p.y) * scale) + offset_y
        } else {
            p.y * scale + offset_y
        };
        let px = p.x * scale + offset_x;

        Point::new(px, py)
    }

    /// Map every point of a polyline.
    pub fn map_polyline(&self, poly: &Polyline) -> Polyline {
        poly.map(|p| self.map_point(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mapping.rs"]
mod tests;
