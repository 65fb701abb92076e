pub use kurbo::{Point, Vec2};

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `[r, g, b, a]` array.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `0` is fully transparent.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the alpha channel is zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

/// Integer raster-space pixel coordinate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelCoord {
    /// Build a pixel coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position as a float point (no half-pixel offset).
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build raster dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether a signed coordinate lies inside the raster.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major index of an in-bounds coordinate.
    pub fn index_of(self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
