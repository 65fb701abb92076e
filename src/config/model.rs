use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::{HoleMaskError, HoleMaskResult},
    path::parser::{MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT, PathParser},
    raster::mapping::CoordMap,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static hole mask configuration.
///
/// Each entry of `svg_paths` is one shape authored in a square design space of side
/// `svg_size`; every shape becomes one transparent hole in a `texture_width×texture_height`
/// raster filled with `mask_color`.
pub struct MaskConfig {
    /// One path string per hole.
    #[serde(default)]
    pub svg_paths: Vec<String>,
    /// Raster width in pixels.
    #[serde(default = "default_mask_texture_size")]
    pub texture_width: u32,
    /// Raster height in pixels.
    #[serde(default = "default_mask_texture_size")]
    pub texture_height: u32,
    /// Side length of the square design space.
    #[serde(default = "default_svg_size")]
    pub svg_size: f64,
    /// Use the flipped vertical mapping.
    #[serde(default = "default_flip_y")]
    pub flip_y: bool,
    /// Vertical pre-shift, only applied with `flip_y`.
    #[serde(default = "default_svg_y_offset")]
    pub svg_y_offset: f64,
    /// Color of the opaque part of the mask.
    #[serde(default = "default_mask_color")]
    pub mask_color: Rgba8,
    /// Segments per quadratic curve, in `[2, 30]`.
    #[serde(default = "default_bezier_sample_count")]
    pub bezier_sample_count: u32,
}

fn default_mask_texture_size() -> u32 {
    500
}

fn default_svg_size() -> f64 {
    1024.0
}

fn default_flip_y() -> bool {
    true
}

fn default_svg_y_offset() -> f64 {
    -900.0
}

fn default_mask_color() -> Rgba8 {
    Rgba8::new(0, 0, 0, 204)
}

fn default_bezier_sample_count() -> u32 {
    15
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            svg_paths: Vec::new(),
            texture_width: default_mask_texture_size(),
            texture_height: default_mask_texture_size(),
            svg_size: default_svg_size(),
            flip_y: default_flip_y(),
            svg_y_offset: default_svg_y_offset(),
            mask_color: default_mask_color(),
            bezier_sample_count: default_bezier_sample_count(),
        }
    }
}

impl MaskConfig {
    /// Validate raster, design space, and sampling settings.
    pub fn validate(&self) -> HoleMaskResult<()> {
        if self.texture_width == 0 || self.texture_height == 0 {
            return Err(HoleMaskError::validation(
                "texture_width/texture_height must be > 0",
            ));
        }
        if !self.svg_size.is_finite() || self.svg_size <= 0.0 {
            return Err(HoleMaskError::validation("svg_size must be finite and > 0"));
        }
        if !self.svg_y_offset.is_finite() {
            return Err(HoleMaskError::validation("svg_y_offset must be finite"));
        }
        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&self.bezier_sample_count) {
            return Err(HoleMaskError::validation(format!(
                "bezier_sample_count must be in [{MIN_SAMPLE_COUNT}, {MAX_SAMPLE_COUNT}], got {}",
                self.bezier_sample_count
            )));
        }
        Ok(())
    }

    /// Raster dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.texture_width, self.texture_height)
    }

    /// Design-to-raster mapping for this configuration.
    pub fn coord_map(&self) -> CoordMap {
        CoordMap {
            design_size: self.svg_size,
            width: self.texture_width,
            height: self.texture_height,
            flip_y: self.flip_y,
            y_offset: self.svg_y_offset,
        }
    }

    /// Path parser using the configured sample count.
    pub fn parser(&self) -> PathParser {
        PathParser::new(self.bezier_sample_count)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Animated hole mask configuration: a [`MaskConfig`] plus one median path per shape.
pub struct WriterConfig {
    /// Mask settings, flattened into the same JSON object.
    #[serde(flatten)]
    pub mask: MaskConfig,
    /// Design-space guide points per shape, index-aligned with `svg_paths`.
    #[serde(default)]
    pub median_paths: Vec<Vec<[f64; 2]>>,
    /// Color painted over revealed pixels.
    #[serde(default = "default_median_color")]
    pub median_color: Rgba8,
    /// Seconds spent revealing each shape.
    #[serde(default = "default_fill_duration_sec")]
    pub fill_duration_sec: f64,
}

fn default_median_color() -> Rgba8 {
    Rgba8::RED
}

fn default_fill_duration_sec() -> f64 {
    2.0
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            mask: MaskConfig::default(),
            median_paths: Vec::new(),
            median_color: default_median_color(),
            fill_duration_sec: default_fill_duration_sec(),
        }
    }
}

impl WriterConfig {
    /// Validate mask settings, fill timing, and median coordinates.
    pub fn validate(&self) -> HoleMaskResult<()> {
        self.mask.validate()?;
        if !self.fill_duration_sec.is_finite() || self.fill_duration_sec < 0.0 {
            return Err(HoleMaskError::validation(
                "fill_duration_sec must be finite and >= 0",
            ));
        }
        for (i, path) in self.median_paths.iter().enumerate() {
            if path.iter().flatten().any(|v| !v.is_finite()) {
                return Err(HoleMaskError::validation(format!(
                    "median_paths[{i}] contains a non-finite coordinate"
                )));
            }
        }
        Ok(())
    }

    /// Median path `i` as design-space points, if present.
    pub fn median_points(&self, i: usize) -> Option<Vec<Point>> {
        self.median_paths
            .get(i)
            .map(|pts| pts.iter().map(|&[x, y]| Point::new(x, y)).collect())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Paint tool configuration.
pub struct DrawBoardConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_board_texture_size")]
    pub texture_width: u32,
    /// Canvas height in pixels.
    #[serde(default = "default_board_texture_size")]
    pub texture_height: u32,
    /// Brush radius in pixels.
    #[serde(default = "default_brush_size")]
    pub brush_size: u32,
    /// Brush color.
    #[serde(default = "default_brush_color")]
    pub brush_color: Rgba8,
    /// Color the canvas is reset to.
    #[serde(default = "default_clear_color")]
    pub clear_color: Rgba8,
}

fn default_board_texture_size() -> u32 {
    1024
}

fn default_brush_size() -> u32 {
    8
}

fn default_brush_color() -> Rgba8 {
    Rgba8::BLACK
}

fn default_clear_color() -> Rgba8 {
    Rgba8::WHITE
}

impl Default for DrawBoardConfig {
    fn default() -> Self {
        Self {
            texture_width: default_board_texture_size(),
            texture_height: default_board_texture_size(),
            brush_size: default_brush_size(),
            brush_color: default_brush_color(),
            clear_color: default_clear_color(),
        }
    }
}

impl DrawBoardConfig {
    /// Validate canvas dimensions.
    pub fn validate(&self) -> HoleMaskResult<()> {
        if self.texture_width == 0 || self.texture_height == 0 {
            return Err(HoleMaskError::validation(
                "texture_width/texture_height must be > 0",
            ));
        }
        Ok(())
    }

    /// Canvas dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.texture_width, self.texture_height)
    }
}

/// JSON loading shared by every configuration type.
pub trait JsonConfig: DeserializeOwned + Sized {
    /// Parse from a JSON reader.
    fn from_reader<R: std::io::Read>(r: R) -> HoleMaskResult<Self> {
        serde_json::from_reader(r).map_err(|e| HoleMaskError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse from a JSON string.
    fn from_json_str(s: &str) -> HoleMaskResult<Self> {
        serde_json::from_str(s).map_err(|e| HoleMaskError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse from a JSON file on disk.
    fn from_path(path: impl AsRef<Path>) -> HoleMaskResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HoleMaskError::io(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl JsonConfig for MaskConfig {}
impl JsonConfig for WriterConfig {}
impl JsonConfig for DrawBoardConfig {}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
