use crate::{
    config::model::MaskConfig,
    foundation::error::HoleMaskResult,
    path::polyline::Polyline,
    raster::buffer::{FrameRGBA, RasterMask},
    raster::mapping::CoordMap,
    raster::scanline::{PixelRegion, rasterize},
};

/// Static hole mask: one transparent hole per configured path over an opaque mask color.
#[derive(Clone, Debug)]
pub struct HoleMask {
    config: MaskConfig,
    polylines: Vec<Polyline>,
    mask: RasterMask,
    regions: Vec<PixelRegion>,
}

impl HoleMask {
    /// Validate `config` and allocate an un-punched mask.
    pub fn new(config: MaskConfig) -> HoleMaskResult<Self> {
        config.validate()?;
        let mask = RasterMask::filled(config.texture_width, config.texture_height, config.mask_color);
        Ok(Self {
            config,
            polylines: Vec::new(),
            mask,
            regions: Vec::new(),
        })
    }

    /// Parse every path and rasterize the mask. Re-running rebuilds from the configuration.
    #[tracing::instrument(skip(self), fields(paths = self.config.svg_paths.len()))]
    pub fn initialize(&mut self) {
        tracing::debug!(
            flip_y = self.config.flip_y,
            svg_y_offset = self.config.svg_y_offset,
            "building hole mask"
        );

        let parser = self.config.parser();
        self.polylines = self
            .config
            .svg_paths
            .iter()
            .map(|d| parser.parse(d))
            .collect();

        let (mask, regions) = rasterize(
            &self.polylines,
            self.config.canvas(),
            self.config.mask_color,
            &self.config.coord_map(),
        );
        self.mask = mask;
        self.regions = regions;
    }

    /// Design-to-raster mapping used for shapes (and median paths).
    pub fn coord_map(&self) -> CoordMap {
        self.config.coord_map()
    }

    /// Flattened design-space shapes, index-aligned with the configured paths.
    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Per-shape hole pixels, index-aligned with [`Self::polylines`].
    pub fn regions(&self) -> &[PixelRegion] {
        &self.regions
    }

    /// Current mask raster.
    pub fn mask(&self) -> &RasterMask {
        &self.mask
    }

    pub(crate) fn mask_mut(&mut self) -> &mut RasterMask {
        &mut self.mask
    }

    /// Mask as RGBA8 bytes for upload.
    pub fn frame(&self) -> FrameRGBA {
        self.mask.to_frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/hole_mask.rs"]
mod tests;
