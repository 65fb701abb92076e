use crate::{
    component::hole_mask::HoleMask,
    config::model::WriterConfig,
    fill::animator::{FillAnimator, FillJob, FillTick},
    foundation::error::{HoleMaskError, HoleMaskResult},
    path::polyline::Polyline,
    raster::buffer::{FrameRGBA, RasterMask},
};

/// Hole mask whose holes are progressively painted along per-shape median paths.
///
/// Built by composition: a [`HoleMask`] produces the raster and regions, and a
/// [`FillAnimator`] consumes them one tick at a time.
#[derive(Clone, Debug)]
pub struct HoleWriter {
    config: WriterConfig,
    base: HoleMask,
    animator: Option<FillAnimator>,
    cancelled: bool,
}

impl HoleWriter {
    /// Validate `config` and build the underlying mask component.
    pub fn new(config: WriterConfig) -> HoleMaskResult<Self> {
        config.validate()?;
        let base = HoleMask::new(config.mask.clone())?;
        Ok(Self {
            config,
            base,
            animator: None,
            cancelled: false,
        })
    }

    /// Rasterize the mask and queue one fill job per shape that has a median path.
    ///
    /// When the shape and median counts differ only the shorter prefix is animated.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&mut self) {
        self.base.initialize();

        let regions = self.base.regions();
        let count = self.config.median_paths.len().min(regions.len());
        if self.config.median_paths.len() != regions.len() {
            tracing::warn!(
                shapes = regions.len(),
                medians = self.config.median_paths.len(),
                animated = count,
                "shape and median path counts differ"
            );
        }

        let map = self.base.coord_map();
        let mut jobs = Vec::with_capacity(count);
        for (shape, region) in regions.iter().enumerate().take(count) {
            let points = self.config.median_points(shape).unwrap_or_default();
            jobs.push(FillJob {
                shape,
                median: map.map_polyline(&Polyline::from_points(points)),
                region: region.clone(),
            });
        }

        let mut animator =
            FillAnimator::new(jobs, self.config.median_color, self.config.fill_duration_sec);
        if self.cancelled {
            animator.cancel();
        }
        self.animator = Some(animator);
    }

    /// Advance the fill animation by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> HoleMaskResult<FillTick> {
        let Some(animator) = self.animator.as_mut() else {
            return Err(HoleMaskError::animation(
                "HoleWriter::tick called before initialize",
            ));
        };
        Ok(animator.tick(dt, self.base.mask_mut()))
    }

    /// Abandon the animation; the mask keeps whatever was painted so far.
    ///
    /// Sticky: an animator built by a later [`Self::initialize`] starts cancelled.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        if let Some(animator) = self.animator.as_mut() {
            animator.cancel();
        }
    }

    /// Whether every queued shape has been filled.
    pub fn is_finished(&self) -> bool {
        self.animator.as_ref().is_some_and(FillAnimator::is_finished)
    }

    /// Underlying static mask component.
    pub fn hole_mask(&self) -> &HoleMask {
        &self.base
    }

    /// Current mask raster.
    pub fn mask(&self) -> &RasterMask {
        self.base.mask()
    }

    /// Mask as RGBA8 bytes for upload.
    pub fn frame(&self) -> FrameRGBA {
        self.base.frame()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/hole_writer.rs"]
mod tests;
