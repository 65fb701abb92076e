use crate::{
    foundation::core::Rgba8,
    fill::planner::{FillOrder, plan_fill_order},
    path::polyline::Polyline,
    raster::buffer::RasterMask,
    raster::scanline::PixelRegion,
};

/// One shape's pending fill: a raster-space median path and the hole it reveals.
#[derive(Clone, Debug)]
pub struct FillJob {
    /// Index of the source shape.
    pub shape: usize,
    /// Median path, already mapped into raster space.
    pub median: Polyline,
    /// Hole pixels of the shape.
    pub region: PixelRegion,
}

/// Animator state after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillStatus {
    /// A shape is mid-fill.
    Running {
        /// Shape being filled.
        shape: usize,
        /// Pixels of this shape painted so far.
        filled: usize,
        /// Pixels in this shape's fill order.
        total: usize,
    },
    /// Every job has been filled completely.
    Finished,
    /// The animation was abandoned; no further writes happen.
    Cancelled,
}

/// Result of one [`FillAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillTick {
    /// State after the tick.
    pub status: FillStatus,
    /// Number of pixel writes performed during the tick.
    pub painted: usize,
}

impl FillTick {
    /// Whether the mask changed and should be uploaded again.
    pub fn wrote_pixels(&self) -> bool {
        self.painted > 0
    }
}

#[derive(Clone, Debug)]
struct ActiveFill {
    shape: usize,
    order: FillOrder,
    elapsed: f64,
    painted: usize,
}

impl ActiveFill {
    fn paint_to(&mut self, n: usize, mask: &mut RasterMask, color: Rgba8) -> usize {
        let n = n.min(self.order.len());
        let mut writes = 0;
        for e in &self.order.entries()[self.painted.min(n)..n] {
            if mask.set(e.pixel.x, e.pixel.y, color) {
                writes += 1;
            }
        }
        self.painted = self.painted.max(n);
        writes
    }
}

/// Resumable, tick-driven reveal of hole regions along their median paths.
///
/// Each tick continues where the previous one stopped: while the current job's elapsed time `t`
/// is below the duration `D`, the first `floor(t/D·N)` pixels of its fill order are painted and
/// `t` advances by the tick's delta. Once `t >= D` the job is painted in full and the next job
/// runs its first frame within the same tick. Jobs with fewer than two median points or an empty
/// region are skipped without consuming a tick.
#[derive(Clone, Debug)]
pub struct FillAnimator {
    jobs: Vec<FillJob>,
    next_job: usize,
    active: Option<ActiveFill>,
    fill_color: Rgba8,
    duration: f64,
    cancelled: bool,
}

impl FillAnimator {
    /// Build an animator over `jobs`, processed in order.
    pub fn new(jobs: Vec<FillJob>, fill_color: Rgba8, duration_sec: f64) -> Self {
        Self {
            jobs,
            next_job: 0,
            active: None,
            fill_color,
            duration: duration_sec.max(0.0),
            cancelled: false,
        }
    }

    /// Shape currently being filled, if any.
    pub fn current_shape(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.shape)
    }

    /// Whether all jobs completed.
    pub fn is_finished(&self) -> bool {
        !self.cancelled && self.active.is_none() && self.next_job >= self.jobs.len()
    }

    /// Whether [`Self::cancel`] was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Abandon the animation. Later ticks write nothing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.active = None;
    }

    /// Advance one frame whose duration is `dt` seconds.
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, dt: f64, mask: &mut RasterMask) -> FillTick {
        if self.cancelled {
            return FillTick {
                status: FillStatus::Cancelled,
                painted: 0,
            };
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut painted = 0;

        loop {
            if self.active.is_none() && !self.start_next_job() {
                return FillTick {
                    status: FillStatus::Finished,
                    painted,
                };
            }
            let Some(active) = self.active.as_mut() else {
                continue;
            };

            let total = active.order.len();
            if active.elapsed < self.duration {
                let n = active.order.fill_count(active.elapsed, self.duration);
                painted += active.paint_to(n, mask, self.fill_color);
                active.elapsed += dt;
                return FillTick {
                    status: FillStatus::Running {
                        shape: active.shape,
                        filled: active.painted,
                        total,
                    },
                    painted,
                };
            }

            painted += active.paint_to(total, mask, self.fill_color);
            tracing::debug!(shape = active.shape, pixels = total, "shape fill complete");
            self.active = None;
        }
    }

    fn start_next_job(&mut self) -> bool {
        while let Some(job) = self.jobs.get(self.next_job) {
            self.next_job += 1;

            if job.median.len() < 2 {
                tracing::warn!(shape = job.shape, "median path has fewer than 2 points; skipping");
                continue;
            }
            if job.region.is_empty() {
                tracing::debug!(shape = job.shape, "empty hole region; skipping");
                continue;
            }

            self.active = Some(ActiveFill {
                shape: job.shape,
                order: plan_fill_order(&job.median, &job.region),
                elapsed: 0.0,
                painted: 0,
            });
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/animator.rs"]
mod tests;
