use crate::{
    foundation::core::{PixelCoord, Point, Vec2},
    path::polyline::Polyline,
    raster::scanline::PixelRegion,
};

/// Median segments shorter than this are ignored during projection.
pub const MIN_SEGMENT_LEN: f64 = 0.001;

/// A region pixel tagged with its relative arc-length position along a median path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressedPixel {
    /// Raster-space pixel.
    pub pixel: PixelCoord,
    /// Position along the median in `[0, 1]`.
    pub progress: f64,
}

/// Region pixels sorted by ascending progress; ties keep scanline order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FillOrder {
    entries: Vec<ProgressedPixel>,
}

impl FillOrder {
    /// Entries in reveal order.
    pub fn entries(&self) -> &[ProgressedPixel] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to reveal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many leading entries are revealed `elapsed` seconds into a `duration` second fill.
    ///
    /// `floor(elapsed / duration * len)` while `elapsed < duration`, and `len` from then on.
    pub fn fill_count(&self, elapsed: f64, duration: f64) -> usize {
        let n = self.entries.len();
        if duration <= 0.0 || elapsed >= duration {
            return n;
        }
        if elapsed <= 0.0 {
            return 0;
        }
        let count = ((elapsed / duration) * n as f64).floor() as usize;
        count.min(n)
    }
}

#[derive(Clone, Copy, Debug)]
struct MedianSegment {
    start: Point,
    dir: Vec2,
    len: f64,
    // Arc length of the non-degenerate segments before this one.
    acc: f64,
}

fn median_segments(median: &Polyline) -> Vec<MedianSegment> {
    let mut out = Vec::new();
    let mut acc = 0.0;
    for (p1, p2) in median.segments() {
        let seg = p2 - p1;
        let len = seg.hypot();
        if len < MIN_SEGMENT_LEN {
            continue;
        }
        out.push(MedianSegment {
            start: p1,
            dir: seg / len,
            len,
            acc,
        });
        acc += len;
    }
    out
}

fn nearest_progress(segments: &[MedianSegment], total: f64, p: Point) -> f64 {
    let mut min_dist = f64::MAX;
    let mut progress = 0.0;
    for s in segments {
        let proj = (p - s.start).dot(s.dir).clamp(0.0, s.len);
        let foot = s.start + s.dir * proj;
        let dist = p.distance(foot);
        if dist < min_dist {
            min_dist = dist;
            progress = (s.acc + proj) / total;
        }
    }
    progress.clamp(0.0, 1.0)
}

/// Order a region's pixels by their nearest-point projection onto `median`.
///
/// `median` and `region` must share the same raster space. A median with zero total length
/// tags every pixel with progress `0`, which leaves the order as scanned.
#[tracing::instrument(skip_all, fields(median_points = median.len(), pixels = region.len()))]
pub fn plan_fill_order(median: &Polyline, region: &PixelRegion) -> FillOrder {
    let total = median.arc_length();
    let segments = if total > 0.0 {
        median_segments(median)
    } else {
        Vec::new()
    };

    let mut entries: Vec<ProgressedPixel> = region
        .pixels()
        .iter()
        .map(|&pixel| ProgressedPixel {
            pixel,
            progress: nearest_progress(&segments, total, pixel.to_point()),
        })
        .collect();

    // `sort_by` is stable, so equal progress keeps scanline order.
    entries.sort_by(|a, b| a.progress.total_cmp(&b.progress));

    tracing::debug!(total_length = total, "planned fill order");
    FillOrder { entries }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/planner.rs"]
mod tests;
