use crate::{
    foundation::core::{Canvas, PixelCoord, Point, Rgba8},
    path::polyline::Polyline,
    raster::buffer::RasterMask,
    raster::mapping::CoordMap,
};

/// Raster cells covered by one rasterized polyline, in scanline order.
///
/// A pixel appears at most once per region.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRegion {
    pixels: Vec<PixelCoord>,
}

impl PixelRegion {
    /// Wrap a pixel list.
    pub fn from_pixels(pixels: Vec<PixelCoord>) -> Self {
        Self { pixels }
    }

    /// Pixels in insertion (scanline) order.
    pub fn pixels(&self) -> &[PixelCoord] {
        &self.pixels
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the region covers nothing.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Linear membership test.
    pub fn contains(&self, p: PixelCoord) -> bool {
        self.pixels.contains(&p)
    }
}

/// Even-odd scan conversion of a raster-space polygon.
///
/// The polygon is implicitly closed (the last point connects back to the first). For every row
/// `y`, an edge `(i, j)` crosses when `(y_i < y && y_j >= y) || (y_j < y && y_i >= y)`; crossings
/// are truncated to integer columns, sorted, and paired `0–1, 2–3, …`. Each pair fills its span
/// inclusively after clamping to `[0, width-1]`; an unpaired trailing crossing is ignored.
/// Spans lying wholly outside the raster are skipped rather than clamped onto column `0` or
/// `width-1`, so off-canvas geometry never leaves a one-pixel stripe at the edge.
pub fn scan_fill(points: &[Point], canvas: Canvas) -> PixelRegion {
    let mut pixels = Vec::new();
    if points.len() < 2 || canvas.width == 0 || canvas.height == 0 {
        return PixelRegion { pixels };
    }

    let max_x = (canvas.width - 1) as i32;
    let mut nodes: Vec<i32> = Vec::new();

    for row in 0..canvas.height {
        let y = f64::from(row);
        nodes.clear();

        let mut j = points.len() - 1;
        for i in 0..points.len() {
            let (pi, pj) = (points[i], points[j]);
            if (pi.y < y && pj.y >= y) || (pj.y < y && pi.y >= y) {
                let x = pi.x + (y - pi.y) / (pj.y - pi.y) * (pj.x - pi.x);
                nodes.push(x as i32);
            }
            j = i;
        }

        nodes.sort_unstable();

        let mut row_filled_to: Option<i32> = None;
        for pair in nodes.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            if b < 0 || a > max_x {
                continue;
            }
            let mut start = a.clamp(0, max_x);
            let end = b.clamp(0, max_x);
            if let Some(done) = row_filled_to {
                start = start.max(done + 1);
            }
            for x in start..=end {
                pixels.push(PixelCoord::new(x, row as i32));
            }
            if start <= end {
                row_filled_to = Some(end);
            }
        }
    }

    PixelRegion { pixels }
}

/// Build a hole mask from design-space polylines.
///
/// The raster starts as `mask_color` everywhere. Each polyline is mapped through `map`,
/// scan-converted with [`scan_fill`], and its cells are set fully transparent. The returned
/// regions are index-aligned with `polylines`.
#[tracing::instrument(skip(polylines, mask_color), fields(shapes = polylines.len()))]
pub fn rasterize(
    polylines: &[Polyline],
    canvas: Canvas,
    mask_color: Rgba8,
    map: &CoordMap,
) -> (RasterMask, Vec<PixelRegion>) {
    let mut mask = RasterMask::filled(canvas.width, canvas.height, mask_color);
    let mut regions = Vec::with_capacity(polylines.len());

    for (idx, poly) in polylines.iter().enumerate() {
        let mapped = map.map_polyline(poly);
        let region = scan_fill(mapped.points(), canvas);
        for p in region.pixels() {
            mask.set(p.x, p.y, Rgba8::TRANSPARENT);
        }
        tracing::debug!(
            shape = idx,
            points = poly.len(),
            pixels = region.len(),
            "rasterized shape"
        );
        regions.push(region);
    }

    let transparent = mask.count_where(Rgba8::is_transparent);
    tracing::debug!(transparent, "mask generated");

    (mask, regions)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scanline.rs"]
mod tests;
