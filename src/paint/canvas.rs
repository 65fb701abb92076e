use crate::{
    foundation::core::{Canvas, Point, Rgba8, Vec2},
    raster::buffer::PaintBuffer,
};

/// Write `color` to every cell within `radius` of `(cx, cy)` (`dx² + dy² <= radius²`).
///
/// Cells outside the buffer are skipped, so any center is accepted. Returns the number of cells
/// written.
pub fn stamp(buffer: &mut PaintBuffer, cx: i32, cy: i32, radius: u32, color: Rgba8) -> usize {
    let canvas = buffer.canvas();
    if canvas.width == 0 || canvas.height == 0 {
        return 0;
    }

    let r = i64::from(radius);
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let max_x = i64::from(canvas.width) - 1;
    let max_y = i64::from(canvas.height) - 1;

    let y0 = (cy - r).max(0);
    let y1 = (cy + r).min(max_y);
    let x0 = (cx - r).max(0);
    let x1 = (cx + r).min(max_x);

    // Squared distances can exceed i64 when the center or radius sits near the integer limits.
    let r2 = i128::from(r) * i128::from(r);
    let mut written = 0;
    for y in y0..=y1 {
        let dy = i128::from(y - cy);
        for x in x0..=x1 {
            let dx = i128::from(x - cx);
            if dx * dx + dy * dy <= r2 && buffer.set(x as i32, y as i32, color) {
                written += 1;
            }
        }
    }

    tracing::trace!(cx, cy, radius, written, "stamp");
    written
}

/// Reset every cell to `color`.
pub fn clear(buffer: &mut PaintBuffer, color: Rgba8) {
    buffer.fill(color);
}

/// Convert a point in a rectangle's centered local space into texel coordinates.
///
/// `normalized = (local + size/2) / size`, then `round(normalized * dimension)` per axis, with
/// ties rounding to even. `None` when the rectangle has no positive finite area.
pub fn local_to_texel(local: Point, rect_size: Vec2, texture: Canvas) -> Option<(i32, i32)> {
    if !(rect_size.x.is_finite() && rect_size.y.is_finite())
        || rect_size.x <= 0.0
        || rect_size.y <= 0.0
    {
        return None;
    }
    if !(local.x.is_finite() && local.y.is_finite()) {
        return None;
    }

    let nx = (local.x + rect_size.x / 2.0) / rect_size.x;
    let ny = (local.y + rect_size.y / 2.0) / rect_size.y;
    let tx = (nx * f64::from(texture.width)).round_ties_even();
    let ty = (ny * f64::from(texture.height)).round_ties_even();

    Some((tx as i32, ty as i32))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/canvas.rs"]
mod tests;
