use super::*;

fn region(coords: &[(i32, i32)]) -> PixelRegion {
    PixelRegion::from_pixels(coords.iter().map(|&(x, y)| PixelCoord::new(x, y)).collect())
}

fn line(points: &[(f64, f64)]) -> Polyline {
    Polyline::from_points(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn block(w: i32, h: i32) -> PixelRegion {
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            out.push((x, y));
        }
    }
    region(&out)
}

#[test]
fn fill_order_is_a_sorted_permutation() {
    let r = block(12, 7);
    let order = plan_fill_order(&line(&[(0.0, 3.0), (11.0, 3.0), (11.0, 0.0)]), &r);

    assert_eq!(order.len(), r.len());
    let mut got: Vec<PixelCoord> = order.entries().iter().map(|e| e.pixel).collect();
    let mut want = r.pixels().to_vec();
    got.sort();
    want.sort();
    assert_eq!(got, want);

    for w in order.entries().windows(2) {
        assert!(w[0].progress <= w[1].progress);
    }
    assert!(
        order
            .entries()
            .iter()
            .all(|e| (0.0..=1.0).contains(&e.progress))
    );
}

#[test]
fn straight_median_orders_by_projected_position() {
    let r = block(10, 3);
    let order = plan_fill_order(&line(&[(0.0, 1.0), (9.0, 1.0)]), &r);

    for w in order.entries().windows(2) {
        assert!(w[0].pixel.x <= w[1].pixel.x);
    }
    let first = order.entries()[0];
    let last = order.entries()[order.len() - 1];
    assert_eq!(first.pixel.x, 0);
    assert_eq!(first.progress, 0.0);
    assert_eq!(last.pixel.x, 9);
    assert_eq!(last.progress, 1.0);
}

#[test]
fn equal_progress_keeps_scanline_order() {
    // Every pixel in a column projects to the same point on a horizontal median.
    let r = region(&[(2, 0), (1, 0), (2, 1), (1, 1), (2, 2)]);
    let order = plan_fill_order(&line(&[(0.0, 1.0), (4.0, 1.0)]), &r);
    let got: Vec<(i32, i32)> = order.entries().iter().map(|e| (e.pixel.x, e.pixel.y)).collect();
    assert_eq!(got, vec![(1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]);
}

#[test]
fn zero_length_median_keeps_scanline_order_at_zero() {
    let r = region(&[(3, 3), (0, 0), (5, 1)]);
    for median in [line(&[]), line(&[(2.0, 2.0)]), line(&[(2.0, 2.0), (2.0, 2.0)])] {
        let order = plan_fill_order(&median, &r);
        assert_eq!(order.len(), 3);
        assert!(order.entries().iter().all(|e| e.progress == 0.0));
        let got: Vec<PixelCoord> = order.entries().iter().map(|e| e.pixel).collect();
        assert_eq!(got, r.pixels());
    }
}

#[test]
fn degenerate_segments_are_skipped() {
    // The repeated point contributes no segment; progress still reaches 1 at the far end.
    let median = line(&[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let order = plan_fill_order(&median, &region(&[(10, 0), (5, 0), (0, 0)]));
    let got: Vec<f64> = order.entries().iter().map(|e| e.progress).collect();
    assert_eq!(got, vec![0.0, 0.5, 1.0]);
}

#[test]
fn bent_median_uses_nearest_segment() {
    // L-shaped median: right along y=0, then down along x=10.
    let median = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let order = plan_fill_order(&median, &region(&[(10, 9), (1, 1)]));
    assert_eq!(order.entries()[0].pixel, PixelCoord::new(1, 1));
    assert_eq!(order.entries()[0].progress, 0.05);
    assert_eq!(order.entries()[1].pixel, PixelCoord::new(10, 9));
    assert_eq!(order.entries()[1].progress, 0.95);
}

#[test]
fn fill_count_follows_elapsed_fraction() {
    let order = plan_fill_order(&line(&[(0.0, 0.0), (9.0, 0.0)]), &block(10, 1));
    assert_eq!(order.fill_count(0.0, 2.0), 0);
    assert_eq!(order.fill_count(0.5, 2.0), 2);
    assert_eq!(order.fill_count(1.0, 2.0), 5);
    assert_eq!(order.fill_count(1.99, 2.0), 9);
    assert_eq!(order.fill_count(2.0, 2.0), 10);
    assert_eq!(order.fill_count(7.0, 2.0), 10);
    assert_eq!(order.fill_count(0.0, 0.0), 10);
    assert_eq!(order.fill_count(-1.0, 2.0), 0);
}
