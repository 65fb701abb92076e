use super::*;
use crate::foundation::core::{PixelCoord, Point};

fn row_job(shape: usize, y: i32, width: i32) -> FillJob {
    FillJob {
        shape,
        median: Polyline::from_points(vec![
            Point::new(0.0, f64::from(y)),
            Point::new(f64::from(width - 1), f64::from(y)),
        ]),
        region: PixelRegion::from_pixels((0..width).map(|x| PixelCoord::new(x, y)).collect()),
    }
}

fn red_count(mask: &RasterMask) -> usize {
    mask.count_where(|c| c == Rgba8::RED)
}

#[test]
fn reveals_floor_fraction_each_tick_then_completes() {
    let mut mask = RasterMask::filled(10, 1, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![row_job(0, 0, 10)], Rgba8::RED, 1.0);

    let mut seen = Vec::new();
    for _ in 0..4 {
        let tick = anim.tick(0.25, &mut mask);
        assert!(matches!(tick.status, FillStatus::Running { shape: 0, total: 10, .. }));
        seen.push(red_count(&mask));
    }
    assert_eq!(seen, vec![0, 2, 5, 7]);

    let tick = anim.tick(0.25, &mut mask);
    assert_eq!(tick.status, FillStatus::Finished);
    assert_eq!(tick.painted, 3);
    assert_eq!(red_count(&mask), 10);
    assert!(anim.is_finished());
}

#[test]
fn reveal_follows_median_direction() {
    let mut mask = RasterMask::filled(10, 1, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![row_job(0, 0, 10)], Rgba8::RED, 1.0);
    anim.tick(0.5, &mut mask);
    anim.tick(0.5, &mut mask);
    // Half revealed, starting at the median's first point.
    for x in 0..10 {
        assert_eq!(mask.get(x, 0) == Some(Rgba8::RED), x < 5, "x={x}");
    }
}

#[test]
fn next_shape_starts_in_the_same_tick() {
    let mut mask = RasterMask::filled(4, 2, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![row_job(0, 0, 4), row_job(1, 1, 4)], Rgba8::RED, 1.0);

    anim.tick(1.0, &mut mask);
    let tick = anim.tick(1.0, &mut mask);
    assert_eq!(
        tick.status,
        FillStatus::Running {
            shape: 1,
            filled: 0,
            total: 4
        }
    );
    assert_eq!(tick.painted, 4);
    assert_eq!(anim.current_shape(), Some(1));

    let tick = anim.tick(1.0, &mut mask);
    assert_eq!(tick.status, FillStatus::Finished);
    assert_eq!(red_count(&mask), 8);
}

#[test]
fn short_medians_and_empty_regions_are_skipped() {
    let mut mask = RasterMask::filled(4, 3, Rgba8::TRANSPARENT);
    let mut short = row_job(0, 0, 4);
    short.median = Polyline::from_points(vec![Point::new(0.0, 0.0)]);
    let mut empty = row_job(1, 1, 4);
    empty.region = PixelRegion::default();

    let mut anim = FillAnimator::new(vec![short, empty, row_job(2, 2, 4)], Rgba8::RED, 1.0);
    let tick = anim.tick(0.1, &mut mask);
    assert!(matches!(tick.status, FillStatus::Running { shape: 2, .. }));

    while anim.tick(0.5, &mut mask).status != FillStatus::Finished {}
    for x in 0..4 {
        assert_eq!(mask.get(x, 0), Some(Rgba8::TRANSPARENT));
        assert_eq!(mask.get(x, 1), Some(Rgba8::TRANSPARENT));
        assert_eq!(mask.get(x, 2), Some(Rgba8::RED));
    }
}

#[test]
fn zero_duration_fills_on_first_tick() {
    let mut mask = RasterMask::filled(6, 1, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![row_job(0, 0, 6)], Rgba8::RED, 0.0);
    let tick = anim.tick(0.016, &mut mask);
    assert_eq!(tick.status, FillStatus::Finished);
    assert_eq!(red_count(&mask), 6);
}

#[test]
fn cancel_stops_all_writes() {
    let mut mask = RasterMask::filled(10, 1, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![row_job(0, 0, 10)], Rgba8::RED, 1.0);
    anim.tick(0.5, &mut mask);
    anim.tick(0.5, &mut mask);
    let before = mask.clone();

    anim.cancel();
    for _ in 0..5 {
        let tick = anim.tick(1.0, &mut mask);
        assert_eq!(tick.status, FillStatus::Cancelled);
        assert!(!tick.wrote_pixels());
    }
    assert_eq!(mask, before);
    assert!(anim.is_cancelled());
    assert!(!anim.is_finished());
}

#[test]
fn finished_animator_is_inert() {
    let mut mask = RasterMask::filled(2, 1, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![], Rgba8::RED, 1.0);
    let tick = anim.tick(1.0, &mut mask);
    assert_eq!(tick.status, FillStatus::Finished);
    assert!(!tick.wrote_pixels());
    assert_eq!(red_count(&mask), 0);
}

#[test]
fn bad_deltas_do_not_advance_time() {
    let mut mask = RasterMask::filled(10, 1, Rgba8::TRANSPARENT);
    let mut anim = FillAnimator::new(vec![row_job(0, 0, 10)], Rgba8::RED, 1.0);
    anim.tick(f64::NAN, &mut mask);
    anim.tick(-3.0, &mut mask);
    anim.tick(f64::INFINITY, &mut mask);
    let tick = anim.tick(0.0, &mut mask);
    assert_eq!(
        tick.status,
        FillStatus::Running {
            shape: 0,
            filled: 0,
            total: 10
        }
    );
}
