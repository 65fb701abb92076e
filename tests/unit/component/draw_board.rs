use super::*;
use crate::foundation::core::Rgba8;

fn board() -> DrawBoard {
    let mut b = DrawBoard::new(DrawBoardConfig {
        texture_width: 100,
        texture_height: 50,
        brush_size: 2,
        brush_color: Rgba8::BLACK,
        clear_color: Rgba8::WHITE,
    })
    .unwrap();
    b.initialize();
    b
}

#[test]
fn pointer_at_rect_center_paints_texture_center() {
    let mut b = board();
    let written = b.pointer_down(Point::new(0.0, 0.0), Vec2::new(200.0, 100.0));
    assert_eq!(written, 13);
    assert_eq!(b.buffer().get(50, 25), Some(Rgba8::BLACK));
    assert_eq!(b.buffer().get(0, 0), Some(Rgba8::WHITE));
}

#[test]
fn pointer_on_far_corner_is_clipped() {
    let mut b = board();
    // Maps to texel (100, 50), one past the last cell on both axes.
    let written = b.pointer_down(Point::new(100.0, 50.0), Vec2::new(200.0, 100.0));
    // Only cells with dx, dy in [-2, -1] and dx² + dy² <= 4: (-1,-1).
    assert_eq!(written, 1);
    assert_eq!(b.buffer().get(99, 49), Some(Rgba8::BLACK));
}

#[test]
fn degenerate_rect_paints_nothing() {
    let mut b = board();
    assert_eq!(b.pointer_down(Point::ZERO, Vec2::ZERO), 0);
    assert_eq!(b.buffer().count_where(|c| c == Rgba8::BLACK), 0);
}

#[test]
fn clear_restores_clear_color() {
    let mut b = board();
    b.stamp_texel(10, 10);
    b.stamp_texel(90, 40);
    b.clear();
    assert_eq!(b.buffer().count_where(|c| c == Rgba8::WHITE), 100 * 50);
    assert_eq!(b.frame().data.len(), 100 * 50 * 4);
}
