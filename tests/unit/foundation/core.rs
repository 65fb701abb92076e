use super::*;

#[test]
fn rgba8_serializes_as_array() {
    let c = Rgba8::new(1, 2, 3, 4);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "[1,2,3,4]");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn rgba8_transparency_tracks_alpha() {
    assert!(Rgba8::new(12, 34, 56, 0).is_transparent());
    assert!(Rgba8::TRANSPARENT.is_transparent());
    assert!(!Rgba8::BLACK.is_transparent());
}

#[test]
fn canvas_bounds_reject_negative_and_overflow() {
    let c = Canvas::new(4, 3);
    assert_eq!(c.pixel_count(), 12);
    assert!(c.contains(0, 0));
    assert!(c.contains(3, 2));
    assert!(!c.contains(-1, 0));
    assert!(!c.contains(4, 0));
    assert!(!c.contains(0, 3));
    assert_eq!(c.index_of(1, 2), Some(9));
    assert_eq!(c.index_of(0, -5), None);
}
