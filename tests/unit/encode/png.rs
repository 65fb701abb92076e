use super::*;
use crate::{foundation::core::Rgba8, raster::buffer::PixelBuffer};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_png").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn save_png_roundtrips_pixels() {
    let dir = scratch_dir("save");
    let mut buf = PixelBuffer::filled(3, 2, Rgba8::new(0, 0, 0, 204));
    buf.set(2, 1, Rgba8::TRANSPARENT);
    let path = dir.join("nested").join("mask.png");

    save_png(&buf.to_frame(), &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 204]);
    assert_eq!(img.get_pixel(2, 1).0, [0, 0, 0, 0]);
}

#[test]
fn png_sink_numbers_frames() {
    let dir = scratch_dir("sink");
    let frame = PixelBuffer::filled(2, 2, Rgba8::RED).to_frame();
    let mut sink = PngSink::new(&dir, "fill");
    sink.upload(&frame).unwrap();
    sink.upload(&frame).unwrap();
    sink.finish().unwrap();

    assert_eq!(sink.written(), 2);
    assert!(dir.join("fill_00000.png").exists());
    assert!(dir.join("fill_00001.png").exists());
    assert!(!dir.join("fill_00002.png").exists());
}
