mod common;

use std::path::Path;

use pointview_core::consts::MAX_THUMBNAIL_SIDE;
use pointview_core::error::PointViewError;
use pointview_core::thumbnail::{load_thumbnail, resolve_source, thumbnail_size};

#[test]
fn test_resolve_source_strips_leading_slash() {
    let root = Path::new("/srv/data");
    assert_eq!(
        resolve_source(root, "/images/point_images/point_0.png"),
        Path::new("/srv/data/images/point_images/point_0.png")
    );
    assert_eq!(resolve_source(root, "a.png"), Path::new("/srv/data/a.png"));
}

#[test]
fn test_thumbnail_size_keeps_aspect() {
    assert_eq!(thumbnail_size(400, 200, 100.0).unwrap(), (100, 50));
    assert_eq!(thumbnail_size(50, 75, 100.0).unwrap(), (100, 150));
    assert_eq!(thumbnail_size(1000, 1, 100.0).unwrap(), (100, 1));
}

#[test]
fn test_thumbnail_size_rejects_empty_image() {
    assert!(matches!(
        thumbnail_size(0, 10, 100.0),
        Err(PointViewError::InvalidDimensions { width: 0, height: 10 })
    ));
}

#[test]
fn test_thumbnail_size_rejects_oversized_output() {
    // 1x100000 would resize to 100x10_000_000.
    assert!(matches!(
        thumbnail_size(1, 100_000, 100.0),
        Err(PointViewError::InvalidDimensions { width: 1, height: 100_000 })
    ));
    assert!(thumbnail_size(100, 100, 5000.0).is_err());
    assert_eq!(
        thumbnail_size(25, 1024, 100.0).unwrap(),
        (100, MAX_THUMBNAIL_SIDE)
    );
}

#[test]
fn test_load_tall_strip_fails_instead_of_allocating() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_test_png(dir.path(), "strip.png", 1, 5000);

    let result = load_thumbnail(&path, 100.0);

    assert!(matches!(
        result,
        Err(PointViewError::InvalidDimensions { width: 1, height: 5000 })
    ));
}

#[test]
fn test_load_resizes_to_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_test_png(dir.path(), "wide.png", 300, 150);

    let thumb = load_thumbnail(&path, 100.0).unwrap();

    assert_eq!((thumb.width, thumb.height), (100, 50));
    assert_eq!(thumb.size(), [100, 50]);
    assert_eq!(thumb.rgba.len(), 100 * 50 * 4);
    // Opaque, and the fill color survives resampling.
    let px = &thumb.rgba[..4];
    assert!(px[0].abs_diff(10) <= 1, "got: {px:?}");
    assert!(px[1].abs_diff(200) <= 1, "got: {px:?}");
    assert!(px[2].abs_diff(30) <= 1, "got: {px:?}");
    assert_eq!(px[3], 255);
}

#[test]
fn test_load_upscales_small_images() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_test_png(dir.path(), "tiny.png", 10, 20);

    let thumb = load_thumbnail(&path, 100.0).unwrap();

    assert_eq!((thumb.width, thumb.height), (100, 200));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_thumbnail(&dir.path().join("missing.png"), 100.0);
    assert!(matches!(result, Err(PointViewError::ImageError(_))));
}

#[test]
fn test_load_garbage_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();

    assert!(load_thumbnail(&path, 100.0).is_err());
}

#[test]
fn test_resolve_then_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    common::write_test_png(&dir.path().join("images"), "point_0.png", 40, 40);

    let path = resolve_source(dir.path(), "/images/point_0.png");
    let thumb = load_thumbnail(&path, 100.0).unwrap();

    assert_eq!((thumb.width, thumb.height), (100, 100));
}
