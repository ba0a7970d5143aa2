#![allow(dead_code)]

use pointview_core::dataset::{Label, PointDataset};

/// Two-point dataset: point 0 is label 1, point 1 is label 2.
pub fn two_point_dataset() -> PointDataset {
    PointDataset::new(
        vec![10.0, 20.0],
        vec![15.0, 25.0],
        vec![Label(1), Label(2)],
        vec!["/a.png".to_string(), "/b.png".to_string()],
    )
    .expect("columns have equal length")
}

/// Build a dataset from `(x, y, label)` triples with paths `/p{i}.png`.
pub fn dataset_from(points: &[(f32, f32, i32)]) -> PointDataset {
    PointDataset::new(
        points.iter().map(|p| p.0).collect(),
        points.iter().map(|p| p.1).collect(),
        points.iter().map(|p| Label(p.2)).collect(),
        (0..points.len()).map(|i| format!("/p{i}.png")).collect(),
    )
    .expect("columns have equal length")
}

/// Write a solid-color RGB PNG of the given size into `dir` and return its path.
pub fn write_test_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 200, 30]));
    let path = dir.join(name);
    img.save(&path).expect("write PNG");
    path
}
