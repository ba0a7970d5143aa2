use crate::dataset::{Label, PointDataset};
use crate::error::Result;

const DEMO_X: [f32; 4] = [10.0, 20.0, 30.0, 40.0];
const DEMO_Y: [f32; 4] = [15.0, 25.0, 35.0, 45.0];
const DEMO_LABELS: [i32; 4] = [1, 2, 1, 2];

/// Thumbnail path of point `index` under `base`.
pub fn point_image_path(base: &str, index: usize) -> String {
    format!("{}/point_{index}.png", base.trim_end_matches('/'))
}

/// Four-point fixture the viewer starts with.
pub fn demo_dataset(image_base: &str) -> Result<PointDataset> {
    let file_path = (0..DEMO_X.len())
        .map(|i| point_image_path(image_base, i))
        .collect();

    PointDataset::new(
        DEMO_X.to_vec(),
        DEMO_Y.to_vec(),
        DEMO_LABELS.iter().copied().map(Label).collect(),
        file_path,
    )
}
