use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::consts::MAX_THUMBNAIL_SIDE;
use crate::error::{PointViewError, Result};

/// Decoded thumbnail, resized for display. Pixels are RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Thumbnail {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Map a thumbnail source onto the filesystem below `root`.
///
/// Sources are web-style paths (`/images/a.png`), so a leading `/` is relative
/// to the root rather than the filesystem root.
pub fn resolve_source(root: &Path, src: &str) -> PathBuf {
    root.join(src.trim_start_matches('/'))
}

/// Display size for an image of `src_width` x `src_height` scaled to `target_width`.
///
/// Fails when either resulting side would exceed [`MAX_THUMBNAIL_SIDE`].
pub fn thumbnail_size(src_width: u32, src_height: u32, target_width: f32) -> Result<(u32, u32)> {
    let invalid = PointViewError::InvalidDimensions {
        width: src_width,
        height: src_height,
    };
    if src_width == 0 || src_height == 0 {
        return Err(invalid);
    }
    let width = target_width.round().max(1.0);
    let height = (src_height as f64 * width as f64 / src_width as f64)
        .round()
        .max(1.0);
    let max = MAX_THUMBNAIL_SIDE as f64;
    if width as f64 > max || height > max {
        return Err(invalid);
    }
    Ok((width as u32, height as u32))
}

/// Decode the image at `path` and resize it to `target_width` keeping its aspect ratio.
pub fn load_thumbnail(path: &Path, target_width: f32) -> Result<Thumbnail> {
    let img = image::open(path)?;
    let (width, height) = thumbnail_size(img.width(), img.height(), target_width)?;
    let rgba = img
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgba8()
        .into_raw();

    Ok(Thumbnail {
        width,
        height,
        rgba,
    })
}
