use std::path::PathBuf;
use std::time::Duration;

use pointview_core::thumbnail::Thumbnail;

/// Commands sent from UI thread to the loader thread.
pub enum LoaderCommand {
    /// Decode the image behind `src` and resize it to `width`.
    LoadThumbnail {
        src: String,
        path: PathBuf,
        width: f32,
    },
}

/// Results sent from the loader thread back to UI thread.
pub enum LoaderResult {
    ThumbnailLoaded {
        src: String,
        thumbnail: Thumbnail,
        elapsed: Duration,
    },
    ThumbnailFailed {
        src: String,
        message: String,
    },
}
