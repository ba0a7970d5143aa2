use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use pointview_core::thumbnail::load_thumbnail;
use tracing::{info, warn};

use crate::messages::{LoaderCommand, LoaderResult};

/// Spawn the thumbnail loader thread. Returns the command sender.
pub fn spawn_loader(
    result_tx: mpsc::Sender<LoaderResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<LoaderCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoaderCommand>();

    std::thread::Builder::new()
        .name("pointview-loader".into())
        .spawn(move || {
            loader_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<LoaderResult>, ctx: &egui::Context, result: LoaderResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn loader_loop(
    cmd_rx: mpsc::Receiver<LoaderCommand>,
    tx: mpsc::Sender<LoaderResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            LoaderCommand::LoadThumbnail { src, path, width } => {
                handle_load_thumbnail(src, &path, width, &tx, &ctx);
            }
        }
    }
}

fn handle_load_thumbnail(
    src: String,
    path: &Path,
    width: f32,
    tx: &mpsc::Sender<LoaderResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_thumbnail(path, width) {
        Ok(thumbnail) => {
            info!(
                src = %src,
                width = thumbnail.width,
                height = thumbnail.height,
                "Thumbnail loaded"
            );
            send(tx, ctx, LoaderResult::ThumbnailLoaded {
                src,
                thumbnail,
                elapsed: start.elapsed(),
            });
        }
        Err(e) => {
            warn!(src = %src, path = %path.display(), error = %e, "Thumbnail loading failed");
            send(tx, ctx, LoaderResult::ThumbnailFailed {
                src,
                message: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(path: &Path) -> LoaderResult {
        let ctx = egui::Context::default();
        let (tx, rx) = mpsc::channel();
        handle_load_thumbnail("/point_0.png".to_string(), path, 100.0, &tx, &ctx);
        rx.try_recv().unwrap()
    }

    #[test]
    fn missing_image_reports_failure() {
        let dir = tempfile::tempdir().unwrap();

        match load(&dir.path().join("point_0.png")) {
            LoaderResult::ThumbnailFailed { src, message } => {
                assert_eq!(src, "/point_0.png");
                assert!(!message.is_empty());
            }
            LoaderResult::ThumbnailLoaded { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn png_is_decoded_to_requested_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("point_0.png");
        image::RgbImage::from_pixel(40, 20, image::Rgb([10, 200, 30]))
            .save(&path)
            .unwrap();

        match load(&path) {
            LoaderResult::ThumbnailLoaded { src, thumbnail, .. } => {
                assert_eq!(src, "/point_0.png");
                assert_eq!((thumbnail.width, thumbnail.height), (100, 50));
            }
            LoaderResult::ThumbnailFailed { message, .. } => panic!("load failed: {message}"),
        }
    }

    #[test]
    fn loader_thread_answers_commands() {
        let dir = tempfile::tempdir().unwrap();
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = spawn_loader(result_tx, egui::Context::default()).unwrap();

        cmd_tx
            .send(LoaderCommand::LoadThumbnail {
                src: "/missing.png".to_string(),
                path: dir.path().join("missing.png"),
                width: 100.0,
            })
            .unwrap();

        let result = result_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        assert!(matches!(result, LoaderResult::ThumbnailFailed { ref src, .. } if src == "/missing.png"));
    }
}
