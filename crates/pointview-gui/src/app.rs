use std::sync::mpsc;

use pointview_core::config::ViewerConfig;
use pointview_core::dataset::PointDataset;
use pointview_core::thumbnail::resolve_source;
use pointview_core::view::{ViewState, ViewerEvent};
use tracing::{debug, warn};

use crate::convert::thumbnail_to_color_image;
use crate::messages::{LoaderCommand, LoaderResult};
use crate::panels;
use crate::state::ThumbnailCache;
use crate::worker;

pub struct PointViewApp {
    /// `None` when the loader thread could not be started; thumbnails are then skipped.
    pub cmd_tx: Option<mpsc::Sender<LoaderCommand>>,
    pub result_rx: mpsc::Receiver<LoaderResult>,
    pub dataset: PointDataset,
    pub config: ViewerConfig,
    pub view: ViewState,
    pub thumbnails: ThumbnailCache,
    /// Physical pixels per logical point, refreshed every frame.
    pub pixels_per_point: f32,
}

impl PointViewApp {
    pub fn new(ctx: &egui::Context, dataset: PointDataset, config: ViewerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = match worker::spawn_loader(result_tx, ctx.clone()) {
            Ok(tx) => Some(tx),
            Err(e) => {
                warn!(error = %e, "Failed to spawn thumbnail loader");
                None
            }
        };

        Self {
            cmd_tx,
            result_rx,
            view: ViewState::new(&config),
            dataset,
            config,
            thumbnails: ThumbnailCache::default(),
            pixels_per_point: ctx.pixels_per_point(),
        }
    }

    /// Drain all pending results from the loader.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                LoaderResult::ThumbnailLoaded {
                    src,
                    thumbnail,
                    elapsed,
                } => {
                    debug!(src = %src, ?elapsed, "Thumbnail decoded");
                    let texture = ctx.load_texture(
                        format!("thumbnail:{src}"),
                        thumbnail_to_color_image(&thumbnail),
                        egui::TextureOptions::LINEAR,
                    );
                    self.thumbnails.set_ready(src, texture);
                }
                LoaderResult::ThumbnailFailed { src, message } => {
                    debug!(src = %src, message = %message, "Thumbnail unavailable");
                    self.thumbnails.set_failed(src);
                }
            }
        }
    }

    /// Feed one event through the view state and request its thumbnail if one is now due.
    pub fn dispatch(&mut self, event: ViewerEvent) {
        match self.view.apply(event, &self.dataset, &self.config) {
            Ok(true) => self.request_thumbnail(),
            Ok(false) => {}
            Err(e) => warn!(%event, error = %e, "Event rejected"),
        }
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = ViewerEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    fn request_thumbnail(&mut self) {
        let Some(view) = self.view.thumbnail() else {
            return;
        };
        let Some(ref cmd_tx) = self.cmd_tx else {
            return;
        };
        if !self.thumbnails.begin(view.src) {
            return;
        }
        let _ = cmd_tx.send(LoaderCommand::LoadThumbnail {
            src: view.src.to_string(),
            path: resolve_source(&self.config.image_root, view.src),
            // Decode at physical resolution; the panel draws at `width` points.
            width: self.config.thumbnail.width * self.pixels_per_point,
        });
    }

    /// Latest pointer position reported this frame, anywhere in the window.
    fn latest_pointer_move(ctx: &egui::Context) -> Option<egui::Pos2> {
        ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::PointerMoved(pos) => Some(*pos),
                _ => None,
            })
        })
    }
}

impl eframe::App for PointViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pixels_per_point = ctx.pixels_per_point();
        self.poll_results(ctx);

        if let Some(pos) = Self::latest_pointer_move(ctx) {
            self.dispatch(ViewerEvent::PointerMove { x: pos.x, y: pos.y });
        }

        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::thumbnail::show(ctx, self);
    }
}

#[cfg(test)]
mod tests {
    use pointview_core::demo::demo_dataset;

    use super::*;
    use crate::state::ThumbnailSlot;

    fn test_app(
        ctx: &egui::Context,
    ) -> (
        PointViewApp,
        mpsc::Receiver<LoaderCommand>,
        mpsc::Sender<LoaderResult>,
    ) {
        let config = ViewerConfig::default();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let app = PointViewApp {
            cmd_tx: Some(cmd_tx),
            result_rx,
            dataset: demo_dataset(&config.image_base).unwrap(),
            view: ViewState::new(&config),
            config,
            thumbnails: ThumbnailCache::default(),
            pixels_per_point: ctx.pixels_per_point(),
        };
        (app, cmd_rx, result_tx)
    }

    #[test]
    fn hover_requests_thumbnail_once() {
        let ctx = egui::Context::default();
        let (mut app, cmd_rx, _result_tx) = test_app(&ctx);

        app.dispatch(ViewerEvent::PointerEnter(0));

        let LoaderCommand::LoadThumbnail { src, path, width } = cmd_rx.try_recv().unwrap();
        assert_eq!(src, "/images/point_images/point_0.png");
        assert_eq!(path, std::path::Path::new("./images/point_images/point_0.png"));
        assert_eq!(width, 100.0 * ctx.pixels_per_point());

        app.dispatch_all([ViewerEvent::PointerLeave, ViewerEvent::PointerEnter(0)]);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn failed_thumbnail_is_cached_and_not_requested_again() {
        let ctx = egui::Context::default();
        let (mut app, cmd_rx, result_tx) = test_app(&ctx);

        app.dispatch(ViewerEvent::PointerEnter(1));
        let LoaderCommand::LoadThumbnail { src, .. } = cmd_rx.try_recv().unwrap();
        result_tx
            .send(LoaderResult::ThumbnailFailed {
                src: src.clone(),
                message: "No such file or directory".to_string(),
            })
            .unwrap();

        app.poll_results(&ctx);
        assert!(matches!(app.thumbnails.get(&src), Some(ThumbnailSlot::Failed)));

        app.dispatch_all([ViewerEvent::PointerLeave, ViewerEvent::PointerEnter(1)]);
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.view.thumbnail().map(|t| t.src), Some(src.as_str()));
    }

    #[test]
    fn rejected_hover_sends_nothing() {
        let ctx = egui::Context::default();
        let (mut app, cmd_rx, _result_tx) = test_app(&ctx);

        app.dispatch(ViewerEvent::PointerEnter(99));

        assert!(app.view.is_idle());
        assert!(cmd_rx.try_recv().is_err());
    }
}
