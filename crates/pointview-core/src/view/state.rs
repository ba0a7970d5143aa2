use tracing::debug;

use crate::config::ViewerConfig;
use crate::dataset::PointDataset;
use crate::error::Result;

use super::event::ViewerEvent;

/// Thumbnail the viewer should currently draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailView<'a> {
    pub src: &'a str,
    /// Top-left corner in screen coordinates.
    pub position: [f32; 2],
}

/// Transient UI state owned by one viewer instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    point_size: f32,
    hovered: Option<usize>,
    image_src: Option<String>,
    image_position: [f32; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ViewState {
    /// Idle state with the configured default point size.
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            point_size: config.point_size.default,
            hovered: None,
            image_src: None,
            image_position: [0.0, 0.0],
        }
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn image_src(&self) -> Option<&str> {
        self.image_src.as_deref()
    }

    pub fn image_position(&self) -> [f32; 2] {
        self.image_position
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none()
    }

    /// The thumbnail to show, if a point is hovered and it has a non-empty source.
    pub fn thumbnail(&self) -> Option<ThumbnailView<'_>> {
        self.hovered?;
        let src = self.image_src.as_deref().filter(|s| !s.is_empty())?;
        Some(ThumbnailView {
            src,
            position: self.image_position,
        })
    }

    /// Apply one event. Returns whether the state changed.
    ///
    /// A rejected event leaves the state untouched.
    pub fn apply(
        &mut self,
        event: ViewerEvent,
        dataset: &PointDataset,
        config: &ViewerConfig,
    ) -> Result<bool> {
        let before = self.clone();

        match event {
            ViewerEvent::PointerEnter(index) => {
                let src = dataset.file_path(index)?;
                self.hovered = Some(index);
                if self.image_src.as_deref() != Some(src) {
                    debug!(index, src, "image source updated");
                }
                self.image_src = Some(src.to_string());
            }
            ViewerEvent::PointerLeave => {
                self.hovered = None;
                self.image_src = None;
            }
            ViewerEvent::PointerMove { x, y } => {
                self.image_position = [
                    x + config.thumbnail.offset_x,
                    y + config.thumbnail.offset_y,
                ];
            }
            ViewerEvent::SliderChange(value) => {
                if let Some(size) = config.point_size.clamp(value) {
                    self.point_size = size;
                }
            }
        }

        Ok(*self != before)
    }

    /// Apply a batch of events in order, stopping at the first rejected one.
    pub fn apply_all(
        &mut self,
        events: impl IntoIterator<Item = ViewerEvent>,
        dataset: &PointDataset,
        config: &ViewerConfig,
    ) -> Result<bool> {
        let mut changed = false;
        for event in events {
            changed |= self.apply(event, dataset, config)?;
        }
        Ok(changed)
    }
}
