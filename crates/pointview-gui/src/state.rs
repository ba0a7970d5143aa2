use std::collections::HashMap;

/// Load status of one thumbnail source.
pub enum ThumbnailSlot {
    Loading,
    Ready(egui::TextureHandle),
    /// Decoding failed. Never retried.
    Failed,
}

/// Thumbnails keyed by source path, living on the UI thread.
#[derive(Default)]
pub struct ThumbnailCache {
    slots: HashMap<String, ThumbnailSlot>,
}

impl ThumbnailCache {
    /// Mark `src` as loading. Returns `false` if it was already requested.
    pub fn begin(&mut self, src: &str) -> bool {
        if self.slots.contains_key(src) {
            return false;
        }
        self.slots.insert(src.to_string(), ThumbnailSlot::Loading);
        true
    }

    pub fn set_ready(&mut self, src: String, texture: egui::TextureHandle) {
        self.slots.insert(src, ThumbnailSlot::Ready(texture));
    }

    pub fn set_failed(&mut self, src: String) {
        self.slots.insert(src, ThumbnailSlot::Failed);
    }

    pub fn get(&self, src: &str) -> Option<&ThumbnailSlot> {
        self.slots.get(src)
    }
}
