//! Display-side state fed by the session's observer callbacks.

use eframe::egui;
use keep_delete_core::ReviewObserver;
use std::path::{Path, PathBuf};

/// Decoded image currently on screen.
pub(super) struct LoadedImage {
    pub texture: egui::TextureHandle,
    pub size: (u32, u32),
}

#[derive(Default)]
pub(super) struct ReviewView {
    pub counter: (usize, usize),
    pub undo_enabled: bool,
    pub finished_notice: bool,
    /// Set by `on_advance`; consumed by [`ReviewView::sync_texture`].
    pending: Option<Option<PathBuf>>,
    pub image: Option<LoadedImage>,
}

impl ReviewView {
    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.counter.0, self.counter.1)
    }

    /// Uploads the image requested by the last advance, if any.
    pub fn sync_texture(&mut self, ctx: &egui::Context) {
        if let Some(next) = self.pending.take() {
            self.image = next.and_then(|path| load_texture(ctx, &path));
        }
    }
}

impl ReviewObserver for ReviewView {
    fn on_advance(&mut self, current: Option<&Path>) {
        if current.is_some() {
            self.finished_notice = false;
        }
        self.pending = Some(current.map(Path::to_path_buf));
    }

    fn on_finished(&mut self) {
        self.finished_notice = true;
    }

    fn on_counter_changed(&mut self, reviewed: usize, total: usize) {
        self.counter = (reviewed, total);
    }

    fn on_undo_available(&mut self, available: bool) {
        self.undo_enabled = available;
    }
}

fn load_texture(ctx: &egui::Context, path: &Path) -> Option<LoadedImage> {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            let color =
                egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba.into_raw());
            let name = format!("image:{}", path.display());
            let texture = ctx.load_texture(name, color, egui::TextureOptions::LINEAR);
            Some(LoadedImage {
                texture,
                size: (w, h),
            })
        }
        Err(e) => {
            tracing::warn!("Failed to load image {}: {}", path.display(), e);
            None
        }
    }
}
