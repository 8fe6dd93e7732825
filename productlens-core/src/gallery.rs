use crate::config::GestureConfig;
use crate::gesture::{GestureAction, GestureInterpreter, PointerInput, PointerKind, Surface};
use crate::image_set::{ImageRef, ImageSet};
use crate::keys::ViewerKey;
use crate::points::{Point, Size};
use crate::transforms::ImageTransform;
use crate::viewport::{Direction, ViewportState};

/// Product image viewer: the one object the UI drives.
///
/// Owns the active image set, the viewport and the gesture interpreter, plus
/// whether the full-screen viewer is open. Every input method returns the
/// action it produced, if any, so the caller can react (e.g. fire `on_close`).
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: ImageSet,
    viewport: ViewportState,
    gestures: GestureInterpreter,
    viewer_open: bool,
}

impl Gallery {
    pub fn new(images: ImageSet) -> Self {
        Self::with_config(images, GestureConfig::default())
    }

    pub fn with_config(images: ImageSet, config: GestureConfig) -> Self {
        let viewport = ViewportState::new(images.len(), config);
        Self {
            images,
            viewport,
            gestures: GestureInterpreter::new(),
            viewer_open: false,
        }
    }

    // ========== Outputs ==========

    pub fn images(&self) -> &[ImageRef] {
        self.images.images()
    }

    pub fn image_set(&self) -> &ImageSet {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.viewport.current_index()
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.viewport.current_index())
    }

    pub fn zoom_level(&self) -> f64 {
        self.viewport.zoom_level()
    }

    pub fn pan_offset(&self) -> Point<f64> {
        self.viewport.pan_offset()
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer_open
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gestures.is_active()
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn transform(&self) -> ImageTransform {
        ImageTransform::from_viewport(
            self.viewport.zoom_level(),
            self.viewport.config().default_zoom,
            self.viewport.pan_offset(),
        )
    }

    // ========== Image set ==========

    /// Switch colour variant. Returns `true` if the active images changed,
    /// in which case the viewer starts over at the first image.
    pub fn set_variant(&mut self, key: Option<String>) -> bool {
        let changed = self.images.select_variant(key);
        if changed {
            self.restart();
        }
        changed
    }

    /// New product.
    pub fn replace_images(&mut self, images: ImageSet) {
        self.images = images;
        self.restart();
    }

    fn restart(&mut self) {
        self.viewport.set_image_count(self.images.len());
        self.gestures.reset();
    }

    // ========== Explicit controls ==========

    pub fn navigate(&mut self, direction: Direction) -> Option<GestureAction> {
        let change = self.viewport.navigate(direction)?;
        self.gestures.clear_hover();
        Some(GestureAction::Navigated(change))
    }

    /// Thumbnail click.
    pub fn select(&mut self, index: usize) -> Option<GestureAction> {
        let change = self.viewport.select(index)?;
        self.gestures.clear_hover();
        Some(GestureAction::Navigated(change))
    }

    /// Zoom buttons only exist in the full-screen viewer.
    pub fn zoom_in(&mut self) -> Option<GestureAction> {
        self.zoom_step(self.viewport.config().zoom_step)
    }

    pub fn zoom_out(&mut self) -> Option<GestureAction> {
        self.zoom_step(-self.viewport.config().zoom_step)
    }

    fn zoom_step(&mut self, step: f64) -> Option<GestureAction> {
        if !self.viewer_open {
            return None;
        }
        self.viewport.zoom_by(step).map(GestureAction::ZoomChanged)
    }

    pub fn reset_zoom(&mut self) -> Option<GestureAction> {
        if self.images.is_empty() {
            return None;
        }
        self.viewport.reset();
        Some(GestureAction::ZoomChanged(self.viewport.zoom_level()))
    }

    pub fn open_viewer(&mut self) -> Option<GestureAction> {
        if self.viewer_open || self.images.is_empty() {
            return None;
        }
        self.viewer_open = true;
        self.viewport.reset();
        self.gestures.reset();
        log::debug!("Viewer opened at image {}", self.current_index());
        Some(GestureAction::OpenViewer)
    }

    pub fn close_viewer(&mut self) -> Option<GestureAction> {
        if !self.viewer_open {
            return None;
        }
        self.viewer_open = false;
        self.viewport.reset();
        self.gestures.reset();
        log::debug!("Viewer closed");
        Some(GestureAction::CloseViewer)
    }

    pub fn key(&mut self, key: ViewerKey) -> Option<GestureAction> {
        if !self.viewer_open {
            return None;
        }
        match key {
            ViewerKey::Prev => self.navigate(Direction::Prev),
            ViewerKey::Next => self.navigate(Direction::Next),
            ViewerKey::Close => self.close_viewer(),
            ViewerKey::ZoomIn => self.zoom_in(),
            ViewerKey::ZoomOut => self.zoom_out(),
            ViewerKey::ResetZoom => self.reset_zoom(),
        }
    }

    pub fn set_surface_size(&mut self, size: Size) {
        self.viewport.set_surface_size(size);
    }

    // ========== Pointer input ==========

    pub fn pointer_down(&mut self, surface: Surface, input: PointerInput) -> Option<GestureAction> {
        self.gestures
            .pointer_down(&mut self.viewport, surface, input)
    }

    pub fn pointer_move(&mut self, input: PointerInput) -> Option<GestureAction> {
        self.gestures.pointer_move(&mut self.viewport, input)
    }

    pub fn pointer_up(&mut self, input: PointerInput, now_ms: f64) -> Option<GestureAction> {
        let action = self.gestures.pointer_up(&mut self.viewport, input, now_ms);
        match action {
            Some(GestureAction::OpenViewer) => self.open_viewer(),
            other => other,
        }
    }

    pub fn pointer_cancel(&mut self, input: PointerInput) {
        self.gestures.pointer_cancel(input);
    }

    pub fn hover_move(&mut self, kind: PointerKind, x: f64, width: f64) -> Option<GestureAction> {
        if self.viewer_open {
            return None;
        }
        self.gestures
            .hover_move(&mut self.viewport, Surface::Main, kind, x, width)
    }

    pub fn hover_leave(&mut self) {
        self.gestures.hover_leave();
    }
}
