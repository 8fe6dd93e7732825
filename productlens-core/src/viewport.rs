use crate::config::{GestureConfig, PanClamping};
use crate::gesture::Surface;
use crate::points::{Point, Size};
use serde::{Deserialize, Serialize};

/// Direction of an image switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Prev,
}

/// A completed index change, `from` → `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TapRecord {
    surface: Surface,
    at_ms: f64,
}

/// Continuous viewer state: which image, how far zoomed, where panned.
///
/// This is the only place `current_index`, `zoom_level` and `pan_offset`
/// change. All operations clamp or no-op on bad input; none of them fail.
///
/// Invariants:
/// - `current_index < image_count`, or `0` when there are no images
/// - `zoom_level` within `[config.min_zoom, config.max_zoom]`
/// - any index change returns zoom and pan to rest
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    config: GestureConfig,
    image_count: usize,
    current_index: usize,
    zoom_level: f64,
    pan_offset: Point<f64>,
    surface_size: Option<Size>,
    last_tap: Option<TapRecord>,
    last_swipe_ms: Option<f64>,
}

impl ViewportState {
    pub fn new(image_count: usize, config: GestureConfig) -> Self {
        Self {
            config,
            image_count,
            current_index: 0,
            zoom_level: config.default_zoom,
            pan_offset: Point::ORIGIN,
            surface_size: None,
            last_tap: None,
            last_swipe_ms: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    pub fn pan_offset(&self) -> Point<f64> {
        self.pan_offset
    }

    /// Pan is only live above the resting zoom.
    pub fn is_zoomed(&self) -> bool {
        self.zoom_level > self.config.default_zoom
    }

    /// New image list: back to the first image at rest.
    pub fn set_image_count(&mut self, count: usize) {
        self.image_count = count;
        self.current_index = 0;
        self.reset();
    }

    /// Wrapping navigation. No-op with fewer than two images.
    pub fn navigate(&mut self, direction: Direction) -> Option<IndexChange> {
        if self.image_count <= 1 {
            return None;
        }
        let to = match direction {
            Direction::Next => (self.current_index + 1) % self.image_count,
            Direction::Prev => (self.current_index + self.image_count - 1) % self.image_count,
        };
        self.move_to(to)
    }

    /// Non-wrapping navigation; stops at either end.
    pub fn step_toward(&mut self, direction: Direction) -> Option<IndexChange> {
        let to = match direction {
            Direction::Next if self.current_index + 1 < self.image_count => self.current_index + 1,
            Direction::Prev if self.current_index > 0 => self.current_index - 1,
            _ => return None,
        };
        self.move_to(to)
    }

    /// Jump to `index` (thumbnail click). Out-of-range and same-index are no-ops.
    pub fn select(&mut self, index: usize) -> Option<IndexChange> {
        if index >= self.image_count || index == self.current_index {
            return None;
        }
        self.move_to(index)
    }

    fn move_to(&mut self, to: usize) -> Option<IndexChange> {
        let from = self.current_index;
        if from == to {
            return None;
        }
        self.current_index = to;
        self.reset();
        log::debug!("Image {} -> {} of {}", from, to, self.image_count);
        Some(IndexChange { from, to })
    }

    /// Set zoom, clamped to the configured range. Pan is kept.
    ///
    /// Returns the new zoom, or `None` when there is nothing to zoom.
    pub fn set_zoom(&mut self, zoom: f64) -> Option<f64> {
        if self.image_count == 0 || !zoom.is_finite() {
            return None;
        }
        self.zoom_level = self.config.clamp_zoom(zoom);
        self.pan_offset = self.clamp_pan(self.pan_offset);
        Some(self.zoom_level)
    }

    pub fn zoom_by(&mut self, step: f64) -> Option<f64> {
        self.set_zoom(self.zoom_level + step)
    }

    /// Double-tap transition: rest → double-tap zoom, anything else → rest.
    pub fn toggle_zoom(&mut self) -> Option<f64> {
        if self.image_count == 0 {
            return None;
        }
        if self.zoom_level == self.config.default_zoom {
            self.set_zoom(self.config.double_tap_zoom)
        } else {
            self.reset();
            Some(self.zoom_level)
        }
    }

    /// Set pan offset. Ignored unless zoomed.
    pub fn set_pan(&mut self, offset: Point<f64>) -> Option<Point<f64>> {
        if !self.is_zoomed() {
            return None;
        }
        self.pan_offset = self.clamp_pan(offset);
        Some(self.pan_offset)
    }

    pub fn reset(&mut self) {
        self.zoom_level = self.config.default_zoom;
        self.pan_offset = Point::ORIGIN;
    }

    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = Some(size);
        self.pan_offset = self.clamp_pan(self.pan_offset);
    }

    fn clamp_pan(&self, offset: Point<f64>) -> Point<f64> {
        let PanClamping::KeepVisible = self.config.pan_clamping else {
            return offset;
        };
        let Some(size) = self.surface_size.filter(|s| !s.is_empty()) else {
            return offset;
        };
        let overflow = (self.zoom_level / self.config.default_zoom - 1.0).max(0.0);
        let max_x = size.width * overflow / 2.0;
        let max_y = size.height * overflow / 2.0;
        Point::new(
            (*offset.x()).clamp(-max_x, max_x),
            (*offset.y()).clamp(-max_y, max_y),
        )
    }

    /// Register a tap. Returns `true` if it completes a double tap on the
    /// same surface; the pair is then consumed.
    pub fn register_tap(&mut self, surface: Surface, now_ms: f64) -> bool {
        let is_double = self.last_tap.is_some_and(|tap| {
            tap.surface == surface && now_ms - tap.at_ms <= self.config.double_tap_window_ms
        });
        self.last_tap = if is_double {
            None
        } else {
            Some(TapRecord {
                surface,
                at_ms: now_ms,
            })
        };
        is_double
    }

    pub fn record_swipe(&mut self, now_ms: f64) {
        self.last_swipe_ms = Some(now_ms);
    }

    /// True while a tap should still be read as the tail of a swipe.
    pub fn swipe_recently_completed(&self, now_ms: f64) -> bool {
        self.last_swipe_ms
            .is_some_and(|at| now_ms - at <= self.config.swipe_suppress_window_ms)
    }
}
