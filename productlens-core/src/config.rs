//! Gesture thresholds and zoom limits.
//!
//! Every numeric constant the interpreter and viewport use lives in
//! [`GestureConfig`]. The defaults are the storefront's tuned values; a JSON
//! override can be supplied at runtime (missing fields keep their defaults).

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How drag-pan offsets are bounded while zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanClamping {
    /// Pan freely; the image can be dragged fully off-screen.
    #[default]
    Unbounded,
    /// Keep the scaled image covering the surface.
    KeepVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Lower zoom bound, in percent.
    pub min_zoom: f64,
    /// Upper zoom bound, in percent.
    pub max_zoom: f64,
    /// Resting zoom. Pan only applies above this.
    pub default_zoom: f64,
    /// Zoom reached by a double tap from rest.
    pub double_tap_zoom: f64,
    /// Increment of the +/- zoom buttons.
    pub zoom_step: f64,
    /// Max gap between two taps that form a double tap.
    pub double_tap_window_ms: f64,
    /// How long after a swipe a tap is not treated as "open viewer".
    pub swipe_suppress_window_ms: f64,
    /// Horizontal travel that locks a session as swiping. Also the tap slop.
    pub swipe_lock_px: f64,
    /// Horizontal travel on release that commits a swipe navigation.
    pub swipe_commit_px: f64,
    pub pan_clamping: PanClamping,
}

pub const DEFAULT_GESTURE_CONFIG: GestureConfig = GestureConfig {
    min_zoom: 50.0,
    max_zoom: 300.0,
    default_zoom: 100.0,
    double_tap_zoom: 200.0,
    zoom_step: 25.0,
    double_tap_window_ms: 300.0,
    swipe_suppress_window_ms: 300.0,
    swipe_lock_px: 10.0,
    swipe_commit_px: 40.0,
    pan_clamping: PanClamping::Unbounded,
};

impl Default for GestureConfig {
    fn default() -> Self {
        DEFAULT_GESTURE_CONFIG
    }
}

impl GestureConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.min_zoom,
            self.max_zoom,
            self.default_zoom,
            self.double_tap_zoom,
            self.zoom_step,
            self.double_tap_window_ms,
            self.swipe_suppress_window_ms,
            self.swipe_lock_px,
            self.swipe_commit_px,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("values must be finite".into()));
        }
        if self.min_zoom <= 0.0 || self.min_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "zoom range [{}, {}] is empty or non-positive",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.default_zoom) {
            return Err(ConfigError::Invalid(format!(
                "default zoom {} outside [{}, {}]",
                self.default_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if self.double_tap_zoom <= self.default_zoom || self.double_tap_zoom > self.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "double-tap zoom {} must be above {} and at most {}",
                self.double_tap_zoom, self.default_zoom, self.max_zoom
            )));
        }
        if self.zoom_step <= 0.0 {
            return Err(ConfigError::Invalid("zoom step must be positive".into()));
        }
        if self.double_tap_window_ms < 0.0 || self.swipe_suppress_window_ms < 0.0 {
            return Err(ConfigError::Invalid("time windows must not be negative".into()));
        }
        if self.swipe_lock_px < 0.0 || self.swipe_commit_px < self.swipe_lock_px {
            return Err(ConfigError::Invalid(format!(
                "swipe thresholds lock={} commit={} are inconsistent",
                self.swipe_lock_px, self.swipe_commit_px
            )));
        }
        Ok(())
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
