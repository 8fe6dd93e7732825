//! Pixel-space math shared by the interpreter and the renderer.

use crate::points::Point;
use serde::{Deserialize, Serialize};

/// Render transform for the current image: scale about the transform origin,
/// then translate by the pan offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTransform {
    pub scale: f64,
    pub translate: Point<f64>,
}

impl ImageTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Point::ORIGIN,
    };

    /// `zoom` is a percentage; `rest_zoom` is the percentage that maps to 1.0.
    /// Pan is dropped at or below rest, where it has no meaning.
    pub fn from_viewport(zoom: f64, rest_zoom: f64, pan: Point<f64>) -> Self {
        let translate = if zoom > rest_zoom { pan } else { Point::ORIGIN };
        Self {
            scale: zoom / rest_zoom,
            translate,
        }
    }

    /// CSS `transform` value. Translation is applied first so pan stays in
    /// screen pixels regardless of scale.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x(),
            self.translate.y(),
            self.scale
        )
    }
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One of three equal horizontal bands of the main image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverZone {
    Left,
    Center,
    Right,
}

impl HoverZone {
    /// Zone for `x` on a surface `width` pixels wide. `None` when the point is
    /// outside the surface or the surface has no width.
    pub fn from_position(x: f64, width: f64) -> Option<Self> {
        if !(width > 0.0) || !(0.0..=width).contains(&x) {
            return None;
        }
        let third = width / 3.0;
        Some(if x < third {
            HoverZone::Left
        } else if x < third * 2.0 {
            HoverZone::Center
        } else {
            HoverZone::Right
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_from_zoomed_viewport() {
        let t = ImageTransform::from_viewport(200.0, 100.0, Point::new(30.0, -10.0));
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.translate, Point::new(30.0, -10.0));
    }

    #[test]
    fn test_transform_drops_pan_at_rest_and_below() {
        let pan = Point::new(30.0, -10.0);
        assert_eq!(
            ImageTransform::from_viewport(100.0, 100.0, pan),
            ImageTransform::IDENTITY
        );
        let out = ImageTransform::from_viewport(50.0, 100.0, pan);
        assert_eq!(out.scale, 0.5);
        assert!(out.translate.is_origin());
    }

    #[test]
    fn test_css_output() {
        let t = ImageTransform::from_viewport(150.0, 100.0, Point::new(12.5, -4.0));
        assert_eq!(t.to_css(), "translate(12.5px, -4px) scale(1.5)");
    }

    #[test]
    fn test_hover_zone_thirds() {
        assert_eq!(HoverZone::from_position(0.0, 300.0), Some(HoverZone::Left));
        assert_eq!(HoverZone::from_position(99.9, 300.0), Some(HoverZone::Left));
        assert_eq!(HoverZone::from_position(100.0, 300.0), Some(HoverZone::Center));
        assert_eq!(HoverZone::from_position(199.9, 300.0), Some(HoverZone::Center));
        assert_eq!(HoverZone::from_position(200.0, 300.0), Some(HoverZone::Right));
        assert_eq!(HoverZone::from_position(300.0, 300.0), Some(HoverZone::Right));
    }

    #[test]
    fn test_hover_zone_outside_surface() {
        assert_eq!(HoverZone::from_position(-1.0, 300.0), None);
        assert_eq!(HoverZone::from_position(301.0, 300.0), None);
        assert_eq!(HoverZone::from_position(10.0, 0.0), None);
        assert_eq!(HoverZone::from_position(10.0, f64::NAN), None);
    }
}
