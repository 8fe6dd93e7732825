use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position or offset in CSS pixels.
///
/// Pointer positions are relative to the surface that received the event;
/// pan offsets are relative to the unpanned image position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &T {
        &self.x
    }

    pub fn y(&self) -> &T {
        &self.y
    }

    pub fn add(&self, other: &Self) -> Self
    where
        T: Add<Output = T> + Clone,
    {
        Self {
            x: self.x.clone() + other.x.clone(),
            y: self.y.clone() + other.y.clone(),
        }
    }

    pub fn sub(&self, other: &Self) -> Self
    where
        T: Sub<Output = T> + Clone,
    {
        Self {
            x: self.x.clone() - other.x.clone(),
            y: self.y.clone() - other.y.clone(),
        }
    }
}

impl Point<f64> {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Euclidean distance, used for pinch spans.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Rendered size of a viewer surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero or negative sizes come from elements that are not laid out yet.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
