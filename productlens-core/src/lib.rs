pub mod config;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod image_set;
pub mod keys;
pub mod points;
pub mod transforms;
pub mod viewport;

pub use config::{GestureConfig, PanClamping, DEFAULT_GESTURE_CONFIG};
pub use error::ConfigError;
pub use gallery::Gallery;
pub use gesture::{GestureAction, GestureInterpreter, PointerInput, PointerKind, Surface};
pub use image_set::{ImageRef, ImageSet};
pub use keys::ViewerKey;
pub use points::{Point, Size};
pub use transforms::{HoverZone, ImageTransform};
pub use viewport::{Direction, IndexChange, ViewportState};
