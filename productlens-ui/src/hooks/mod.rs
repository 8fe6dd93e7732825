mod use_gallery;
mod use_gesture_surface;

pub use use_gallery::{forward_close, use_gallery, GalleryHandle};
pub use use_gesture_surface::{
    performance_now, pointer_input, use_gesture_surface, DragListeners,
};
