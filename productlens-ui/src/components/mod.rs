pub mod fullscreen_viewer;
pub mod icons;
pub mod product_gallery;
pub mod thumbnail_strip;
pub mod zoom_controls;

pub use fullscreen_viewer::FullscreenViewer;
pub use product_gallery::ProductGallery;
pub use thumbnail_strip::ThumbnailStrip;
pub use zoom_controls::ZoomControls;
