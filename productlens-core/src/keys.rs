/// Keyboard commands understood by the full-screen viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Prev,
    Next,
    Close,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl ViewerKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ViewerKey::Prev),
            "ArrowRight" => Some(ViewerKey::Next),
            "Escape" => Some(ViewerKey::Close),
            "+" | "=" => Some(ViewerKey::ZoomIn),
            "-" => Some(ViewerKey::ZoomOut),
            "0" => Some(ViewerKey::ResetZoom),
            _ => None,
        }
    }
}
