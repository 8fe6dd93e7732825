use leptos::*;
use productlens_core::{Gallery, GestureAction, ImageSet, ImageTransform};
use std::collections::HashMap;

/// Reactive handle to one product gallery.
///
/// `state` is the single source of truth; the derived signals are what the
/// surrounding page reads (thumbnail highlight, zoom readout, modal flag).
#[derive(Clone, Copy)]
pub struct GalleryHandle {
    pub state: RwSignal<Gallery>,
    pub current_index: Signal<usize>,
    pub zoom_level: Signal<f64>,
    pub is_viewer_open: Signal<bool>,
    pub transform: Signal<ImageTransform>,
}

impl GalleryHandle {
    /// Run an input against the gallery. Subscribers are only notified when
    /// the input was classified into an action, so plain pointer noise does
    /// not re-render anything.
    pub fn dispatch<F>(&self, f: F) -> Option<GestureAction>
    where
        F: FnOnce(&mut Gallery) -> Option<GestureAction>,
    {
        let action = self.state.try_update_untracked(f).flatten();
        if action.is_some() {
            self.state.update(|_| {});
        }
        action
    }

    pub fn is_gesture_active(&self) -> bool {
        self.state.with_untracked(Gallery::is_gesture_active)
    }
}

/// Forward a close to the page, which owns the open/closed flag.
pub fn forward_close(action: Option<GestureAction>, on_close: Option<Callback<()>>) {
    if let (Some(GestureAction::CloseViewer), Some(on_close)) = (action, on_close) {
        on_close.call(());
    }
}

/// Create a gallery that follows the product page's image inputs.
///
/// A new base list or variant map means a new product and restarts the
/// gallery. A new variant key re-derives the active images; the gallery only
/// restarts if that produced a different list.
pub fn use_gallery(
    images: Signal<Vec<String>>,
    variant_images: Signal<HashMap<String, Vec<String>>>,
    variant_key: Signal<Option<String>>,
) -> GalleryHandle {
    let config = crate::config::get_gesture_config();
    let initial = ImageSet::from_urls(images.get_untracked(), variant_images.get_untracked());
    let state = create_rw_signal(Gallery::with_config(initial, config));

    create_effect(move |prev: Option<(Vec<String>, HashMap<String, Vec<String>>)>| {
        let base = images.get();
        let variants = variant_images.get();
        let key = variant_key.get();

        let product_changed = prev
            .as_ref()
            .is_some_and(|(b, v)| *b != base || *v != variants);

        state.update(|g| {
            if product_changed {
                log::debug!("Product images replaced ({} images)", base.len());
                g.replace_images(ImageSet::from_urls(base.clone(), variants.clone()));
            }
            g.set_variant(key);
        });

        (base, variants)
    });

    GalleryHandle {
        state,
        current_index: Signal::derive(move || state.with(Gallery::current_index)),
        zoom_level: Signal::derive(move || state.with(Gallery::zoom_level)),
        is_viewer_open: Signal::derive(move || state.with(Gallery::is_viewer_open)),
        transform: Signal::derive(move || state.with(Gallery::transform)),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use productlens_core::Direction;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn handle(count: usize) -> GalleryHandle {
        let urls = (0..count).map(|i| format!("img-{i}.jpg")).collect::<Vec<_>>();
        use_gallery(
            Signal::derive(move || urls.clone()),
            Signal::derive(HashMap::new),
            Signal::derive(|| None),
        )
    }

    #[wasm_bindgen_test]
    fn dispatch_updates_derived_signals() {
        let runtime = create_runtime();

        let gallery = handle(3);
        assert_eq!(gallery.current_index.get_untracked(), 0);

        let action = gallery.dispatch(|g| g.navigate(Direction::Next));
        assert!(action.is_some());
        assert_eq!(gallery.current_index.get_untracked(), 1);

        gallery.dispatch(|g| g.open_viewer());
        gallery.dispatch(|g| g.zoom_in());
        assert!(gallery.is_viewer_open.get_untracked());
        assert_eq!(gallery.zoom_level.get_untracked(), 125.0);
        assert_eq!(gallery.transform.get_untracked().scale, 1.25);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn noop_dispatch_reports_nothing() {
        let runtime = create_runtime();

        let gallery = handle(1);
        assert_eq!(gallery.dispatch(|g| g.navigate(Direction::Next)), None);
        assert_eq!(gallery.dispatch(|g| g.zoom_in()), None);
        assert!(!gallery.is_gesture_active());

        runtime.dispose();
    }
}
