// productlens-ui/src/components/zoom_controls.rs
use leptos::*;

use crate::components::icons::{ResetZoomIcon, ZoomInIcon, ZoomOutIcon};
use crate::hooks::GalleryHandle;

const BUTTON_CLASS: &str =
    "text-white hover:text-gray-200 hover:bg-white/10 rounded-full p-2 transition-colors disabled:opacity-40";

#[component]
pub fn ZoomControls(gallery: GalleryHandle) -> impl IntoView {
    let config = gallery.state.with_untracked(|g| *g.viewport().config());
    let zoom = gallery.zoom_level;

    view! {
        <div class="flex items-center space-x-1 bg-black/50 backdrop-blur-sm rounded-full px-2 py-1">
            <button
                class=BUTTON_CLASS
                title="Zoom out"
                disabled=move || zoom.get() <= config.min_zoom
                on:click=move |_| {
                    gallery.dispatch(|g| g.zoom_out());
                }
            >
                <ZoomOutIcon />
            </button>
            <span class="text-white text-sm tabular-nums w-12 text-center">
                {move || format!("{:.0}%", zoom.get())}
            </span>
            <button
                class=BUTTON_CLASS
                title="Zoom in"
                disabled=move || zoom.get() >= config.max_zoom
                on:click=move |_| {
                    gallery.dispatch(|g| g.zoom_in());
                }
            >
                <ZoomInIcon />
            </button>
            <button
                class=BUTTON_CLASS
                title="Reset zoom"
                disabled=move || zoom.get() == config.default_zoom
                on:click=move |_| {
                    gallery.dispatch(|g| g.reset_zoom());
                }
            >
                <ResetZoomIcon />
            </button>
        </div>
    }
}
