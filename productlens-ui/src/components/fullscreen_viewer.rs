// productlens-ui/src/components/fullscreen_viewer.rs
use leptos::*;
use leptos_use::{use_element_size, use_event_listener, use_window, UseElementSizeReturn};
use productlens_core::{Direction, Size, Surface, ViewerKey};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, CloseIcon};
use crate::components::ZoomControls;
use crate::hooks::{forward_close, use_gesture_surface, GalleryHandle};

const CONTROL_CLASS: &str =
    "text-white hover:text-gray-200 hover:bg-white/10 rounded-full p-2 transition-colors";

#[component]
pub fn FullscreenViewer(
    gallery: GalleryHandle,
    #[prop(optional_no_strip)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let surface_ref = create_node_ref::<html::Div>();
    use_gesture_surface(gallery, Surface::Fullscreen, surface_ref);

    // Pan clamping needs the rendered size of the zoom surface.
    let UseElementSizeReturn { width, height } = use_element_size(surface_ref);
    create_effect(move |_| {
        let size = Size::new(width.get(), height.get());
        if !size.is_empty() {
            gallery.state.update(|g| g.set_surface_size(size));
        }
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        let Some(key) = ViewerKey::from_key(&e.key()) else {
            return;
        };
        e.prevent_default();
        forward_close(gallery.dispatch(|g| g.key(key)), on_close);
    });

    let close = move |_| {
        forward_close(gallery.dispatch(|g| g.close_viewer()), on_close);
    };

    let current_url = create_memo(move |_| {
        gallery
            .state
            .with(|g| g.current_image().map(ToString::to_string))
    });
    let count = create_memo(move |_| gallery.state.with(|g| g.images().len()));
    let transform = move || gallery.transform.get().to_css();

    view! {
        <div class="fixed inset-0 z-50 flex flex-col bg-black/95 select-none">
            <div class="flex items-center justify-between px-4 py-3">
                <span class="text-white text-sm tabular-nums">
                    {move || format!("{} / {}", gallery.current_index.get() + 1, count.get())}
                </span>
                <button class=CONTROL_CLASS title="Close" on:click=close>
                    <CloseIcon />
                </button>
            </div>

            <div
                node_ref=surface_ref
                class="relative flex-1 overflow-hidden"
                style="touch-action: none"
            >
                {move || current_url.get().map(|url| view! {
                    <img
                        src=url
                        class="w-full h-full object-contain pointer-events-none will-change-transform"
                        style:transform=transform
                        draggable="false"
                    />
                })}

                <Show when={move || count.get() > 1}>
                    <button
                        class=format!("absolute left-2 top-1/2 -translate-y-1/2 {}", CONTROL_CLASS)
                        title="Previous image"
                        on:click=move |_| {
                            gallery.dispatch(|g| g.navigate(Direction::Prev));
                        }
                    >
                        <ChevronLeftIcon />
                    </button>
                    <button
                        class=format!("absolute right-2 top-1/2 -translate-y-1/2 {}", CONTROL_CLASS)
                        title="Next image"
                        on:click=move |_| {
                            gallery.dispatch(|g| g.navigate(Direction::Next));
                        }
                    >
                        <ChevronRightIcon />
                    </button>
                </Show>
            </div>

            <div class="flex justify-center py-3">
                <ZoomControls gallery=gallery />
            </div>
        </div>
    }
}
