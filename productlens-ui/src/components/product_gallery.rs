// productlens-ui/src/components/product_gallery.rs
use leptos::*;
use productlens_core::{Direction, Surface};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::{FullscreenViewer, ThumbnailStrip};
use crate::hooks::{pointer_input, use_gesture_surface, GalleryHandle};

const NAV_BUTTON_CLASS: &str =
    "absolute top-1/2 -translate-y-1/2 text-white bg-black/30 hover:bg-black/50 rounded-full p-2 transition-colors";

/// Main product image with thumbnails and the full-screen viewer.
///
/// Touch swipes navigate, a tap opens the viewer, and on hover-capable
/// pointers the left/right thirds of the image step through the set.
#[component]
pub fn ProductGallery(
    gallery: GalleryHandle,
    /// Fired after the full-screen viewer closes
    #[prop(optional)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let surface_ref = create_node_ref::<html::Div>();
    use_gesture_surface(gallery, Surface::Main, surface_ref);

    let images = create_memo(move |_| {
        gallery
            .state
            .with(|g| g.images().iter().map(ToString::to_string).collect::<Vec<_>>())
    });
    let current_url = create_memo(move |_| {
        gallery
            .state
            .with(|g| g.current_image().map(ToString::to_string))
    });
    let has_many = move || images.with(|urls| urls.len() > 1);

    let on_hover = move |e: ev::PointerEvent| {
        // Pressed pointers belong to the gesture session.
        if e.buttons() != 0 {
            return;
        }
        let Some(element) = surface_ref.get_untracked() else {
            return;
        };
        let input = pointer_input(&e, &element);
        let width = element.get_bounding_client_rect().width();
        gallery.dispatch(|g| g.hover_move(input.kind, *input.position.x(), width));
    };

    view! {
        <div class="flex flex-col w-full select-none">
            <div
                node_ref=surface_ref
                class="relative w-full aspect-square overflow-hidden bg-gray-100 cursor-pointer"
                style="touch-action: pan-y"
                on:pointermove=on_hover
                on:pointerleave=move |_| gallery.state.update(|g| g.hover_leave())
            >
                {move || match current_url.get() {
                    Some(url) => view! {
                        <img
                            src=url
                            class="w-full h-full object-contain pointer-events-none will-change-transform"
                            style:transform=move || gallery.transform.get().to_css()
                            draggable="false"
                            alt=move || format!("Product image {}", gallery.current_index.get() + 1)
                        />
                    }.into_view(),
                    None => view! {
                        <div class="flex items-center justify-center w-full h-full text-gray-400 text-sm">
                            "No images available"
                        </div>
                    }.into_view(),
                }}

                <Show when=has_many>
                    <button
                        class=format!("{} left-2", NAV_BUTTON_CLASS)
                        title="Previous image"
                        on:click=move |_| {
                            gallery.dispatch(|g| g.navigate(Direction::Prev));
                        }
                    >
                        <ChevronLeftIcon />
                    </button>
                    <button
                        class=format!("{} right-2", NAV_BUTTON_CLASS)
                        title="Next image"
                        on:click=move |_| {
                            gallery.dispatch(|g| g.navigate(Direction::Next));
                        }
                    >
                        <ChevronRightIcon />
                    </button>
                </Show>
            </div>

            <ThumbnailStrip gallery=gallery images=images />

            <Show when=move || gallery.is_viewer_open.get()>
                <FullscreenViewer gallery=gallery on_close=on_close />
            </Show>
        </div>
    }
}
