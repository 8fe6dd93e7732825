// productlens-ui/src/components/thumbnail_strip.rs
use leptos::*;

use crate::hooks::GalleryHandle;

#[component]
pub fn ThumbnailStrip(
    gallery: GalleryHandle,
    /// Active image URLs, in display order
    images: Memo<Vec<String>>,
) -> impl IntoView {
    let current = gallery.current_index;

    view! {
        <Show when=move || images.with(|urls| urls.len() > 1)>
            <div class="flex space-x-2 overflow-x-auto py-2">
                <For
                    each=move || images.get().into_iter().enumerate()
                    key=|(index, url)| (*index, url.clone())
                    children=move |(index, url)| {
                        let selected = move || current.get() == index;
                        view! {
                            <button
                                class=move || format!(
                                    "shrink-0 w-16 h-16 rounded-md overflow-hidden border-2 transition-colors {}",
                                    if selected() { "border-white" } else { "border-transparent opacity-70 hover:opacity-100" }
                                )
                                title=format!("Image {}", index + 1)
                                on:click=move |_| {
                                    gallery.dispatch(|g| g.select(index));
                                }
                            >
                                <img src=url class="w-full h-full object-cover" draggable="false" />
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
