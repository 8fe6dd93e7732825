// productlens-ui/src/app.rs
use leptos::*;
use std::collections::HashMap;

use crate::components::ProductGallery;
use crate::hooks::use_gallery;

const BASE_IMAGES: [&str; 4] = [
    "https://picsum.photos/id/21/1200/1200",
    "https://picsum.photos/id/26/1200/1200",
    "https://picsum.photos/id/96/1200/1200",
    "https://picsum.photos/id/103/1200/1200",
];

const VARIANTS: [(&str, &[&str]); 2] = [
    (
        "red",
        &[
            "https://picsum.photos/id/1080/1200/1200",
            "https://picsum.photos/id/1081/1200/1200",
        ],
    ),
    ("blue", &["https://picsum.photos/id/1084/1200/1200"]),
];

fn variant_images() -> HashMap<String, Vec<String>> {
    VARIANTS
        .iter()
        .map(|(key, urls)| {
            (
                key.to_string(),
                urls.iter().map(|u| u.to_string()).collect(),
            )
        })
        .collect()
}

/// Demo product page: one gallery, a colour picker and a state readout.
#[component]
pub fn App() -> impl IntoView {
    let (variant_key, set_variant_key) = create_signal(None::<String>);

    let gallery = use_gallery(
        Signal::derive(|| BASE_IMAGES.iter().map(|u| u.to_string()).collect()),
        Signal::derive(variant_images),
        variant_key.into(),
    );

    let on_close = Callback::new(|_: ()| log::debug!("Viewer closed"));

    let swatch = move |key: Option<&'static str>, label: &'static str| {
        let selected = move || variant_key.get().as_deref() == key;
        view! {
            <button
                class=move || format!(
                    "px-3 py-1 rounded-full border text-sm transition-colors {}",
                    if selected() { "border-black bg-black text-white" } else { "border-gray-300 hover:border-black" }
                )
                on:click=move |_| set_variant_key.set(key.map(str::to_string))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="max-w-xl mx-auto p-4 space-y-4">
            <ProductGallery gallery=gallery on_close=on_close />

            <div class="flex space-x-2">
                {swatch(None, "Default")}
                {swatch(Some("red"), "Red")}
                {swatch(Some("blue"), "Blue")}
            </div>

            <div class="text-sm text-gray-500 tabular-nums">
                {move || format!(
                    "Image {} · Zoom {:.0}%",
                    gallery.current_index.get() + 1,
                    gallery.zoom_level.get()
                )}
            </div>
        </div>
    }
}
