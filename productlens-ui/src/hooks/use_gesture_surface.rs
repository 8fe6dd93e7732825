// productlens-ui/src/hooks/use_gesture_surface.rs
use leptos::*;
use productlens_core::{PointerInput, PointerKind, Surface};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlDivElement, PointerEvent};

use super::use_gallery::GalleryHandle;

/// Pointer event in coordinates relative to the surface's top-left corner.
pub fn pointer_input(e: &PointerEvent, surface: &Element) -> PointerInput {
    let rect = surface.get_bounding_client_rect();
    PointerInput::new(
        e.pointer_id(),
        PointerKind::from_pointer_type(&e.pointer_type()),
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
    )
}

/// Milliseconds from `performance.now()`, or 0 when unavailable.
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

type PointerClosure = Closure<dyn FnMut(PointerEvent)>;

/// Window-level pointer listeners that live for one gesture session.
///
/// Moves and releases keep reaching the gallery after the pointer leaves the
/// surface. Dropping the guard removes all three listeners.
pub struct DragListeners {
    window: web_sys::Window,
    listeners: [(&'static str, PointerClosure); 3],
}

impl DragListeners {
    pub fn attach(
        gallery: GalleryHandle,
        surface: HtmlDivElement,
        slot: StoredValue<Option<DragListeners>>,
    ) -> Option<Self> {
        let window = web_sys::window()?;

        let on_move = {
            let surface = surface.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let input = pointer_input(&e, &surface);
                gallery.dispatch(|g| g.pointer_move(input));
            }) as Box<dyn FnMut(PointerEvent)>)
        };

        let on_up = {
            let surface = surface.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                let input = pointer_input(&e, &surface);
                let now = performance_now();
                gallery.dispatch(|g| g.pointer_up(input, now));
                release_when_idle(gallery, slot);
            }) as Box<dyn FnMut(PointerEvent)>)
        };

        let on_cancel = Closure::wrap(Box::new(move |e: PointerEvent| {
            let input = pointer_input(&e, &surface);
            gallery.state.update(|g| g.pointer_cancel(input));
            release_when_idle(gallery, slot);
        }) as Box<dyn FnMut(PointerEvent)>);

        let listeners = [
            ("pointermove", on_move),
            ("pointerup", on_up),
            ("pointercancel", on_cancel),
        ];
        for (event, closure) in &listeners {
            let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        log::trace!("Drag listeners attached");

        Some(Self { window, listeners })
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        for (event, closure) in &self.listeners {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        log::trace!("Drag listeners removed");
    }
}

/// Drop the listeners once no pointer is down. Deferred because this runs
/// inside one of the closures being dropped.
fn release_when_idle(gallery: GalleryHandle, slot: StoredValue<Option<DragListeners>>) {
    if gallery.is_gesture_active() {
        return;
    }
    set_timeout(
        move || {
            // A new session may have started in between; it reuses the listeners.
            if !gallery.is_gesture_active() {
                slot.try_update_value(|listeners| *listeners = None);
            }
        },
        Duration::ZERO,
    );
}

/// Route pointer presses on `target` into the gallery as `surface` input.
///
/// Non-primary mouse buttons and presses on overlaid buttons are ignored.
/// Everything after the press is handled by [`DragListeners`] so a drag can
/// leave the element.
pub fn use_gesture_surface(
    gallery: GalleryHandle,
    surface: Surface,
    target: NodeRef<html::Div>,
) {
    let slot = store_value::<Option<DragListeners>>(None);

    let _ = leptos_use::use_event_listener(target, ev::pointerdown, move |e: PointerEvent| {
        if e.pointer_type() == "mouse" && e.button() != 0 {
            return;
        }
        // Buttons layered over the surface handle their own clicks.
        let on_control = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| matches!(el.closest("button"), Ok(Some(_))));
        if on_control {
            return;
        }
        let Some(element) = target.get_untracked() else {
            return;
        };
        let element: HtmlDivElement = (*element).clone();

        let input = pointer_input(&e, &element);
        gallery.dispatch(|g| g.pointer_down(surface, input));

        let idle = slot.with_value(Option::is_none);
        if idle && gallery.is_gesture_active() {
            slot.set_value(DragListeners::attach(gallery, element, slot));
        }
    });

    on_cleanup(move || {
        slot.try_update_value(|listeners| *listeners = None);
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::collections::HashMap;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pointer_event(kind: &str, id: i32, x: i32, y: i32) -> PointerEvent {
        let init = web_sys::PointerEventInit::new();
        init.set_pointer_id(id);
        init.set_pointer_type("touch");
        init.set_client_x(x);
        init.set_client_y(y);
        PointerEvent::new_with_event_init_dict(kind, &init).expect("pointer event")
    }

    #[wasm_bindgen_test]
    fn drag_listeners_follow_the_session() {
        let runtime = create_runtime();

        let gallery = crate::hooks::use_gallery(
            Signal::derive(|| vec!["a.jpg".to_string(), "b.jpg".to_string()]),
            Signal::derive(HashMap::new),
            Signal::derive(|| None),
        );
        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        let surface: HtmlDivElement = document
            .create_element("div")
            .expect("div")
            .unchecked_into();

        let slot = store_value::<Option<DragListeners>>(None);
        let down = pointer_event("pointerdown", 1, 200, 0);
        gallery.dispatch(|g| g.pointer_down(Surface::Main, pointer_input(&down, &surface)));
        slot.set_value(DragListeners::attach(gallery, surface, slot));
        assert!(gallery.is_gesture_active());

        let window = web_sys::window().expect("window");
        let up = pointer_event("pointerup", 1, 100, 0);
        window.dispatch_event(&up).expect("dispatch");

        assert_eq!(gallery.current_index.get_untracked(), 1);
        assert!(!gallery.is_gesture_active());

        runtime.dispose();
    }
}
