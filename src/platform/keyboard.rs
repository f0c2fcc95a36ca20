//! Window-level Escape handling for the QR overlay.

use dioxus::prelude::*;
use gloo::events::EventListener;
use portfolio_core::{ListenerSlot, QrGallery};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Close `gallery` when Escape is pressed anywhere on the page.
///
/// The `keydown` listener exists only while the overlay is open. It is
/// removed as soon as the overlay closes, and the slot signal drops it when
/// the calling component unmounts.
pub fn use_escape_dismiss(gallery: Signal<QrGallery>) {
    let mut slot: Signal<ListenerSlot<Option<EventListener>>> = use_signal(ListenerSlot::new);

    use_effect(move || {
        let open = gallery.read().is_open();
        slot.write().sync(open, || escape_listener(gallery));
    });
}

fn escape_listener(mut gallery: Signal<QrGallery>) -> Option<EventListener> {
    let window = web_sys::window()?;

    Some(EventListener::new(&window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let mut next = gallery.peek().clone();
        if next.handle_key(&event.key()) {
            tracing::debug!("QR overlay dismissed with Escape");
            gallery.set(next);
        }
    }))
}
