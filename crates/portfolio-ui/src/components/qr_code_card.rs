//! QR Code Card - one entry of the contact page's QR grid.

use dioxus::prelude::*;
use portfolio_core::QrItem;

/// Labelled QR thumbnail that asks to be enlarged when clicked.
///
/// The image is loaded from the external QR service; a failed load shows as
/// a broken image.
#[component]
pub fn QrCodeCard(item: QrItem, on_expand: EventHandler<QrItem>) -> Element {
    let clicked = item.clone();

    rsx! {
        button {
            class: "qr-card",
            r#type: "button",
            title: "{item.href}",
            onclick: move |_| on_expand.call(clicked.clone()),

            p { class: "qr-card-label", "{item.label}" }
            div { class: "qr-card-frame",
                img {
                    class: "qr-card-image",
                    src: "{item.image_src}",
                    alt: "{item.image_alt}",
                }
            }
        }
    }
}
