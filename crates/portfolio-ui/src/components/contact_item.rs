//! Contact Item - labelled contact detail, optionally linked.

use dioxus::prelude::*;

#[component]
pub fn ContactItem(
    label: String,
    /// Opens in a new tab when present
    #[props(default)]
    href: Option<String>,
    /// Short glyph shown before the value
    #[props(default)]
    icon: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "contact-item",
            p { class: "contact-item-label", "{label}" }
            if let Some(href) = href {
                a {
                    class: "contact-item-value contact-item-link",
                    href: "{href}",
                    target: "_blank",
                    rel: "noreferrer",
                    if let Some(icon) = icon.clone() {
                        span { class: "contact-item-icon", "aria-hidden": "true", "{icon}" }
                    }
                    {children}
                }
            } else {
                p { class: "contact-item-value",
                    if let Some(icon) = icon.clone() {
                        span { class: "contact-item-icon", "aria-hidden": "true", "{icon}" }
                    }
                    {children}
                }
            }
        }
    }
}
