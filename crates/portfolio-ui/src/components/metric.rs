//! Metric tiles and badges for the home page snapshot.

use dioxus::prelude::*;

/// A labelled value in a bordered tile.
#[component]
pub fn Metric(label: String, value: String) -> Element {
    rsx! {
        div { class: "metric",
            p { class: "metric-label", "{label}" }
            p { class: "metric-value", "{value}" }
        }
    }
}

#[component]
pub fn Badge(children: Element) -> Element {
    rsx! {
        span { class: "badge", {children} }
    }
}
