//! Resume page - the resume document in a full-height frame.

use dioxus::prelude::*;
use portfolio_ui::BackButton;

use crate::context::use_site;

#[component]
pub fn ResumePage(on_back: EventHandler<()>) -> Element {
    let site = use_site();
    let assets = &site.config.assets;

    rsx! {
        main { class: "resume-page",
            div { class: "resume-back",
                BackButton { onclick: on_back, class: "blurred".to_string() }
            }
            iframe {
                class: "resume-frame",
                src: "{assets.resume_path}",
                title: "{assets.resume_title}",
            }
        }
    }
}
