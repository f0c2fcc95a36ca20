//! Home page - introduction and snapshot of the site owner.

use dioxus::prelude::*;
use portfolio_ui::{Badge, Button, ButtonVariant, LinkButton, Metric};

use crate::context::use_site;

/// Snapshot tiles, label then value.
const SNAPSHOT: [(&str, &str); 4] = [
    ("Current Focus", "M&A Prep + Deal Thinking"),
    ("Core Domain", "Investment Banking"),
    ("Strength", "Structured Analysis"),
    ("Location", "New York, NY"),
];

#[component]
pub fn HomePage(on_open_resume: EventHandler<()>, on_open_contact: EventHandler<()>) -> Element {
    let site = use_site();
    let assets = &site.config.assets;

    rsx! {
        main { class: "home",
            header { class: "home-header",
                p { class: "home-brand", "{site.contact.full_name}" }
                nav { class: "home-nav",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_open_contact.call(()),
                        "Contact"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_open_resume.call(()),
                        "Resume"
                    }
                    LinkButton {
                        variant: ButtonVariant::Outline,
                        href: assets.resume_path.clone(),
                        download: assets.resume_file_name.clone(),
                        "Download Resume"
                    }
                }
            }

            section { class: "home-hero",
                div { class: "home-intro",
                    Badge { "New York City" }
                    h1 { class: "home-title", "Finance and strategy focused portfolio." }
                    p { class: "home-lede",
                        "Building a clean record of projects, research, and execution "
                        "across investment banking, analysis, and operating work."
                    }
                    div { class: "home-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_open_resume.call(()),
                            "View Resume"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_open_contact.call(()),
                            "Contact"
                            span { class: "btn-icon", "aria-hidden": "true", "\u{2709}" }
                        }
                    }
                }

                div { class: "home-divider" }

                div { class: "home-snapshot",
                    p { class: "eyebrow", "Snapshot" }
                    div { class: "metric-grid",
                        for (label, value) in SNAPSHOT {
                            Metric { key: "{label}", label: label.to_string(), value: value.to_string() }
                        }
                    }
                    div { class: "role-card",
                        p { class: "role-card-title", "Current FT Role" }
                        p { class: "role-card-body", "{site.contact.company}, {site.contact.title}." }
                    }
                }
            }
        }
    }
}
