//! Contact page - contact details, save-to-contacts and QR codes.

use dioxus::prelude::*;
use portfolio_core::{
    qr_gallery_items, save_contact, HistoryBackend, OverlayClick, QrGallery, SaveOutcome,
};
use portfolio_ui::{BackButton, Button, ButtonVariant, ContactItem, QrCodeCard};

use crate::context::use_site;
use crate::platform::{use_escape_dismiss, BrowserDownloader, BrowserHistory, BrowserShareSheet};

#[component]
pub fn ContactPage(on_back: EventHandler<()>) -> Element {
    let site = use_site();
    let mut gallery = use_signal(QrGallery::new);
    use_escape_dismiss(gallery);

    // Rebuilt on every render from the live URL
    let page_href = BrowserHistory.current_href();
    let items = qr_gallery_items(&site.contact, page_href.as_deref(), &site.config.qr);
    let expanded = gallery.read().expanded().cloned();

    let save_site = site.clone();
    let on_save = move |_: ()| {
        let site = save_site.clone();
        spawn(async move {
            let share_sheet = BrowserShareSheet;
            let downloader = BrowserDownloader::new(site.config.export.revoke_delay_ms);
            match save_contact(&site, &share_sheet, &downloader).await {
                Ok(SaveOutcome::Shared) => tracing::info!("Contact card shared"),
                Ok(SaveOutcome::Downloaded) => tracing::info!("Contact card downloaded"),
                Err(e) => tracing::error!("Failed to save contact card: {}", e),
            }
        });
    };

    let contact = &site.contact;

    rsx! {
        main { class: "contact-page",
            div { class: "contact-toolbar",
                BackButton { onclick: on_back }
                p { class: "contact-toolbar-title", "Contact" }
            }

            section { class: "contact-card",
                div { class: "contact-banner", "aria-label": "Profile banner" }

                div { class: "contact-body",
                    div { class: "contact-profile",
                        img {
                            class: "contact-portrait",
                            src: "{site.config.assets.portrait_path}",
                            alt: "{contact.full_name} portrait",
                        }
                        div {
                            h1 { class: "contact-name", "{contact.full_name}" }
                            p { class: "muted", "{contact.title}" }
                            p { class: "muted", "{contact.company}" }
                        }
                    }

                    div { class: "contact-grid",
                        ContactItem { label: "Email".to_string(), icon: "\u{2709}".to_string(),
                            "{contact.email}"
                        }
                        ContactItem { label: "Phone".to_string(), icon: "\u{260E}".to_string(),
                            "{contact.phone}"
                        }
                        ContactItem {
                            label: "LinkedIn".to_string(),
                            href: contact.linkedin_url.clone(),
                            icon: "in".to_string(),
                            "{contact.linkedin_display()}"
                        }
                        ContactItem {
                            label: "GitHub".to_string(),
                            href: contact.github_url.clone(),
                            icon: "gh".to_string(),
                            "{contact.github_display()}"
                        }
                    }

                    div { class: "save-row",
                        div {
                            p { class: "save-row-title", "Save Contact" }
                            p { class: "muted small",
                                "Share natively on supported devices or download a contact file."
                            }
                        }
                        Button { variant: ButtonVariant::Outline, onclick: on_save, "Save to Contacts" }
                    }

                    div {
                        p { class: "eyebrow", "QR Codes" }
                        div { class: "qr-grid",
                            for item in items {
                                QrCodeCard {
                                    key: "{item.label}",
                                    item: item.clone(),
                                    on_expand: move |item| gallery.write().expand(item),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(expanded) = expanded {
                div {
                    class: "qr-overlay",
                    onclick: move |_| gallery.write().handle_overlay_click(OverlayClick::Backdrop),

                    img {
                        class: "qr-overlay-image",
                        src: "{expanded.image_src}",
                        alt: "{expanded.image_alt}",
                        onclick: move |e| e.stop_propagation(),
                    }
                }
            }
        }
    }
}
