//! QR gallery items.
//!
//! QR images are not generated locally: each item points at an external
//! image service with the encoded data in the query string.

use serde::{Deserialize, Serialize};

use crate::contact::{build_qr_payload_text, ContactRecord};

/// External QR image endpoint and its fixed render parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrServiceConfig {
    pub endpoint: String,
    /// Width and height of the rendered image, in pixels
    pub size: u32,
    /// Quiet zone around the code, in modules
    pub margin: u32,
}

impl Default for QrServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            size: 256,
            margin: 0,
        }
    }
}

impl QrServiceConfig {
    /// Image URL that renders `data` as a QR code.
    pub fn image_src(&self, data: &str) -> String {
        format!(
            "{}?size={}x{}&margin={}&data={}",
            self.endpoint,
            self.size,
            self.size,
            self.margin,
            urlencoding::encode(data)
        )
    }
}

/// What a gallery entry encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrTarget {
    ContactCard,
    Email,
    LinkedIn,
    GitHub,
    ThisPage,
}

impl QrTarget {
    /// Gallery order.
    pub const ALL: [QrTarget; 5] = [
        QrTarget::ContactCard,
        QrTarget::Email,
        QrTarget::LinkedIn,
        QrTarget::GitHub,
        QrTarget::ThisPage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QrTarget::ContactCard => "Contact Card",
            QrTarget::Email => "Email",
            QrTarget::LinkedIn => "LinkedIn",
            QrTarget::GitHub => "GitHub",
            QrTarget::ThisPage => "This Page",
        }
    }

    pub fn image_alt(&self) -> &'static str {
        match self {
            QrTarget::ContactCard => "QR code with phone, email, and LinkedIn details",
            QrTarget::Email => "QR code for email address",
            QrTarget::LinkedIn => "QR code for LinkedIn profile",
            QrTarget::GitHub => "QR code for GitHub profile",
            QrTarget::ThisPage => "QR code for this contact page",
        }
    }

    /// Text encoded in the QR image. The page QR encodes an empty string
    /// when the page URL is unknown.
    pub fn data(&self, contact: &ContactRecord, page_href: Option<&str>) -> String {
        match self {
            QrTarget::ContactCard => build_qr_payload_text(contact),
            QrTarget::Email => contact.mailto(),
            QrTarget::LinkedIn => contact.linkedin_url.clone(),
            QrTarget::GitHub => contact.github_url.clone(),
            QrTarget::ThisPage => page_href.unwrap_or_default().to_string(),
        }
    }

    /// Link target for the entry; `#` stands in for an unknown page URL.
    pub fn href(&self, contact: &ContactRecord, page_href: Option<&str>) -> String {
        match self {
            QrTarget::Email => contact.mailto(),
            QrTarget::LinkedIn => contact.linkedin_url.clone(),
            QrTarget::GitHub => contact.github_url.clone(),
            QrTarget::ContactCard | QrTarget::ThisPage => match page_href {
                Some(href) if !href.is_empty() => href.to_string(),
                _ => "#".to_string(),
            },
        }
    }
}

/// One rendered gallery entry. Derived on every render, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrItem {
    pub target: QrTarget,
    pub label: String,
    pub href: String,
    pub image_src: String,
    pub image_alt: String,
}

impl QrItem {
    pub fn build(
        target: QrTarget,
        contact: &ContactRecord,
        page_href: Option<&str>,
        service: &QrServiceConfig,
    ) -> Self {
        Self {
            target,
            label: target.label().to_string(),
            href: target.href(contact, page_href),
            image_src: service.image_src(&target.data(contact, page_href)),
            image_alt: target.image_alt().to_string(),
        }
    }
}

/// The five gallery entries, in display order.
pub fn qr_gallery_items(
    contact: &ContactRecord,
    page_href: Option<&str>,
    service: &QrServiceConfig,
) -> Vec<QrItem> {
    QrTarget::ALL
        .iter()
        .map(|target| QrItem::build(*target, contact, page_href, service))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/?page=contact";

    #[test]
    fn image_src_encodes_data() {
        let service = QrServiceConfig::default();
        assert_eq!(
            service.image_src("mailto:a@b.c"),
            "https://api.qrserver.com/v1/create-qr-code/?size=256x256&margin=0&data=mailto%3Aa%40b.c"
        );
    }

    #[test]
    fn gallery_has_five_items_in_order() {
        let items = qr_gallery_items(&ContactRecord::default(), Some(PAGE), &QrServiceConfig::default());
        let labels: Vec<_> = items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["Contact Card", "Email", "LinkedIn", "GitHub", "This Page"]);
    }

    #[test]
    fn items_encode_their_targets() {
        let contact = ContactRecord::default();
        let service = QrServiceConfig::default();
        let items = qr_gallery_items(&contact, Some(PAGE), &service);

        let card_data = urlencoding::encode(&build_qr_payload_text(&contact)).into_owned();
        assert!(items[0].image_src.ends_with(&card_data));
        assert_eq!(items[1].href, "mailto:enrique.mclaughlin.careers@gmail.com");
        assert_eq!(items[2].href, contact.linkedin_url);
        assert_eq!(items[3].href, contact.github_url);
        assert_eq!(items[4].href, PAGE);
        assert_eq!(items[4].image_src, service.image_src(PAGE));
    }

    #[test]
    fn unknown_page_url_falls_back() {
        let items = qr_gallery_items(&ContactRecord::default(), None, &QrServiceConfig::default());
        assert_eq!(items[0].href, "#");
        assert_eq!(items[4].href, "#");
        assert!(items[4].image_src.ends_with("&data="));
    }

    #[test]
    fn service_parameters_are_applied() {
        let service = QrServiceConfig {
            endpoint: "https://qr.test/render".to_string(),
            size: 128,
            margin: 2,
        };
        let item = QrItem::build(QrTarget::GitHub, &ContactRecord::default(), None, &service);
        assert!(item.image_src.starts_with("https://qr.test/render?size=128x128&margin=2&data="));
        assert_eq!(item.image_alt, "QR code for GitHub profile");
    }
}
