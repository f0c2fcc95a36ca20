//! Portfolio Core Library
//!
//! Platform-independent logic behind the portfolio site.
//!
//! ## Overview
//!
//! The site has three views (home, resume, contact) selected by a `page`
//! query parameter. The contact view exports the owner's details as a
//! contact card file and shows a gallery of QR codes rendered by an external
//! image service.
//!
//! Everything that touches the browser (history, share sheet, downloads,
//! keyboard listeners) is behind a trait or a generic slot so the rules can
//! be exercised natively:
//!
//! - [`navigation::Navigator`] is the only writer of the `page` parameter
//! - [`export::save_contact`] prefers a share sheet and falls back to a download
//! - [`gallery::QrGallery`] tracks the expanded QR overlay
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{build_contact_card_text, initial_view, ContactRecord, View};
//!
//! assert_eq!(initial_view(Some("https://example.com/?page=resume")), View::Resume);
//!
//! let card = build_contact_card_text(&ContactRecord::default());
//! assert!(card.starts_with("BEGIN:VCARD"));
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod export;
pub mod gallery;
pub mod navigation;
pub mod qr;
pub mod url;

// Re-exports
pub use config::{AssetConfig, ExportConfig, Site, SiteConfig};
pub use contact::{build_contact_card_text, build_qr_payload_text, normalize_phone, ContactRecord};
pub use error::{PortfolioError, PortfolioResult};
pub use export::{
    save_contact, ContactFile, DirectoryDownloader, FileDownloader, NoShareSheet, SaveOutcome,
    ShareRequest, ShareSheet,
};
pub use gallery::{ListenerSlot, OverlayClick, QrGallery};
pub use navigation::{initial_view, rewrite_href, HistoryBackend, Navigator, View, PAGE_PARAM};
pub use qr::{qr_gallery_items, QrItem, QrServiceConfig, QrTarget};
pub use url::{PageUrl, QueryParams};
