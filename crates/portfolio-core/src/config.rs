//! Site configuration.
//!
//! Every value has a default matching the published site, so an empty JSON
//! object (or no file at all) is a valid configuration.
//!
//! ```json
//! {
//!   "contact": { "phone": "+1 555 0100" },
//!   "config": { "qr": { "size": 512 } }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contact::ContactRecord;
use crate::error::PortfolioResult;
use crate::qr::QrServiceConfig;

/// Contact file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Name offered for the downloaded or shared file
    pub file_name: String,
    pub mime_type: String,
    /// Text shown by the native share sheet
    pub share_text: String,
    /// How long the download's object URL stays alive
    pub revoke_delay_ms: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: "enrique-mclaughlin-contact.vcf".to_string(),
            mime_type: "text/vcard;charset=utf-8".to_string(),
            share_text: "Save contact".to_string(),
            revoke_delay_ms: 1500,
        }
    }
}

/// Static assets served next to the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub resume_path: String,
    /// File name used by the resume download link
    pub resume_file_name: String,
    pub resume_title: String,
    pub portrait_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            resume_path: "/Mclaughlin_Enrique_Resume_V3.pdf".to_string(),
            resume_file_name: "Mclaughlin_Enrique_Resume_V3.pdf".to_string(),
            resume_title: "Mclaughlin Enrique Resume".to_string(),
            portrait_path: "/contact-photo.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub qr: QrServiceConfig,
    pub export: ExportConfig,
    pub assets: AssetConfig,
}

/// Everything a page needs: who the site is about and how it is served.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub contact: ContactRecord,
    pub config: SiteConfig,
}

impl Site {
    pub fn from_json_str(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
