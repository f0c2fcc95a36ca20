//! Contact record and its text encodings
//!
//! Two encodings are derived from the same [`ContactRecord`]:
//! - a vCard 3.0 contact card, saved or shared as a `.vcf` file
//! - a MECARD payload, short enough to fit in a scannable QR code

use serde::{Deserialize, Serialize};

/// The site owner's contact details.
///
/// Never mutated at runtime; every exported payload is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    /// Phone as displayed; normalized with [`normalize_phone`] on export
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub title: String,
    pub company: String,
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self {
            first_name: "Enrique".to_string(),
            last_name: "McLaughlin".to_string(),
            full_name: "Enrique McLaughlin".to_string(),
            email: "enrique.mclaughlin.careers@gmail.com".to_string(),
            phone: "347.779.5385".to_string(),
            linkedin_url: "https://www.linkedin.com/in/enrique-mclaughlin".to_string(),
            github_url: "https://github.com/enrique-mclaughlin".to_string(),
            title: "Investment Banking Analyst".to_string(),
            company: "Citi, M&A Group".to_string(),
        }
    }
}

impl ContactRecord {
    /// `mailto:` URI for the email address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// LinkedIn URL without scheme and `www.`, for display.
    pub fn linkedin_display(&self) -> &str {
        display_url(&self.linkedin_url)
    }

    /// GitHub URL without scheme and `www.`, for display.
    pub fn github_display(&self) -> &str {
        display_url(&self.github_url)
    }
}

fn display_url(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// Keep only ASCII digits and `+` signs.
///
/// `"347.779.5385"` becomes `"3477795385"`, `"+1 (347) 779-5385"` becomes
/// `"+13477795385"`.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Serialize the record as a vCard 3.0 contact card.
///
/// Lines are joined with `\n` and there is no trailing newline. The output
/// depends only on the record, so repeated calls are byte-identical.
pub fn build_contact_card_text(contact: &ContactRecord) -> String {
    let phone = normalize_phone(&contact.phone);

    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", contact.last_name, contact.first_name),
        format!("FN:{}", contact.full_name),
        format!("TITLE:{}", contact.title),
        format!("ORG:{}", contact.company),
        format!("TEL;TYPE=CELL:{}", phone),
        format!("EMAIL;TYPE=INTERNET:{}", contact.email),
        format!("URL;TYPE=LinkedIn:{}", contact.linkedin_url),
        format!("URL;TYPE=GitHub:{}", contact.github_url),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

/// Serialize name, phone, email and LinkedIn URL as a single-line MECARD.
pub fn build_qr_payload_text(contact: &ContactRecord) -> String {
    let phone = normalize_phone(&contact.phone);

    format!(
        "MECARD:N:{},{};TEL:{};EMAIL:{};URL:{};;",
        contact.last_name, contact.first_name, phone, contact.email, contact.linkedin_url
    )
}
