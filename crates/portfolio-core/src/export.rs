//! Saving the contact card.
//!
//! [`save_contact`] picks one of two channels each time it runs:
//!
//! 1. the host's native share sheet, when it exists and accepts the file
//! 2. a plain file download otherwise, or when sharing fails for any reason
//!
//! The capability probe happens on every call since permissions can change
//! while the page is open. A cancelled share is indistinguishable from an
//! unsupported one and also ends in a download.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::{ExportConfig, Site};
use crate::contact::{build_contact_card_text, ContactRecord};
use crate::error::{PortfolioError, PortfolioResult};

/// The contact card packaged as a named, typed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ContactFile {
    pub fn from_record(contact: &ContactRecord, config: &ExportConfig) -> Self {
        Self {
            file_name: config.file_name.clone(),
            mime_type: config.mime_type.clone(),
            contents: build_contact_card_text(contact),
        }
    }
}

/// Everything handed to a share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub file: ContactFile,
}

/// Which channel delivered the contact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Shared,
    Downloaded,
}

/// A platform share sheet that may or may not exist.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ShareSheet {
    /// Whether the host can share this request's file right now.
    async fn can_share(&self, request: &ShareRequest) -> bool;

    /// Hand the file to the share sheet. Rejection and user cancellation are
    /// both errors.
    async fn share(&self, request: &ShareRequest) -> PortfolioResult<()>;
}

/// Delivers the file directly to the user.
pub trait FileDownloader {
    fn download(&self, file: &ContactFile) -> PortfolioResult<()>;
}

/// Share sheet for hosts without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareSheet;

#[async_trait(?Send)]
impl ShareSheet for NoShareSheet {
    async fn can_share(&self, _request: &ShareRequest) -> bool {
        false
    }

    async fn share(&self, _request: &ShareRequest) -> PortfolioResult<()> {
        Err(PortfolioError::ShareUnavailable)
    }
}

/// Writes the file into a directory, the native counterpart of a browser
/// download.
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `file` ends up.
    pub fn target_path(&self, file: &ContactFile) -> PathBuf {
        self.dir.join(&file.file_name)
    }
}

impl FileDownloader for DirectoryDownloader {
    fn download(&self, file: &ContactFile) -> PortfolioResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.target_path(file);
        fs::write(&path, file.contents.as_bytes())?;
        tracing::info!("Wrote {} ({})", path.display(), file.mime_type);
        Ok(())
    }
}

/// Offer the contact card through the share sheet, falling back to a
/// download.
///
/// Share failures never escape; only a failed download is returned as an
/// error.
pub async fn save_contact<S, D>(site: &Site, share_sheet: &S, downloader: &D) -> PortfolioResult<SaveOutcome>
where
    S: ShareSheet + ?Sized,
    D: FileDownloader + ?Sized,
{
    let file = ContactFile::from_record(&site.contact, &site.config.export);
    let request = ShareRequest {
        title: site.contact.full_name.clone(),
        text: site.config.export.share_text.clone(),
        file,
    };

    if share_sheet.can_share(&request).await {
        match share_sheet.share(&request).await {
            Ok(()) => {
                tracing::info!("Contact shared via native share sheet");
                return Ok(SaveOutcome::Shared);
            }
            Err(e) => {
                tracing::debug!("Native share failed, falling back to download: {}", e);
            }
        }
    } else {
        tracing::debug!("Native share unavailable, downloading contact file");
    }

    downloader.download(&request.file)?;
    Ok(SaveOutcome::Downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Share sheet with a fixed probe answer and share result.
    struct FakeShareSheet {
        supported: bool,
        result: fn() -> PortfolioResult<()>,
        shared: RefCell<Vec<ShareRequest>>,
    }

    impl FakeShareSheet {
        fn new(supported: bool, result: fn() -> PortfolioResult<()>) -> Self {
            Self {
                supported,
                result,
                shared: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ShareSheet for FakeShareSheet {
        async fn can_share(&self, _request: &ShareRequest) -> bool {
            self.supported
        }

        async fn share(&self, request: &ShareRequest) -> PortfolioResult<()> {
            self.shared.borrow_mut().push(request.clone());
            (self.result)()
        }
    }

    #[derive(Default)]
    struct RecordingDownloader {
        files: RefCell<Vec<ContactFile>>,
    }

    impl FileDownloader for RecordingDownloader {
        fn download(&self, file: &ContactFile) -> PortfolioResult<()> {
            self.files.borrow_mut().push(file.clone());
            Ok(())
        }
    }

    struct FailingDownloader;

    impl FileDownloader for FailingDownloader {
        fn download(&self, _file: &ContactFile) -> PortfolioResult<()> {
            Err(PortfolioError::Download("no document body".to_string()))
        }
    }

    #[tokio::test]
    async fn unavailable_share_downloads_once() {
        let site = Site::default();
        let downloader = RecordingDownloader::default();

        let outcome = save_contact(&site, &NoShareSheet, &downloader).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Downloaded);
        let files = downloader.files.borrow();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "enrique-mclaughlin-contact.vcf");
        assert_eq!(files[0].mime_type, "text/vcard;charset=utf-8");
        assert_eq!(files[0].contents, build_contact_card_text(&site.contact));
    }

    #[tokio::test]
    async fn supported_share_skips_download() {
        let site = Site::default();
        let sheet = FakeShareSheet::new(true, || Ok(()));
        let downloader = RecordingDownloader::default();

        let outcome = save_contact(&site, &sheet, &downloader).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Shared);
        assert!(downloader.files.borrow().is_empty());
        let shared = sheet.shared.borrow();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].title, "Enrique McLaughlin");
        assert_eq!(shared[0].text, "Save contact");
    }

    #[tokio::test]
    async fn rejected_share_falls_back_to_download() {
        let site = Site::default();
        let sheet = FakeShareSheet::new(true, || Err(PortfolioError::Share("AbortError".to_string())));
        let downloader = RecordingDownloader::default();

        let outcome = save_contact(&site, &sheet, &downloader).await.unwrap();

        assert_eq!(outcome, SaveOutcome::Downloaded);
        assert_eq!(sheet.shared.borrow().len(), 1);
        assert_eq!(downloader.files.borrow().len(), 1);
    }

    #[tokio::test]
    async fn unsupported_file_never_calls_share() {
        let site = Site::default();
        let sheet = FakeShareSheet::new(false, || Ok(()));
        let downloader = RecordingDownloader::default();

        save_contact(&site, &sheet, &downloader).await.unwrap();

        assert!(sheet.shared.borrow().is_empty());
        assert_eq!(downloader.files.borrow().len(), 1);
    }

    #[tokio::test]
    async fn download_failure_is_returned() {
        let err = save_contact(&Site::default(), &NoShareSheet, &FailingDownloader)
            .await
            .unwrap_err();
        assert!(matches!(err, PortfolioError::Download(_)));
    }

    #[tokio::test]
    async fn directory_downloader_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = DirectoryDownloader::new(dir.path().join("downloads"));
        let site = Site::default();

        save_contact(&site, &NoShareSheet, &downloader).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("downloads/enrique-mclaughlin-contact.vcf")).unwrap();
        assert_eq!(written, build_contact_card_text(&site.contact));
    }
}
