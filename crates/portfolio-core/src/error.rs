//! Error types for the portfolio site

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A string did not name one of the known views
    #[error("Unknown view: {0}")]
    InvalidView(String),

    /// The host exposes no share capability for this file
    #[error("Native share is unavailable")]
    ShareUnavailable,

    /// The share sheet rejected the request (includes user cancellation)
    #[error("Share failed: {0}")]
    Share(String),

    /// The file download could not be started
    #[error("Download failed: {0}")]
    Download(String),

    /// The browser URL could not be rewritten
    #[error("History error: {0}")]
    History(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Site configuration could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::InvalidView("about".to_string());
        assert_eq!(format!("{}", err), "Unknown view: about");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
