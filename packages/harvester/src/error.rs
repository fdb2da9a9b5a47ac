//! Error types for the harvester.
//!
//! Per-chapter fetch failures and fatal failures share one enum;
//! [`HarvesterError::is_chapter_failure`] tells them apart.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Chapter number outside the tariff schedule.
    #[error("Invalid chapter: {0}. Expected a number from 1 to 99")]
    InvalidChapter(u32),

    /// The tariff site answered with a non-success status.
    #[error("{status} for url: {url}")]
    HttpStatus {
        chapter: u32,
        status: reqwest::StatusCode,
        url: String,
    },

    /// Transport failure (DNS, connect, timeout, body read).
    #[error("{source}")]
    Request {
        chapter: u32,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

impl HarvesterError {
    /// Whether this error only affects a single chapter and the run can go on.
    #[must_use]
    pub fn is_chapter_failure(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Request { .. })
    }

    /// Short label used in operator output.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::HttpStatus { .. } => "HTTP error",
            Self::Request { .. } => "Request error",
            Self::InvalidChapter(_) => "Invalid chapter",
            Self::Client(_) => "Client error",
            Self::Io(_) => "IO error",
            Self::Csv(_) => "CSV error",
        }
    }
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HarvesterError::InvalidChapter(100);
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("1 to 99"));
    }

    #[test]
    fn test_http_status_display() {
        let err = HarvesterError::HttpStatus {
            chapter: 77,
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://example.com/print.jsf?c=77".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "404 Not Found for url: https://example.com/print.jsf?c=77"
        );
        assert_eq!(err.kind_label(), "HTTP error");
    }

    #[test]
    fn test_chapter_failure_classification() {
        let http = HarvesterError::HttpStatus {
            chapter: 1,
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: String::new(),
        };
        assert!(http.is_chapter_failure());

        let io = HarvesterError::Io(std::io::Error::other("disk full"));
        assert!(!io.is_chapter_failure());
        assert!(!HarvesterError::InvalidChapter(0).is_chapter_failure());
    }
}
