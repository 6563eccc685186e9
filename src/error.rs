//! Error types for hostsgen.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the library modules.
pub type Result<T> = std::result::Result<T, HostsError>;

#[derive(Error, Debug)]
pub enum HostsError {
    /// Missing or malformed configuration. Raised before any network activity.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("File system error on {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Hostname lookup failed: {0}")]
    Hostname(String),
}

impl HostsError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// True for any failure raised while downloading a blocklist.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Timeout { .. } | Self::Status { .. } | Self::Client(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_display_includes_path() {
        let err = HostsError::storage(
            "/etc/hosts",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "File system error on /etc/hosts");
        assert!(!err.is_fetch());
    }

    #[test]
    fn test_timeout_is_fetch() {
        let err = HostsError::Timeout {
            url: "https://example.com/hosts".to_string(),
        };
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), "Timed out fetching https://example.com/hosts");
    }

    #[test]
    fn test_status_display() {
        let err = HostsError::Status {
            url: "https://example.com/hosts".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://example.com/hosts: HTTP 404 Not Found"
        );
    }
}
