//! In-process downloader using reqwest.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::Downloader;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Performs a single GET per call; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self, AppError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("habitat-tasks/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::DownloadError {
                url: String::new(),
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        let failed = |details: String| AppError::DownloadError { url: url.to_string(), details };

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| failed(e.to_string()))?;

        let mut file = File::create(dest)?;
        let bytes = response.copy_to(&mut file).map_err(|e| failed(e.to_string()))?;
        tracing::debug!(bytes, dest = %dest.display(), "download complete");

        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
