use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::Downloader;

/// Downloader double that copies a local fixture instead of hitting the network.
#[derive(Default)]
pub struct FakeDownloader {
    fixture: Option<PathBuf>,
    fail_with: Option<String>,
    pub calls: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeDownloader {
    /// Serve `fixture` for every download.
    pub fn serving(fixture: impl Into<PathBuf>) -> Self {
        Self { fixture: Some(fixture.into()), ..Self::default() }
    }

    /// Fail every download with `message`.
    pub fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        self.calls.lock().unwrap().push((url.to_string(), dest.to_path_buf()));

        if let Some(message) = &self.fail_with {
            return Err(AppError::ExternalToolError { tool: "curl".into(), error: message.clone() });
        }
        if let Some(fixture) = &self.fixture {
            fs::copy(fixture, dest)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
