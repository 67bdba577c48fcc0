use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Fetches a remote file to a local path.
pub trait Downloader {
    /// Download `url` into `dest`, replacing any existing file.
    fn download(&self, url: &Url, dest: &Path) -> Result<(), AppError>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}
