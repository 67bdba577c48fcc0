use std::path::{Path, PathBuf};
use std::process::Command;

use url::Url;

use crate::domain::AppError;
use crate::ports::Downloader;

/// Downloads by shelling out to `curl`, following redirects.
#[derive(Debug, Clone)]
pub struct CurlDownloader {
    program: PathBuf,
}

impl Default for CurlDownloader {
    fn default() -> Self {
        Self { program: PathBuf::from("curl") }
    }
}

impl CurlDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific curl executable instead of the one on `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    fn args(url: &Url, dest: &Path) -> Vec<String> {
        vec![
            "-L".to_string(),
            "--fail".to_string(),
            url.to_string(),
            "--output".to_string(),
            dest.display().to_string(),
        ]
    }
}

impl Downloader for CurlDownloader {
    fn download(&self, url: &Url, dest: &Path) -> Result<(), AppError> {
        let args = Self::args(url, dest);
        tracing::debug!(program = %self.program.display(), args = ?args, "running download command");

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            AppError::ExternalToolError {
                tool: "curl".into(),
                error: format!("Failed to execute {}: {}", self.program.display(), e),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code().map_or("signal".to_string(), |c| c.to_string());
            return Err(AppError::ExternalToolError {
                tool: "curl".into(),
                error: format!(
                    "command 'curl {}' exited with {}: {}",
                    args.join(" "),
                    code,
                    stderr.trim()
                ),
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "curl"
    }
}
