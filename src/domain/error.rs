use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for habitat-tasks operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or task-input issue.
    #[error("{0}")]
    Configuration(String),

    /// The snapshot written by the upstream build step is missing.
    #[error("Unable to locate last build environment file: {}", .0.display())]
    LastBuildEnvMissing(PathBuf),

    /// Template expansion was handed nothing to expand.
    #[error("Please pass a non-empty string to expand")]
    EmptyTemplate,

    /// Provisioning requested on a platform without an install recipe.
    #[error("Installing Habitat is not supported on platform '{0}'")]
    UnsupportedPlatform(String),

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// HTTP download failed.
    #[error("Download of '{url}' failed: {details}")]
    DownloadError { url: String, details: String },

    /// Archive could not be read or unpacked.
    #[error("Failed to extract archive '{}': {details}", .path.display())]
    ArchiveError { path: PathBuf, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn archive<S: Into<String>>(path: impl Into<PathBuf>, details: S) -> Self {
        AppError::ArchiveError { path: path.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::EmptyTemplate
            | AppError::TomlParseError(_)
            | AppError::ArchiveError { .. } => io::ErrorKind::InvalidInput,
            AppError::LastBuildEnvMissing(_) => io::ErrorKind::NotFound,
            AppError::UnsupportedPlatform(_) => io::ErrorKind::Unsupported,
            AppError::ExternalToolError { .. } | AppError::DownloadError { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
