//! API Facade for the application.
//!
//! Glues adapter construction to command execution.

use crate::adapters::{CurlDownloader, HttpDownloader, TarGzExtractor};
use crate::app::commands::{expose_build_vars, install};
use crate::app::config::{
    ExposeInputs, InstallInputs, load_install_parameters, resolve_expose_parameters,
};
use crate::domain::{Environment, Platform};
use crate::ports::{Downloader, PipelineHost};

pub use crate::app::commands::expose_build_vars::ExposeReport;
pub use crate::domain::{AppError, ProvisionOutcome};

/// Which transport fetches the Habitat archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DownloaderKind {
    /// `curl` subprocess.
    #[default]
    Curl,
    /// In-process HTTP client.
    Http,
}

impl DownloaderKind {
    fn build(self) -> Result<Box<dyn Downloader>, AppError> {
        Ok(match self {
            DownloaderKind::Curl => Box::new(CurlDownloader::new()),
            DownloaderKind::Http => Box::new(HttpDownloader::new()?),
        })
    }
}

/// Republish `last_build.env` values through `host`.
pub fn expose_build_vars(
    inputs: ExposeInputs,
    host: &dyn PipelineHost,
) -> Result<ExposeReport, AppError> {
    let params = resolve_expose_parameters(inputs)?;
    expose_build_vars::execute(&params, Environment::from_process(), host)
}

/// Make sure `hab` is present on this agent.
pub fn install(
    inputs: InstallInputs,
    downloader: DownloaderKind,
    host: &dyn PipelineHost,
) -> Result<ProvisionOutcome, AppError> {
    let params = load_install_parameters(inputs)?;
    let downloader = downloader.build()?;
    install::execute(&params, &Platform::current(), downloader.as_ref(), &TarGzExtractor::new(), host)
}
