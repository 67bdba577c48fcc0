//! Provision the `hab` CLI on the build agent.
//!
//! The existence check always runs before any network activity. Two agents
//! installing at once may both download; there is no lock file.

use std::fs;

use crate::domain::provisioning::STRIP_COMPONENTS;
use crate::domain::{AppError, InstallParameters, Platform, ProvisionOutcome};
use crate::ports::{ArchiveExtractor, Downloader, PipelineHost};

pub fn execute<D, E, H>(
    params: &InstallParameters,
    platform: &Platform,
    downloader: &D,
    extractor: &E,
    host: &H,
) -> Result<ProvisionOutcome, AppError>
where
    D: Downloader + ?Sized,
    E: ArchiveExtractor + ?Sized,
    H: PipelineHost + ?Sized,
{
    if !platform.supports_install() {
        return Err(AppError::UnsupportedPlatform(platform.to_string()));
    }

    let paths = &params.paths;
    if paths.habitat.exists() {
        println!("Habitat is installed");
        return Ok(ProvisionOutcome::AlreadyInstalled { habitat: paths.habitat.clone() });
    }

    println!("Installing Habitat");

    if let Some(parent) = paths.download_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    host.debug(&format!(
        "Downloading {} to {} with {}",
        params.script_url,
        paths.download_path.display(),
        downloader.name()
    ));
    downloader.download(&params.script_url, &paths.download_path)?;

    extractor.extract(&paths.download_path, &paths.unpack_path, STRIP_COMPONENTS)?;

    if !paths.habitat.exists() {
        return Err(AppError::config_error(format!(
            "Archive from {} was unpacked to {} but {} is still missing",
            params.script_url,
            paths.unpack_path.display(),
            paths.habitat.display()
        )));
    }

    println!("Habitat installed: {}", paths.unpack_path.display());
    Ok(ProvisionOutcome::Installed { unpack_path: paths.unpack_path.clone() })
}
