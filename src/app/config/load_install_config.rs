//! Install parameters: flags and `INPUT_*` values over an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use super::non_empty;
use crate::domain::provisioning::DEFAULT_SCRIPT_URL;
use crate::domain::{AppError, InstallParameters, InstallPaths};

/// Unvalidated inputs for `install`.
#[derive(Debug, Clone, Default)]
pub struct InstallInputs {
    pub script_url: Option<String>,
    pub habitat_path: Option<PathBuf>,
    pub download_path: Option<PathBuf>,
    pub unpack_path: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    install: InstallSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InstallSection {
    script_url: Option<Url>,
    #[serde(default)]
    paths: PathsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathsSection {
    habitat: Option<PathBuf>,
    download_path: Option<PathBuf>,
    unpack_path: Option<PathBuf>,
}

/// Resolve install parameters. Inputs win over the config file, which wins
/// over built-in defaults.
pub fn load_install_parameters(inputs: InstallInputs) -> Result<InstallParameters, AppError> {
    let file = match &inputs.config {
        Some(path) => read_config_file(path)?,
        None => ConfigFile::default(),
    };
    let section = file.install;
    let defaults = InstallPaths::default();

    let script_url = match non_empty(inputs.script_url) {
        Some(raw) => Url::parse(raw.trim()).map_err(|e| {
            AppError::config_error(format!("Invalid scriptUrl '{}': {}", raw, e))
        })?,
        None => match section.script_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_SCRIPT_URL)
                .map_err(|e| AppError::config_error(format!("Invalid default scriptUrl: {}", e)))?,
        },
    };

    let paths = InstallPaths {
        habitat: pick(inputs.habitat_path, section.paths.habitat, defaults.habitat),
        download_path: pick(
            inputs.download_path,
            section.paths.download_path,
            defaults.download_path,
        ),
        unpack_path: pick(inputs.unpack_path, section.paths.unpack_path, defaults.unpack_path),
    };

    tracing::debug!(?paths, %script_url, "resolved install parameters");
    Ok(InstallParameters { paths, script_url })
}

fn read_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    if !path.exists() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn pick(input: Option<PathBuf>, file: Option<PathBuf>, default: PathBuf) -> PathBuf {
    input.filter(|p| !p.as_os_str().is_empty()).or(file).unwrap_or(default)
}
