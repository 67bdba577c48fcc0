//! Habitat CLI provisioning model.

use std::path::PathBuf;

use url::Url;

/// Stable Linux tarball published by the Habitat project.
pub const DEFAULT_SCRIPT_URL: &str =
    "https://packages.chef.io/files/stable/habitat/latest/hab-x86_64-linux.tar.gz";
pub const DEFAULT_HABITAT_PATH: &str = "/usr/local/bin/hab";
pub const DEFAULT_UNPACK_PATH: &str = "/usr/local/bin";
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "hab.tar.gz";

/// Leading path components dropped from every archive entry.
///
/// Release tarballs wrap the binary in `hab-<version>-<target>/`.
pub const STRIP_COMPONENTS: usize = 1;

/// Filesystem locations used by the install flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// Installed `hab` binary; its presence means nothing needs doing.
    pub habitat: PathBuf,
    /// Where the downloaded archive is written.
    pub download_path: PathBuf,
    /// Directory the archive is unpacked into.
    pub unpack_path: PathBuf,
}

impl Default for InstallPaths {
    fn default() -> Self {
        Self {
            habitat: PathBuf::from(DEFAULT_HABITAT_PATH),
            download_path: std::env::temp_dir().join(DEFAULT_DOWNLOAD_FILENAME),
            unpack_path: PathBuf::from(DEFAULT_UNPACK_PATH),
        }
    }
}

/// Resolved inputs for `install`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallParameters {
    pub paths: InstallPaths,
    pub script_url: Url,
}

/// How provisioning ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    AlreadyInstalled { habitat: PathBuf },
    Installed { unpack_path: PathBuf },
}

impl ProvisionOutcome {
    pub fn installed(&self) -> bool {
        matches!(self, ProvisionOutcome::Installed { .. })
    }
}
