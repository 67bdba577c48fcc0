//! `install` arguments.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::api::DownloaderKind;
use crate::app::config::InstallInputs;

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Habitat archive to download
    #[arg(long, env = "INPUT_SCRIPTURL")]
    pub script_url: Option<String>,
    /// Installed hab binary; install is skipped when it exists
    #[arg(long, env = "INPUT_HABITATPATH")]
    pub habitat_path: Option<PathBuf>,
    /// Where the downloaded archive is saved
    #[arg(long, env = "INPUT_DOWNLOADPATH")]
    pub download_path: Option<PathBuf>,
    /// Directory the archive is unpacked into
    #[arg(long, env = "INPUT_UNPACKPATH")]
    pub unpack_path: Option<PathBuf>,
    /// TOML file with [install] defaults
    #[arg(short, long, env = "HABITAT_TASKS_CONFIG")]
    pub config: Option<PathBuf>,
    /// Download transport
    #[arg(long, env = "HABITAT_TASKS_DOWNLOADER", value_enum, default_value_t = DownloaderArg::Curl)]
    pub downloader: DownloaderArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DownloaderArg {
    Curl,
    Http,
}

impl From<DownloaderArg> for DownloaderKind {
    fn from(arg: DownloaderArg) -> Self {
        match arg {
            DownloaderArg::Curl => DownloaderKind::Curl,
            DownloaderArg::Http => DownloaderKind::Http,
        }
    }
}

impl InstallArgs {
    pub fn into_parts(self) -> (InstallInputs, DownloaderKind) {
        let inputs = InstallInputs {
            script_url: self.script_url,
            habitat_path: self.habitat_path,
            download_path: self.download_path,
            unpack_path: self.unpack_path,
            config: self.config,
        };
        (inputs, self.downloader.into())
    }
}
