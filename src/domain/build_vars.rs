use std::path::PathBuf;

use crate::domain::Environment;

/// Resolved inputs for `expose-build-vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeParameters {
    pub last_build_env_path: PathBuf,
    pub set_build_number: bool,
    /// Present only when image names were requested.
    pub image_names: Option<ImageNames>,
}

/// Template for image tags and the file it is rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNames {
    pub template: String,
    pub filename: PathBuf,
}

/// Snapshot keys republished as pipeline variables, in publication order.
pub const HARVESTED_KEYS: [&str; 8] = [
    "pkg_origin",
    "pkg_name",
    "pkg_version",
    "pkg_release",
    "pkg_ident",
    "pkg_artifact",
    "pkg_sha256sum",
    "pkg_blake2bsum",
];

/// Variable holding the path of the written image names file.
pub const IMAGE_NAMES_FILENAME_VAR: &str = "image_names_filename";

/// A name/value pair destined for the host's variable namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedVariable {
    pub name: &'static str,
    pub value: String,
}

/// Select the whitelisted keys from `env`.
///
/// Missing keys are returned with an empty value.
pub fn harvest(env: &Environment) -> Vec<PublishedVariable> {
    HARVESTED_KEYS
        .iter()
        .map(|&name| PublishedVariable { name, value: env.get(name).unwrap_or_default().to_string() })
        .collect()
}

/// Compose `<pkg_version>-<pkg_release>`.
pub fn build_number(env: &Environment) -> String {
    format!(
        "{}-{}",
        env.get("pkg_version").unwrap_or_default(),
        env.get("pkg_release").unwrap_or_default()
    )
}
