//! Republish `last_build.env` values as pipeline variables.

use std::fs;
use std::path::PathBuf;

use crate::domain::build_vars::{self, IMAGE_NAMES_FILENAME_VAR};
use crate::domain::{AppError, EnvSnapshot, Environment, ExposeParameters, template};
use crate::ports::PipelineHost;

/// What a successful run published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeReport {
    pub published: Vec<String>,
    pub build_number: Option<String>,
    pub image_names_file: Option<PathBuf>,
}

/// Execute the build-vars flow against `base` (normally the process environment).
///
/// Nothing is published when the snapshot is missing.
pub fn execute<H: PipelineHost + ?Sized>(
    params: &ExposeParameters,
    base: Environment,
    host: &H,
) -> Result<ExposeReport, AppError> {
    if !params.last_build_env_path.exists() {
        return Err(AppError::LastBuildEnvMissing(params.last_build_env_path.clone()));
    }

    let snapshot = EnvSnapshot::load(&params.last_build_env_path)?;
    tracing::debug!(
        path = %params.last_build_env_path.display(),
        entries = snapshot.len(),
        "loaded build snapshot"
    );
    let env = base.overlay(snapshot);

    let mut published = Vec::new();
    for var in build_vars::harvest(&env) {
        host.debug(&format!("Setting variable '{}': {}", var.name, var.value));
        host.set_variable(var.name, &var.value)?;
        published.push(var.name.to_string());
    }

    let build_number = if params.set_build_number {
        let build_number = build_vars::build_number(&env);
        println!("Setting Build Number: {}", build_number);
        host.update_build_number(&build_number)?;
        Some(build_number)
    } else {
        None
    };

    let image_names_file = match &params.image_names {
        Some(image_names) => {
            println!("Writing image names file: {}", image_names.filename.display());

            let contents = template::expand(&image_names.template, &env)?;
            if let Some(parent) = image_names.filename.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&image_names.filename, contents)?;

            host.set_variable(IMAGE_NAMES_FILENAME_VAR, &image_names.filename.display().to_string())?;
            published.push(IMAGE_NAMES_FILENAME_VAR.to_string());
            Some(image_names.filename.clone())
        }
        None => None,
    };

    Ok(ExposeReport { published, build_number, image_names_file })
}
