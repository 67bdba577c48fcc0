use std::path::PathBuf;

use super::non_empty;
use crate::domain::{AppError, ExposeParameters, ImageNames};

/// Unvalidated inputs for `expose-build-vars`.
#[derive(Debug, Clone, Default)]
pub struct ExposeInputs {
    pub last_build_env_path: Option<String>,
    pub set_build_number: bool,
    pub set_image_names: bool,
    pub image_names: Option<String>,
    pub image_names_filename: Option<String>,
}

/// Check required inputs and build `ExposeParameters`.
pub fn resolve_expose_parameters(inputs: ExposeInputs) -> Result<ExposeParameters, AppError> {
    let last_build_env_path = non_empty(inputs.last_build_env_path)
        .map(PathBuf::from)
        .ok_or_else(|| required("habitatLastBuildEnvPath"))?;

    let image_names = if inputs.set_image_names {
        // The template itself may legitimately be blank here; expansion rejects it later.
        let template = inputs.image_names.ok_or_else(|| required("habitatImageNames"))?;
        let filename = non_empty(inputs.image_names_filename)
            .map(PathBuf::from)
            .ok_or_else(|| required("habitatImageNamesFilename"))?;
        Some(ImageNames { template, filename })
    } else {
        None
    };

    Ok(ExposeParameters {
        last_build_env_path,
        set_build_number: inputs.set_build_number,
        image_names,
    })
}

fn required(name: &str) -> AppError {
    AppError::config_error(format!("Input required: {}", name))
}
