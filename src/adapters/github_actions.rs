//! GitHub Actions host using environment files and workflow commands.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TaskResult};
use crate::ports::PipelineHost;

const BUILD_NUMBER_OUTPUT: &str = "build_number";
const DELIMITER_BASE: &str = "HABITAT_TASKS_EOF";

/// Publishes variables to `GITHUB_ENV` (later steps' environment) and
/// `GITHUB_OUTPUT` (step outputs). Either file may be absent outside Actions.
#[derive(Debug, Clone, Default)]
pub struct GitHubActionsHost {
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl GitHubActionsHost {
    pub fn new(env_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        Self { env_file, output_file }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os("GITHUB_ENV").map(PathBuf::from),
            std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        )
    }

    fn append(path: &Path, entry: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
            AppError::config_error(format!("Failed to open {}: {}", path.display(), e))
        })?;
        file.write_all(entry.as_bytes())?;
        Ok(())
    }
}

impl PipelineHost for GitHubActionsHost {
    fn set_variable(&self, name: &str, value: &str) -> Result<(), AppError> {
        let entry = file_command_entry(name, value);
        if let Some(path) = &self.env_file {
            Self::append(path, &entry)?;
        }
        if let Some(path) = &self.output_file {
            Self::append(path, &entry)?;
        }
        Ok(())
    }

    fn update_build_number(&self, build_number: &str) -> Result<(), AppError> {
        if let Some(path) = &self.output_file {
            Self::append(path, &file_command_entry(BUILD_NUMBER_OUTPUT, build_number))?;
        }
        Ok(())
    }

    fn debug(&self, message: &str) {
        println!("::debug::{}", escape_data(message));
    }

    fn set_result(&self, result: TaskResult, message: &str) -> Result<(), AppError> {
        if result == TaskResult::Failed {
            println!("::error::{}", escape_data(message));
        }
        Ok(())
    }
}

/// `name=value`, or heredoc form when the value spans lines.
pub(crate) fn file_command_entry(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", name, value);
    }

    let mut delimiter = DELIMITER_BASE.to_string();
    let mut suffix = 0;
    while value.contains(&delimiter) {
        suffix += 1;
        delimiter = format!("{}_{}", DELIMITER_BASE, suffix);
    }
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}

fn escape_data(value: &str) -> String {
    value.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}
