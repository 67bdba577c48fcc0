//! Azure Pipelines host using `##vso[...]` logging commands on stdout.

use crate::domain::{AppError, TaskResult};
use crate::ports::PipelineHost;

#[derive(Debug, Clone, Default)]
pub struct AzurePipelinesHost;

impl AzurePipelinesHost {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineHost for AzurePipelinesHost {
    fn set_variable(&self, name: &str, value: &str) -> Result<(), AppError> {
        println!("{}", logging_command("task.setvariable", &[("variable", name)], value));
        Ok(())
    }

    fn update_build_number(&self, build_number: &str) -> Result<(), AppError> {
        println!("{}", logging_command("build.updatebuildnumber", &[], build_number));
        Ok(())
    }

    fn debug(&self, message: &str) {
        println!("{}", logging_command("task.debug", &[], message));
    }

    fn set_result(&self, result: TaskResult, message: &str) -> Result<(), AppError> {
        println!("{}", logging_command("task.complete", &[("result", result.as_str())], message));
        Ok(())
    }
}

/// Render `##vso[<command> k=v;...]<message>`.
pub(crate) fn logging_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("##vso[{}", command);
    if !properties.is_empty() {
        line.push(' ');
        for (key, value) in properties {
            line.push_str(key);
            line.push('=');
            line.push_str(&escape_property(value));
            line.push(';');
        }
    }
    line.push(']');
    line.push_str(&escape_data(message));
    line
}

fn escape_data(value: &str) -> String {
    value.replace('%', "%AZP25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(']', "%5D").replace(';', "%3B")
}
