use crate::domain::{AppError, TaskResult};

/// Control channel of the CI system running a task.
pub trait PipelineHost {
    /// Publish a variable visible to later steps of the pipeline.
    fn set_variable(&self, name: &str, value: &str) -> Result<(), AppError>;

    /// Replace the display number of the running build.
    fn update_build_number(&self, build_number: &str) -> Result<(), AppError>;

    /// Emit a message shown only when pipeline debugging is enabled.
    fn debug(&self, message: &str);

    /// Report the final task status. Called once per invocation.
    fn set_result(&self, result: TaskResult, message: &str) -> Result<(), AppError>;
}
