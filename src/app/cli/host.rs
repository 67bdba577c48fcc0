//! Pipeline host selection.

use clap::ValueEnum;

use crate::adapters::{AzurePipelinesHost, GitHubActionsHost};
use crate::ports::PipelineHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostKind {
    /// Azure Pipelines `##vso` logging commands
    Azure,
    /// GitHub Actions environment files and workflow commands
    Github,
}

impl HostKind {
    /// GitHub when running inside Actions, Azure otherwise.
    pub fn detect() -> Self {
        Self::detect_from(std::env::var("GITHUB_ACTIONS").ok().as_deref())
    }

    fn detect_from(github_actions: Option<&str>) -> Self {
        match github_actions {
            Some(value) if value.eq_ignore_ascii_case("true") => HostKind::Github,
            _ => HostKind::Azure,
        }
    }

    pub fn build(self) -> Box<dyn PipelineHost> {
        match self {
            HostKind::Azure => Box::new(AzurePipelinesHost::new()),
            HostKind::Github => Box::new(GitHubActionsHost::from_env()),
        }
    }
}
