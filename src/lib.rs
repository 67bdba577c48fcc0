//! habitat-tasks: Habitat build pipeline steps.
//!
//! `expose-build-vars` republishes package metadata from a `last_build.env`
//! snapshot as pipeline variables; `install` provisions the `hab` CLI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{DownloaderKind, ExposeReport, expose_build_vars, install};
pub use app::config::{ExposeInputs, InstallInputs};
pub use domain::template::{expand, expand_with};
pub use domain::{AppError, EnvSnapshot, Environment, ProvisionOutcome};
