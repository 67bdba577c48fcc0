pub mod build_vars;
pub mod environment;
pub mod error;
pub mod platform;
pub mod provisioning;
pub mod snapshot;
pub mod task_result;
pub mod template;

pub use build_vars::{ExposeParameters, HARVESTED_KEYS, ImageNames, PublishedVariable};
pub use environment::Environment;
pub use error::AppError;
pub use platform::Platform;
pub use provisioning::{InstallParameters, InstallPaths, ProvisionOutcome};
pub use snapshot::EnvSnapshot;
pub use task_result::TaskResult;
