//! Task-input resolution.
//!
//! Raw inputs arrive from CLI flags or the host's `INPUT_*` variables; this
//! module validates them and fills defaults, producing domain parameters.

mod expose_inputs;
mod load_install_config;

pub use expose_inputs::{ExposeInputs, resolve_expose_parameters};
pub use load_install_config::{InstallInputs, load_install_parameters};

/// Treat blank inputs as unset; hosts pass empty strings for optional fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
