pub mod expose_build_vars;
pub mod install;
