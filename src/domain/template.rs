//! `$NAME` placeholder expansion.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::{AppError, Environment};

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII word characters only, matching the shell-style names hab writes.
    Regex::new(r"\$([A-Za-z0-9_]+)").expect("token pattern is valid")
});

/// Expand `$NAME` tokens in `template` from `env`.
pub fn expand(template: &str, env: &Environment) -> Result<String, AppError> {
    expand_with(template, env, &Environment::new())
}

/// Expand `$NAME` tokens in `template` from `env` overlaid with `overrides`.
///
/// Tokens without a value, or whose value is empty, are left as written. A
/// single pass is made, so substituted values are never expanded again.
pub fn expand_with(
    template: &str,
    env: &Environment,
    overrides: &Environment,
) -> Result<String, AppError> {
    if template.is_empty() {
        return Err(AppError::EmptyTemplate);
    }

    let expanded = TOKEN.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        match overrides.get(name).or_else(|| env.get(name)) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => caps[0].to_string(),
        }
    });

    Ok(expanded.into_owned())
}
