pub mod catalog_file;
#[cfg(feature = "cli")]
pub mod cli;
pub mod deploy;

use regex::{Captures, Regex};
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Replaces `${VAR}` references with the variable's value. Unset variables are left as written.
pub(crate) fn substitute_env_vars(content: &str) -> String {
    ENV_VAR
        .replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::debug!("Environment variable {} is not set", var_name);
                format!("${{{}}}", var_name)
            })
        })
        .into_owned()
}
