use super::{AttributeError, AttributeResolver};
use std::collections::HashMap;

/// Prefix used when none is configured: `resource_group` is read from `RC_ATTR_RESOURCE_GROUP`.
pub const DEFAULT_ENV_PREFIX: &str = "RC_ATTR_";

/// Attributes read from environment variables named `<prefix><NAME>`.
///
/// The environment is captured when the resolver is built, so lookups are stable for the
/// lifetime of the resolver.
#[derive(Debug, Clone)]
pub struct EnvResolver {
    prefix: String,
    vars: HashMap<String, String>,
}

impl EnvResolver {
    /// Capture the current process environment.
    #[must_use]
    pub fn from_env(prefix: impl Into<String>) -> Self {
        Self::from_vars(prefix, std::env::vars())
    }

    /// Build a resolver over an explicit set of variables.
    #[must_use]
    pub fn from_vars(prefix: impl Into<String>, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let prefix = prefix.into();
        let vars = vars.into_iter().filter(|(key, _)| key.starts_with(prefix.as_str())).collect();
        Self { prefix, vars }
    }

    /// The variable name consulted for `name`.
    #[must_use]
    pub fn var_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.to_ascii_uppercase())
    }
}

impl AttributeResolver for EnvResolver {
    fn get(&self, name: &str) -> Result<String, AttributeError> {
        self.vars
            .get(&self.var_name(name))
            .cloned()
            .ok_or_else(|| AttributeError::Missing(name.to_string()))
    }
}
