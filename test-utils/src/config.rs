use crate::error::ConfigError;

/// Environment variable naming the Terraform module directory under test.
pub const MODULE_DIR_VAR: &str = "SUPABASE_MODULE_DIR";

/// Optional environment variable overriding the organization id of generated projects.
pub const ORGANIZATION_ID_VAR: &str = "SUPABASE_ORGANIZATION_ID";

/// Harness defaults read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub module_dir: String,

    /// Organization id applied to generated projects; `None` keeps the sentinel.
    pub organization_id: Option<String>,
}

impl Config {
    /// Loads the configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded configuration
    /// - `Err(ConfigError::MissingEnvVar)` - `SUPABASE_MODULE_DIR` is not set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Ok(Self {
            module_dir: read(MODULE_DIR_VAR)
                .ok_or_else(|| ConfigError::MissingEnvVar(MODULE_DIR_VAR.to_string()))?,
            organization_id: read(ORGANIZATION_ID_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| env.get(key).cloned()
    }

    #[test]
    fn loads_required_and_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            (MODULE_DIR_VAR, "modules/project"),
            (ORGANIZATION_ID_VAR, "acme-corp"),
        ]))
        .unwrap();

        assert_eq!(config.module_dir, "modules/project");
        assert_eq!(config.organization_id.as_deref(), Some("acme-corp"));
    }

    #[test]
    fn organization_id_is_optional() {
        let config = Config::from_lookup(lookup_from(&[
            (MODULE_DIR_VAR, "modules/project"),
            (ORGANIZATION_ID_VAR, ""),
        ]))
        .unwrap();

        assert!(config.organization_id.is_none());
    }

    #[test]
    fn missing_module_dir_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[(ORGANIZATION_ID_VAR, "acme-corp")]));

        assert_eq!(
            result,
            Err(ConfigError::MissingEnvVar(MODULE_DIR_VAR.to_string()))
        );
    }
}
