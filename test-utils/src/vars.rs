//! Terraform input variable maps and the override merge.
//!
//! A [`Vars`] map is what the external harness receives as named input variables. Base maps come
//! from [`Project::to_vars`]; callers layer overrides on top with [`merge`], where the override
//! value always wins. None of the functions here mutate their inputs: each returns a fresh map.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use test_utils::{fixture::Project, vars};
//!
//! let base = Project::new_default()?.to_vars();
//! let overrides = vars::from_pairs([("name", json!("p1")), ("region", json!("us-west-1"))]);
//!
//! let merged = vars::merge(&base, Some(&overrides));
//! assert_eq!(vars::get_organization_id(&merged), "hadenlabs");
//! ```

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    error::TestError,
    fixture::project::{Project, DEFAULT_ORGANIZATION_ID},
};

/// String-keyed Terraform input variables.
pub type Vars = Map<String, Value>;

pub const ORGANIZATION_ID_KEY: &str = "organization_id";
pub const DATABASE_PASSWORD_KEY: &str = "database_password";
pub const NAME_KEY: &str = "name";
pub const REGION_KEY: &str = "region";
pub const INSTANCE_SIZE_KEY: &str = "instance_size";
pub const LEGACY_API_KEYS_ENABLED_KEY: &str = "legacy_api_keys_enabled";
pub const MODULE_ENABLED_KEY: &str = "module_enabled";

/// Keys produced by [`Project::to_vars`].
pub const PROJECT_KEYS: [&str; 7] = [
    ORGANIZATION_ID_KEY,
    DATABASE_PASSWORD_KEY,
    NAME_KEY,
    REGION_KEY,
    INSTANCE_SIZE_KEY,
    LEGACY_API_KEYS_ENABLED_KEY,
    MODULE_ENABLED_KEY,
];

/// Builds a map from key/value pairs.
pub fn from_pairs<K, I>(pairs: I) -> Vars
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

/// Merges `overrides` on top of `base`.
///
/// The result holds every key of `base`. Every key of `overrides` replaces the base value or is
/// added when absent, including keys outside the project schema. `None` behaves as an empty map.
///
/// # Arguments
/// - `base` - Base variables, left untouched
/// - `overrides` - Optional caller overrides, left untouched
///
/// # Returns
/// - `Vars` - New merged map
pub fn merge(base: &Vars, overrides: Option<&Vars>) -> Vars {
    let mut result = base.clone();

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            result.insert(key.clone(), value.clone());
        }
    }

    tracing::trace!(
        "Merged {} override(s) into {} base variable(s)",
        overrides.map_or(0, Map::len),
        base.len()
    );

    result
}

/// Merges `overrides` on top of a fresh default-mode project.
///
/// # Returns
/// - `Ok(Vars)` - Merged variables
/// - `Err(TestError::Faker)` - Secure random source failed
pub fn merge_project_values(overrides: Option<&Vars>) -> Result<Vars, TestError> {
    let base = Project::new_default()?.to_vars();

    Ok(merge(&base, overrides))
}

/// Merges `overrides` on top of a fresh fully generated project.
pub fn merge_defaults_with_faker(overrides: Option<&Vars>) -> Result<Vars, TestError> {
    let base = Project::new_fully_random()?.to_vars();

    Ok(merge(&base, overrides))
}

/// Merges `overrides` on top of a default-mode project carrying `organization_id`.
///
/// The explicit organization id is applied to the base first, so an `organization_id` entry in
/// `overrides` still takes final precedence.
///
/// # Arguments
/// - `organization_id` - Organization id for the base record
/// - `overrides` - Optional caller overrides
///
/// # Returns
/// - `Ok(Vars)` - Merged variables
/// - `Err(TestError::Faker)` - Secure random source failed
pub fn merge_with_organization_id(
    organization_id: &str,
    overrides: Option<&Vars>,
) -> Result<Vars, TestError> {
    let base = Project::new_default()?
        .with_organization_id(organization_id)
        .to_vars();

    Ok(merge(&base, overrides))
}

/// Reads `key` as a `T`, falling back to `default`.
///
/// A missing key or a value of another type both yield `default`; a type mismatch is not an
/// error.
///
/// # Example
///
/// ```rust,ignore
/// let enabled: bool = vars::get_field(&vars, MODULE_ENABLED_KEY, false);
/// ```
pub fn get_field<T>(vars: &Vars, key: &str, default: T) -> T
where
    T: DeserializeOwned,
{
    vars.get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or(default)
}

/// Reads `organization_id`, falling back to the sentinel `"hadenlabs"`.
pub fn get_organization_id(vars: &Vars) -> String {
    get_field(vars, ORGANIZATION_ID_KEY, DEFAULT_ORGANIZATION_ID.to_string())
}

/// Returns a copy of `vars` with `key` set to `value`.
pub fn set_field(vars: &Vars, key: impl Into<String>, value: impl Into<Value>) -> Vars {
    let mut result = vars.clone();
    result.insert(key.into(), value.into());
    result
}

/// Returns a copy of `vars` with `organization_id` set.
pub fn set_organization_id(vars: &Vars, organization_id: &str) -> Vars {
    set_field(vars, ORGANIZATION_ID_KEY, organization_id)
}

/// Checks whether `organization_id` is exactly the sentinel.
///
/// The comparison is case-sensitive and does not trim whitespace.
pub fn is_default_organization_id(organization_id: &str) -> bool {
    organization_id == DEFAULT_ORGANIZATION_ID
}

/// Checks that `organization_id` is not empty.
pub fn validate_organization_id(organization_id: &str) -> bool {
    !organization_id.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::project::DEFAULT_INSTANCE_SIZE;
    use serde_json::json;

    fn project_base() -> Vars {
        Project::new_default().unwrap().to_vars()
    }

    /// Tests the default record scenario with name and region overrides.
    ///
    /// Expected: overrides win, sentinel and generated values are retained
    #[test]
    fn merge_overrides_default_project() {
        let base = project_base();
        let overrides = from_pairs([(NAME_KEY, json!("p1")), (REGION_KEY, json!("us-west-1"))]);

        let result = merge(&base, Some(&overrides));

        assert_eq!(result[ORGANIZATION_ID_KEY], json!(DEFAULT_ORGANIZATION_ID));
        assert_eq!(result[NAME_KEY], json!("p1"));
        assert_eq!(result[REGION_KEY], json!("us-west-1"));
        assert_eq!(result[DATABASE_PASSWORD_KEY], base[DATABASE_PASSWORD_KEY]);
        assert_eq!(result[INSTANCE_SIZE_KEY], json!(DEFAULT_INSTANCE_SIZE));
    }

    #[test]
    fn merge_preserves_extra_keys_and_inputs() {
        let base = project_base();
        let overrides = from_pairs([
            (ORGANIZATION_ID_KEY, json!("custom-org")),
            ("extra_field", json!("extra-value")),
        ]);
        let base_snapshot = base.clone();
        let overrides_snapshot = overrides.clone();

        let result = merge(&base, Some(&overrides));

        assert_eq!(result.len(), 8);
        assert_eq!(result[ORGANIZATION_ID_KEY], json!("custom-org"));
        assert_eq!(result["extra_field"], json!("extra-value"));
        assert_eq!(base, base_snapshot);
        assert_eq!(overrides, overrides_snapshot);
    }

    #[test]
    fn merge_with_none_or_empty_is_identity() {
        let base = project_base();

        assert_eq!(merge(&base, None), base);
        assert_eq!(merge(&base, Some(&Vars::new())), base);
    }

    #[test]
    fn merge_project_values_uses_default_record() {
        let result = merge_project_values(Some(&from_pairs([(
            MODULE_ENABLED_KEY,
            json!(false),
        )])))
        .unwrap();

        assert_eq!(result[ORGANIZATION_ID_KEY], json!(DEFAULT_ORGANIZATION_ID));
        assert_eq!(result[MODULE_ENABLED_KEY], json!(false));
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn merge_defaults_with_faker_uses_random_record() {
        let result = merge_defaults_with_faker(None).unwrap();
        let org_id = get_organization_id(&result);

        assert!(org_id.starts_with("org-"), "{org_id}");
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn merge_with_organization_id_sets_base() {
        let result = merge_with_organization_id("test-org", None).unwrap();

        assert_eq!(result[ORGANIZATION_ID_KEY], json!("test-org"));
        assert_eq!(result[INSTANCE_SIZE_KEY], json!(DEFAULT_INSTANCE_SIZE));
    }

    /// Tests precedence between the explicit organization id and an override.
    ///
    /// Expected: the override value wins
    #[test]
    fn merge_with_organization_id_override_wins() {
        let overrides = from_pairs([(ORGANIZATION_ID_KEY, json!("override-org"))]);

        let result = merge_with_organization_id("param-org", Some(&overrides)).unwrap();

        assert_eq!(result[ORGANIZATION_ID_KEY], json!("override-org"));
    }

    #[test]
    fn get_field_falls_back_on_missing_or_mistyped() {
        assert_eq!(get_organization_id(&Vars::new()), "hadenlabs");
        assert_eq!(
            get_organization_id(&from_pairs([(ORGANIZATION_ID_KEY, json!(123))])),
            "hadenlabs"
        );
        assert_eq!(
            get_organization_id(&from_pairs([(ORGANIZATION_ID_KEY, json!(null))])),
            "hadenlabs"
        );
        assert_eq!(
            get_organization_id(&from_pairs([(ORGANIZATION_ID_KEY, json!("x"))])),
            "x"
        );
        assert_eq!(
            get_organization_id(&from_pairs([(ORGANIZATION_ID_KEY, json!(""))])),
            ""
        );
    }

    #[test]
    fn get_field_reads_bools() {
        let vars = project_base();

        assert!(get_field(&vars, MODULE_ENABLED_KEY, false));
        assert!(!get_field(&vars, LEGACY_API_KEYS_ENABLED_KEY, true));
        assert!(get_field(&vars, NAME_KEY, true));
        assert_eq!(get_field(&vars, MODULE_ENABLED_KEY, "fallback".to_string()), "fallback");
    }

    #[test]
    fn set_field_returns_new_map() {
        let vars = from_pairs([(NAME_KEY, json!("p1")), (REGION_KEY, json!("us-east-1"))]);

        let updated = set_field(&vars, REGION_KEY, "eu-west-1");

        assert_eq!(updated[REGION_KEY], json!("eu-west-1"));
        assert_eq!(updated[NAME_KEY], json!("p1"));
        assert_eq!(vars[REGION_KEY], json!("us-east-1"));
    }

    #[test]
    fn set_organization_id_adds_or_replaces() {
        let added = set_organization_id(&Vars::new(), "new-org");
        assert_eq!(added[ORGANIZATION_ID_KEY], json!("new-org"));

        let replaced = set_organization_id(&added, "other-org");
        assert_eq!(replaced[ORGANIZATION_ID_KEY], json!("other-org"));
        assert_eq!(added[ORGANIZATION_ID_KEY], json!("new-org"));
    }

    #[test]
    fn default_organization_check_is_exact() {
        assert!(is_default_organization_id("hadenlabs"));
        assert!(!is_default_organization_id("hadenlabs "));
        assert!(!is_default_organization_id(" hadenlabs"));
        assert!(!is_default_organization_id("Hadenlabs"));
        assert!(!is_default_organization_id("HADENLABS"));
        assert!(!is_default_organization_id(""));
    }

    #[test]
    fn validate_rejects_only_empty() {
        assert!(validate_organization_id("hadenlabs"));
        assert!(validate_organization_id(" "));
        assert!(!validate_organization_id(""));
    }
}
