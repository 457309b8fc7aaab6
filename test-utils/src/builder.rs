use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    config::Config,
    context::TestContext,
    error::TestError,
    fixture::project::{Project, DEFAULT_LEGACY_API_KEYS_ENABLED, DEFAULT_MODULE_ENABLED},
    vars::{self, Vars},
};

/// How the base project record is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordMode {
    /// Sentinel organization id and default instance size, other fields generated.
    #[default]
    Default,
    /// Every field generated.
    Faker,
}

/// Builder for creating harness contexts for a Terraform module.
///
/// Provides a fluent interface over the fixture record and the override merge. Values are
/// applied in a fixed order when `build()` is called:
///
/// 1. Base record generated according to the record mode
/// 2. Organization id, if one was set
/// 3. Boolean flags projected with the record
/// 4. Overrides, last write wins
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use test_utils::builder::TestBuilder;
///
/// let context = TestBuilder::new("modules/project")
///     .with_faker()
///     .with_override("name", json!("integration-test"))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct TestBuilder {
    module_dir: String,
    upgrade: bool,
    mode: RecordMode,
    organization_id: Option<String>,
    legacy_api_keys_enabled: bool,
    module_enabled: bool,

    /// Overrides merged over the projected record, in insertion order.
    overrides: Vars,
}

impl TestBuilder {
    /// Creates a new builder for `module_dir` with default settings.
    ///
    /// Defaults: default record mode, upgrade enabled, `legacy_api_keys_enabled = false`,
    /// `module_enabled = true`, no overrides.
    ///
    /// # Arguments
    /// - `module_dir` - Path of the Terraform module under test
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new(module_dir: impl Into<String>) -> Self {
        Self {
            module_dir: module_dir.into(),
            upgrade: true,
            mode: RecordMode::Default,
            organization_id: None,
            legacy_api_keys_enabled: DEFAULT_LEGACY_API_KEYS_ENABLED,
            module_enabled: DEFAULT_MODULE_ENABLED,
            overrides: Vars::new(),
        }
    }

    /// Creates a builder seeded from harness configuration.
    ///
    /// Uses the configured module directory and, when present, the configured organization id.
    pub fn from_config(config: &Config) -> Self {
        let builder = Self::new(config.module_dir.clone());

        match &config.organization_id {
            Some(organization_id) => builder.with_organization_id(organization_id.clone()),
            None => builder,
        }
    }

    /// Generates every field of the base record, including the organization id.
    pub fn with_faker(mut self) -> Self {
        self.mode = RecordMode::Faker;
        self
    }

    /// Sets the record mode explicitly.
    ///
    /// # Arguments
    /// - `mode` - How the base record is generated
    pub fn with_mode(mut self, mode: RecordMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the organization id of the base record.
    ///
    /// An `organization_id` override still wins over this value.
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Sets both boolean module flags.
    ///
    /// # Arguments
    /// - `legacy_api_keys_enabled` - Value of `legacy_api_keys_enabled`
    /// - `module_enabled` - Value of `module_enabled`
    pub fn with_flags(mut self, legacy_api_keys_enabled: bool, module_enabled: bool) -> Self {
        self.legacy_api_keys_enabled = legacy_api_keys_enabled;
        self.module_enabled = module_enabled;
        self
    }

    /// Adds a single override.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Adds every entry of `overrides`; `None` is a no-op.
    ///
    /// Later calls replace earlier values for the same key.
    pub fn with_overrides(mut self, overrides: Option<&Vars>) -> Self {
        self.overrides = vars::merge(&self.overrides, overrides);
        self
    }

    /// Sets whether the harness upgrades providers on init.
    pub fn upgrade(mut self, upgrade: bool) -> Self {
        self.upgrade = upgrade;
        self
    }

    /// Generates the record and builds the harness context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with merged variables
    /// - `Err(TestError::Faker)` - Secure random source failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let mut project = match self.mode {
            RecordMode::Default => Project::new_default()?,
            RecordMode::Faker => Project::new_fully_random()?,
        };

        if let Some(organization_id) = self.organization_id {
            project = project.with_organization_id(organization_id);
        }

        let base = project.to_vars_with_flags(self.legacy_api_keys_enabled, self.module_enabled);
        let vars = vars::merge(&base, Some(&self.overrides));

        tracing::debug!(
            "Built test context for {} with {} variable(s), {} override(s)",
            self.module_dir,
            vars.len(),
            self.overrides.len()
        );

        Ok(TestContext {
            module_dir: self.module_dir,
            upgrade: self.upgrade,
            vars,
            project,
        })
    }
}
