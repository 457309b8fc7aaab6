use serde_json::Value;

use crate::{
    builder::TestBuilder,
    error::TestError,
    fixture::project::Project,
    vars::{self, Vars, MODULE_ENABLED_KEY},
};

/// Harness input for one Terraform module test run.
///
/// Holds everything the external harness needs to apply and destroy the module: the module
/// directory, whether to upgrade providers on init, and the input variables. The record the
/// variables were projected from is kept alongside so tests can compare module outputs against
/// generated values.
#[derive(Debug, Clone, PartialEq)]
pub struct TestContext {
    /// Path of the Terraform module under test.
    pub module_dir: String,

    /// Whether the harness should upgrade providers and modules during init.
    pub upgrade: bool,

    /// Input variables passed to the module.
    ///
    /// Overrides applied by the builder are reflected here but not in `project`.
    pub vars: Vars,

    /// Project record the base variables were generated from.
    pub project: Project,
}

impl TestContext {
    /// Creates a context for `module_dir` from a default-mode project.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with upgrade enabled and seven project variables
    /// - `Err(TestError::Faker)` - Secure random source failed
    pub fn default_for_module(module_dir: impl Into<String>) -> Result<Self, TestError> {
        TestBuilder::new(module_dir).build()
    }

    /// Creates a context for `module_dir` from a fully generated project.
    pub fn default_for_module_with_faker(module_dir: impl Into<String>) -> Result<Self, TestError> {
        TestBuilder::new(module_dir).with_faker().build()
    }

    /// Creates a context for `module_dir` from a default-mode project carrying
    /// `organization_id`.
    pub fn default_for_module_with_organization_id(
        module_dir: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Result<Self, TestError> {
        TestBuilder::new(module_dir)
            .with_organization_id(organization_id)
            .build()
    }

    /// Creates a context for `module_dir` with `overrides` merged over a default-mode project.
    ///
    /// # Arguments
    /// - `module_dir` - Path of the module under test
    /// - `overrides` - Optional caller overrides, taking precedence over generated values
    pub fn terraform_options(
        module_dir: impl Into<String>,
        overrides: Option<&Vars>,
    ) -> Result<Self, TestError> {
        TestBuilder::new(module_dir)
            .with_overrides(overrides)
            .build()
    }

    /// Creates a context with `overrides` merged over a fully generated project.
    pub fn terraform_options_with_faker(
        module_dir: impl Into<String>,
        overrides: Option<&Vars>,
    ) -> Result<Self, TestError> {
        TestBuilder::new(module_dir)
            .with_faker()
            .with_overrides(overrides)
            .build()
    }

    /// Creates a context with `overrides` merged over a project carrying `organization_id`.
    ///
    /// An `organization_id` entry in `overrides` takes precedence over the parameter.
    pub fn terraform_options_with_organization_id(
        module_dir: impl Into<String>,
        organization_id: impl Into<String>,
        overrides: Option<&Vars>,
    ) -> Result<Self, TestError> {
        TestBuilder::new(module_dir)
            .with_organization_id(organization_id)
            .with_overrides(overrides)
            .build()
    }

    /// Looks up one merged input variable.
    ///
    /// # Returns
    /// - `Some(&Value)` - Value passed to the harness
    /// - `None` - Key is not set
    pub fn var(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Organization id the harness will receive.
    pub fn organization_id(&self) -> String {
        vars::get_organization_id(&self.vars)
    }

    /// Whether the module will be applied with `module_enabled = true`.
    pub fn module_enabled(&self) -> bool {
        vars::get_field(&self.vars, MODULE_ENABLED_KEY, false)
    }
}
