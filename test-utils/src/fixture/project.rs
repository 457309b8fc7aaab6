//! Supabase project fixture record.
//!
//! Provides the immutable [`Project`] record along with its projection into Terraform input
//! variables. Two construction modes exist:
//!
//! - **default**: sentinel organization id, `"micro"` instance size, other fields generated
//! - **faker**: every field generated, including the organization id

use dioxus_logger::tracing;
use rand::{TryCryptoRng, TryRngCore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use terraform_supabase::faker::Faker;

use crate::{
    error::TestError,
    vars::{
        Vars, DATABASE_PASSWORD_KEY, INSTANCE_SIZE_KEY, LEGACY_API_KEYS_ENABLED_KEY,
        MODULE_ENABLED_KEY, NAME_KEY, ORGANIZATION_ID_KEY, REGION_KEY,
    },
};

/// Sentinel organization id used by default-mode records.
pub const DEFAULT_ORGANIZATION_ID: &str = "hadenlabs";

/// Instance size used by default-mode records.
pub const DEFAULT_INSTANCE_SIZE: &str = "micro";

/// Default value of the `legacy_api_keys_enabled` variable.
pub const DEFAULT_LEGACY_API_KEYS_ENABLED: bool = false;

/// Default value of the `module_enabled` variable.
pub const DEFAULT_MODULE_ENABLED: bool = true;

/// One Supabase project under test.
///
/// Fields are private and only readable through accessors. Updates go through the `with_*`
/// methods, which borrow the receiver and return a fresh record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    organization_id: String,
    database_password: String,
    name: String,
    region: String,
    instance_size: String,
}

impl Project {
    /// Creates a default-mode project using the operating system random source.
    ///
    /// # Default Values
    /// - organization_id: `"hadenlabs"`
    /// - instance_size: `"micro"`
    /// - name, region, database_password: generated
    ///
    /// # Returns
    /// - `Ok(Project)` - New record
    /// - `Err(TestError::Faker)` - Secure random source failed
    pub fn new_default() -> Result<Self, TestError> {
        Self::generate_default(&mut Faker::new())
    }

    /// Creates a project with every field generated.
    ///
    /// # Returns
    /// - `Ok(Project)` - New record
    /// - `Err(TestError::Faker)` - Secure random source failed
    pub fn new_fully_random() -> Result<Self, TestError> {
        Self::generate_fully_random(&mut Faker::new())
    }

    /// Creates a default-mode project drawing from `faker`.
    pub fn generate_default<R>(faker: &mut Faker<R>) -> Result<Self, TestError>
    where
        R: TryRngCore + TryCryptoRng,
    {
        let mut project = faker.project();
        let record = Self {
            organization_id: DEFAULT_ORGANIZATION_ID.to_string(),
            database_password: project.database_password()?,
            name: project.name()?,
            region: project.region()?,
            instance_size: DEFAULT_INSTANCE_SIZE.to_string(),
        };

        tracing::debug!(
            "Generated default project fixture {} in {}",
            record.name,
            record.region
        );

        Ok(record)
    }

    /// Creates a fully generated project drawing from `faker`.
    pub fn generate_fully_random<R>(faker: &mut Faker<R>) -> Result<Self, TestError>
    where
        R: TryRngCore + TryCryptoRng,
    {
        let mut project = faker.project();
        let record = Self {
            organization_id: project.organization_id()?,
            database_password: project.database_password()?,
            name: project.name()?,
            region: project.region()?,
            instance_size: project.instance_size()?,
        };

        tracing::debug!(
            "Generated random project fixture {} ({}) in {}",
            record.name,
            record.organization_id,
            record.region
        );

        Ok(record)
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn database_password(&self) -> &str {
        &self.database_password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn instance_size(&self) -> &str {
        &self.instance_size
    }

    /// Returns a copy with the organization id replaced.
    ///
    /// # Arguments
    /// - `organization_id` - New organization id, may be empty
    ///
    /// # Returns
    /// - `Project` - New record; `self` is unchanged
    pub fn with_organization_id(&self, organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the database password replaced.
    pub fn with_database_password(&self, database_password: impl Into<String>) -> Self {
        Self {
            database_password: database_password.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the project name replaced.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the region replaced.
    pub fn with_region(&self, region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with the instance size replaced.
    pub fn with_instance_size(&self, instance_size: impl Into<String>) -> Self {
        Self {
            instance_size: instance_size.into(),
            ..self.clone()
        }
    }

    /// Checks whether the record carries the sentinel organization id.
    pub fn is_default_organization(&self) -> bool {
        crate::vars::is_default_organization_id(&self.organization_id)
    }

    /// Projects the record into Terraform input variables.
    ///
    /// `legacy_api_keys_enabled` is `false` and `module_enabled` is `true`.
    ///
    /// # Returns
    /// - `Vars` - Seven-key variable map
    pub fn to_vars(&self) -> Vars {
        self.to_vars_with_flags(DEFAULT_LEGACY_API_KEYS_ENABLED, DEFAULT_MODULE_ENABLED)
    }

    /// Projects the record into Terraform input variables with explicit flags.
    ///
    /// # Arguments
    /// - `legacy_api_keys_enabled` - Value of `legacy_api_keys_enabled`
    /// - `module_enabled` - Value of `module_enabled`
    ///
    /// # Returns
    /// - `Vars` - Seven-key variable map
    pub fn to_vars_with_flags(&self, legacy_api_keys_enabled: bool, module_enabled: bool) -> Vars {
        let mut vars = Vars::new();
        vars.insert(
            ORGANIZATION_ID_KEY.to_string(),
            Value::from(self.organization_id.as_str()),
        );
        vars.insert(
            DATABASE_PASSWORD_KEY.to_string(),
            Value::from(self.database_password.as_str()),
        );
        vars.insert(NAME_KEY.to_string(), Value::from(self.name.as_str()));
        vars.insert(REGION_KEY.to_string(), Value::from(self.region.as_str()));
        vars.insert(
            INSTANCE_SIZE_KEY.to_string(),
            Value::from(self.instance_size.as_str()),
        );
        vars.insert(
            LEGACY_API_KEYS_ENABLED_KEY.to_string(),
            Value::Bool(legacy_api_keys_enabled),
        );
        vars.insert(MODULE_ENABLED_KEY.to_string(), Value::Bool(module_enabled));
        vars
    }
}

/// Creates a default-mode project.
///
/// Shorthand for `Project::new_default()`.
pub fn default() -> Result<Project, TestError> {
    Project::new_default()
}

/// Creates a project with every field generated.
pub fn default_with_faker() -> Result<Project, TestError> {
    Project::new_fully_random()
}

/// Creates a default-mode project carrying `organization_id`.
///
/// # Example
///
/// ```rust,ignore
/// let project = fixture::project::default_with_organization_id("acme-corp")?;
/// assert_eq!(project.organization_id(), "acme-corp");
/// ```
pub fn default_with_organization_id(
    organization_id: impl Into<String>,
) -> Result<Project, TestError> {
    Ok(Project::new_default()?.with_organization_id(organization_id))
}
