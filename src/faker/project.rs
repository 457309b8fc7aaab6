//! Project fixture values.
//!
//! Generates the five fields of a Supabase project: name, organization id, region, instance size
//! and database password. Use [`ProjectFaker`] through [`Faker::project`] to share one source
//! across calls, or the free functions for one-shot values.

use rand::{rngs::OsRng, TryCryptoRng, TryRngCore};

use crate::{
    error::FakerError,
    faker::{
        domain::{INSTANCE_SIZES, PROJECT_NAMES, REGIONS},
        Faker, DEFAULT_PASSWORD_LENGTH,
    },
};

/// Project value generator borrowing a [`Faker`].
pub struct ProjectFaker<'a, R = OsRng> {
    faker: &'a mut Faker<R>,
}

impl<'a, R> ProjectFaker<'a, R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    /// Generates a project name such as `"dashboard-x7k2..."`.
    ///
    /// # Returns
    /// - `Ok(String)` - Lower-cased `{prefix}-{token}` drawn from project name prefixes
    /// - `Err(FakerError)` - Random source failure
    pub fn name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_from_domain(&PROJECT_NAMES)
    }

    /// Generates an organization id of the form `org-XXXXXXXX`.
    pub fn organization_id(&mut self) -> Result<String, FakerError> {
        self.faker.generate_organization_id()
    }

    /// Picks one of the supported regions verbatim.
    pub fn region(&mut self) -> Result<String, FakerError> {
        self.faker.pick_verbatim(&REGIONS)
    }

    /// Picks one of the instance size tiers verbatim.
    pub fn instance_size(&mut self) -> Result<String, FakerError> {
        self.faker.pick_verbatim(&INSTANCE_SIZES)
    }

    /// Generates a 16 character database password covering every character class.
    pub fn database_password(&mut self) -> Result<String, FakerError> {
        self.faker.generate_password(DEFAULT_PASSWORD_LENGTH)
    }
}

/// Generates a project name with a fresh OS-backed [`Faker`].
pub fn name() -> Result<String, FakerError> {
    Faker::new().project().name()
}

pub fn organization_id() -> Result<String, FakerError> {
    Faker::new().project().organization_id()
}

pub fn region() -> Result<String, FakerError> {
    Faker::new().project().region()
}

pub fn instance_size() -> Result<String, FakerError> {
    Faker::new().project().instance_size()
}

pub fn database_password() -> Result<String, FakerError> {
    Faker::new().project().database_password()
}
