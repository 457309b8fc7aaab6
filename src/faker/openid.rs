//! OpenID client fixtures.
//!
//! Client names and client ids share the service prefix domain (`api`, `mobile`, `front`) and
//! differ only in their unique token.

use rand::{rngs::OsRng, TryCryptoRng, TryRngCore};

use crate::{
    error::FakerError,
    faker::{domain::SERVICE_PREFIXES, Faker},
};

/// OpenID client value generator borrowing a [`Faker`].
pub struct OpenIdFaker<'a, R = OsRng> {
    faker: &'a mut Faker<R>,
}

impl<'a, R> OpenIdFaker<'a, R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    /// Generates a client id such as `"mobile-9fk2..."`.
    pub fn client_id(&mut self) -> Result<String, FakerError> {
        self.faker.pick_from_domain(&SERVICE_PREFIXES)
    }

    pub fn name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_from_domain(&SERVICE_PREFIXES)
    }
}

pub fn client_id() -> Result<String, FakerError> {
    Faker::new().openid().client_id()
}

pub fn name() -> Result<String, FakerError> {
    Faker::new().openid().name()
}
