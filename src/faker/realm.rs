//! Identity realm name fixtures.

use rand::{rngs::OsRng, TryCryptoRng, TryRngCore};

use crate::{
    error::FakerError,
    faker::{domain::CHARACTER_NAMES, Faker},
};

/// Realm name generator borrowing a [`Faker`].
pub struct RealmFaker<'a, R = OsRng> {
    faker: &'a mut Faker<R>,
}

impl<'a, R> RealmFaker<'a, R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    pub fn name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_from_domain(&CHARACTER_NAMES)
    }
}

pub fn name() -> Result<String, FakerError> {
    Faker::new().realm().name()
}
