//! Role name fixtures.

use rand::{rngs::OsRng, TryCryptoRng, TryRngCore};

use crate::{
    error::FakerError,
    faker::{domain::ROLE_NAMES, Faker},
};

/// Role name generator borrowing a [`Faker`].
pub struct RoleFaker<'a, R = OsRng> {
    faker: &'a mut Faker<R>,
}

impl<'a, R> RoleFaker<'a, R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    /// Generates a role name such as `"sre-q8m3..."`.
    pub fn name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_from_domain(&ROLE_NAMES)
    }
}

pub fn name() -> Result<String, FakerError> {
    Faker::new().role().name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faker::SEPARATOR;

    #[test]
    fn name_prefix_is_role_name() {
        let name = name().unwrap();
        let prefix = name.split(SEPARATOR).next().unwrap();

        assert!(ROLE_NAMES.contains(prefix), "{prefix}");
    }
}
