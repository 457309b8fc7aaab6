//! User account fixtures.
//!
//! Provides user names drawn from the character domain, addresses on reserved example domains,
//! token passwords and display names.

use rand::{rngs::OsRng, TryCryptoRng, TryRngCore};

use crate::{
    error::FakerError,
    faker::{
        domain::{CHARACTER_NAMES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES},
        Faker,
    },
};

/// User value generator borrowing a [`Faker`].
pub struct UserFaker<'a, R = OsRng> {
    faker: &'a mut Faker<R>,
}

impl<'a, R> UserFaker<'a, R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    /// Generates a user name such as `"bumblebee-4hv9..."`.
    pub fn user_name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_from_domain(&CHARACTER_NAMES)
    }

    /// Generates an address of the form `{user_name}@{example domain}`.
    pub fn email(&mut self) -> Result<String, FakerError> {
        let local = self.user_name()?;
        let domain = self.faker.pick_verbatim(&EMAIL_DOMAINS)?;

        Ok(format!("{local}@{domain}"))
    }

    /// Generates a token password.
    ///
    /// Unlike database passwords this carries no class requirements.
    pub fn password(&mut self) -> Result<String, FakerError> {
        self.faker.unique_token()
    }

    pub fn first_name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_verbatim(&FIRST_NAMES)
    }

    pub fn last_name(&mut self) -> Result<String, FakerError> {
        self.faker.pick_verbatim(&LAST_NAMES)
    }

    /// Generates a `"{first} {last}"` display name.
    pub fn full_name(&mut self) -> Result<String, FakerError> {
        let first = self.first_name()?;
        let last = self.last_name()?;

        Ok(format!("{first} {last}"))
    }
}

pub fn user_name() -> Result<String, FakerError> {
    Faker::new().user().user_name()
}

pub fn email() -> Result<String, FakerError> {
    Faker::new().user().email()
}

pub fn password() -> Result<String, FakerError> {
    Faker::new().user().password()
}

pub fn full_name() -> Result<String, FakerError> {
    Faker::new().user().full_name()
}

pub fn last_name() -> Result<String, FakerError> {
    Faker::new().user().last_name()
}
