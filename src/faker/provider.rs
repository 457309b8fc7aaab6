//! Named value providers.
//!
//! Maps provider tags (e.g. `"ProjectNameFaker"`) to generator calls so fixture values can be
//! requested by name from declarative test tables.

use std::{fmt, str::FromStr};

use rand::{TryCryptoRng, TryRngCore};

use crate::{error::FakerError, faker::Faker};

/// Every value kind the generator can produce by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    ProjectName,
    ProjectOrganizationId,
    ProjectRegion,
    ProjectInstanceSize,
    ProjectDatabasePassword,
    UserUserName,
    UserFullName,
    UserPassword,
    UserEmail,
    OpenIdName,
    OpenIdClientId,
    RealmName,
    RoleName,
}

impl Provider {
    pub const ALL: [Provider; 13] = [
        Provider::ProjectName,
        Provider::ProjectOrganizationId,
        Provider::ProjectRegion,
        Provider::ProjectInstanceSize,
        Provider::ProjectDatabasePassword,
        Provider::UserUserName,
        Provider::UserFullName,
        Provider::UserPassword,
        Provider::UserEmail,
        Provider::OpenIdName,
        Provider::OpenIdClientId,
        Provider::RealmName,
        Provider::RoleName,
    ];

    /// Tag under which the provider is registered.
    pub fn tag(&self) -> &'static str {
        match self {
            Provider::ProjectName => "ProjectNameFaker",
            Provider::ProjectOrganizationId => "ProjectOrganizationIDFaker",
            Provider::ProjectRegion => "ProjectRegionFaker",
            Provider::ProjectInstanceSize => "ProjectInstanceSizeFaker",
            Provider::ProjectDatabasePassword => "ProjectDatabasePasswordFaker",
            Provider::UserUserName => "UserUserNameFaker",
            Provider::UserFullName => "UserFullNameFaker",
            Provider::UserPassword => "UserPasswordFaker",
            Provider::UserEmail => "UserEmailFaker",
            Provider::OpenIdName => "OpenIDName",
            Provider::OpenIdClientId => "OpenIDClientID",
            Provider::RealmName => "RealmName",
            Provider::RoleName => "RoleName",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a tag names no provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl fmt::Display for UnknownProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown fixture provider: {}", self.0)
    }
}

impl std::error::Error for UnknownProvider {}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|provider| provider.tag() == s)
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

impl<R> Faker<R>
where
    R: TryRngCore + TryCryptoRng,
{
    /// Generates one value for `provider`.
    ///
    /// # Returns
    /// - `Ok(String)` - Generated value
    /// - `Err(FakerError)` - Random source failure
    pub fn provide(&mut self, provider: Provider) -> Result<String, FakerError> {
        match provider {
            Provider::ProjectName => self.project().name(),
            Provider::ProjectOrganizationId => self.project().organization_id(),
            Provider::ProjectRegion => self.project().region(),
            Provider::ProjectInstanceSize => self.project().instance_size(),
            Provider::ProjectDatabasePassword => self.project().database_password(),
            Provider::UserUserName => self.user().user_name(),
            Provider::UserFullName => self.user().full_name(),
            Provider::UserPassword => self.user().password(),
            Provider::UserEmail => self.user().email(),
            Provider::OpenIdName => self.openid().name(),
            Provider::OpenIdClientId => self.openid().client_id(),
            Provider::RealmName => self.realm().name(),
            Provider::RoleName => self.role().name(),
        }
    }
}
