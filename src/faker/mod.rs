//! Constrained-random fixture generation.
//!
//! `Faker` draws every value from a cryptographically secure source. The default source is the
//! operating system generator (`OsRng`), which holds no seed of its own, so independent callers
//! never share generator state. Any source failure is returned as
//! [`FakerError::RandomSource`](crate::error::FakerError::RandomSource); there is no fallback.
//!
//! # Usage
//!
//! ```rust,ignore
//! use terraform_supabase::faker::{self, Faker};
//!
//! let mut faker = Faker::new();
//! let name = faker.project().name()?;
//! let password = faker.generate_password(faker::DEFAULT_PASSWORD_LENGTH)?;
//!
//! // One-shot helpers build their own `Faker`
//! let region = faker::project::region()?;
//! ```

pub mod domain;
pub mod openid;
pub mod project;
pub mod provider;
pub mod realm;
pub mod role;
pub mod user;

use dioxus_logger::tracing;
use rand::{rngs::OsRng, TryCryptoRng, TryRngCore};

use crate::error::FakerError;

pub use domain::Domain;
pub use provider::Provider;

/// Default length of generated passwords.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Prefix of generated organization ids.
pub const ORGANIZATION_ID_PREFIX: &str = "org-";

/// Number of token characters kept after [`ORGANIZATION_ID_PREFIX`].
pub const ORGANIZATION_ID_SUFFIX_LENGTH: usize = 8;

/// Length of tokens produced by [`Faker::unique_token`].
pub const TOKEN_LENGTH: usize = 22;

/// Separator between a domain seed and its unique token.
pub const SEPARATOR: char = '-';

/// Short-uuid alphabet: digits and letters without look-alikes (0, 1, I, O, l).
const TOKEN_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Lowercase password class.
pub const PASSWORD_LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Uppercase password class.
pub const PASSWORD_UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit password class.
pub const PASSWORD_DIGITS: &[u8] = b"0123456789";
/// Special-character password class.
pub const PASSWORD_SPECIAL: &[u8] = b"!@#$%^&*";

/// Union of all password character classes, in class order.
const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                                  ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  0123456789\
                                  !@#$%^&*";

/// Classes guaranteed to appear at least once in every password.
const PASSWORD_CLASSES: [&[u8]; 4] = [
    PASSWORD_LOWERCASE,
    PASSWORD_UPPERCASE,
    PASSWORD_DIGITS,
    PASSWORD_SPECIAL,
];

/// Fixture value generator over a secure random source.
///
/// Holds nothing but the source handle. Outside of tests the only source is the operating
/// system generator from [`Faker::new`]. Not `Clone`: two handles never share generator state.
///
/// ```compile_fail
/// use terraform_supabase::faker::Faker;
///
/// let faker = Faker::new();
/// let _copy: Faker = faker.clone();
/// ```
#[derive(Debug)]
pub struct Faker<R = OsRng> {
    rng: R,
}

impl Faker<OsRng> {
    /// Creates a generator backed by the operating system random source.
    ///
    /// # Returns
    /// - New `Faker` instance
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Faker<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Faker<R>
where
    R: TryRngCore + TryCryptoRng,
{
    /// Creates a generator backed by `rng`.
    ///
    /// Only compiled for tests and under the `test-source` feature. The `TryCryptoRng` bound
    /// alone still admits seeded generators such as `StdRng`.
    #[cfg(any(test, feature = "test-source"))]
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Draws an unbiased index in `[0, len)`.
    ///
    /// Uses rejection sampling: raw 64-bit draws below `2^64 mod len` are discarded so the
    /// accepted range is an exact multiple of `len`.
    ///
    /// # Arguments
    /// - `len` - Exclusive upper bound, must be non-zero
    ///
    /// # Returns
    /// - `Ok(usize)` - Uniform index
    /// - `Err(FakerError::RandomSource)` - Source failed
    pub(crate) fn index(&mut self, len: usize) -> Result<usize, FakerError> {
        debug_assert!(len > 0, "index bound must be non-zero");

        let bound = len as u64;
        let threshold = bound.wrapping_neg() % bound;

        loop {
            let value = self.next_u64()?;
            if value >= threshold {
                return Ok((value % bound) as usize);
            }
        }
    }

    /// Draws one seed from `domain` and returns it verbatim.
    ///
    /// # Returns
    /// - `Ok(String)` - Seed value
    /// - `Err(FakerError::EmptyDomain)` - Domain has no entries
    /// - `Err(FakerError::RandomSource)` - Source failed
    pub fn pick_verbatim(&mut self, domain: &Domain) -> Result<String, FakerError> {
        self.seed(domain).map(str::to_string)
    }

    /// Draws one seed from `domain`, appends a unique token and lower-cases the result.
    ///
    /// The output has the shape `{seed}-{token}`. Tokens never contain the separator, so the
    /// text before the first `-` is always the drawn seed.
    ///
    /// # Returns
    /// - `Ok(String)` - Generated value, e.g. `"backend-k3vd8tmzq7..."`
    /// - `Err(FakerError::EmptyDomain)` - Domain has no entries
    /// - `Err(FakerError::RandomSource)` - Source failed
    pub fn pick_from_domain(&mut self, domain: &Domain) -> Result<String, FakerError> {
        let seed = self.seed(domain)?;
        let token = self.unique_token()?;

        Ok(format!("{seed}{SEPARATOR}{token}").to_lowercase())
    }

    /// Generates a short random token over the short-uuid alphabet.
    ///
    /// # Returns
    /// - `Ok(String)` - Token of [`TOKEN_LENGTH`] characters
    /// - `Err(FakerError::RandomSource)` - Source failed
    pub fn unique_token(&mut self) -> Result<String, FakerError> {
        (0..TOKEN_LENGTH)
            .map(|_| self.choose(TOKEN_ALPHABET))
            .collect()
    }

    /// Generates a password containing every character class.
    ///
    /// One slot is reserved for each of lowercase, uppercase, digit and special characters; the
    /// remaining slots are drawn from the union of all classes and the whole buffer is then
    /// shuffled. Class coverage therefore holds for every output, not just most of them.
    ///
    /// # Arguments
    /// - `length` - Number of characters, at least 4
    ///
    /// # Returns
    /// - `Ok(String)` - Generated password
    /// - `Err(FakerError::PasswordTooShort)` - `length` cannot fit one character per class
    /// - `Err(FakerError::RandomSource)` - Source failed
    pub fn generate_password(&mut self, length: usize) -> Result<String, FakerError> {
        if length < PASSWORD_CLASSES.len() {
            return Err(FakerError::PasswordTooShort {
                length,
                required: PASSWORD_CLASSES.len(),
            });
        }

        let mut password = Vec::with_capacity(length);
        for class in PASSWORD_CLASSES {
            password.push(self.choose(class)?);
        }
        while password.len() < length {
            password.push(self.choose(PASSWORD_CHARSET)?);
        }

        self.shuffle(&mut password)?;

        Ok(password.into_iter().collect())
    }

    /// Generates an organization id of the form `org-XXXXXXXX`.
    ///
    /// # Returns
    /// - `Ok(String)` - Twelve character id
    /// - `Err(FakerError::RandomSource)` - Source failed
    pub fn generate_organization_id(&mut self) -> Result<String, FakerError> {
        let token = self.unique_token()?;
        let suffix: String = token.chars().take(ORGANIZATION_ID_SUFFIX_LENGTH).collect();

        Ok(format!("{ORGANIZATION_ID_PREFIX}{suffix}"))
    }

    /// Shuffles `items` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<(), FakerError> {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }

    /// Borrows this generator for project values.
    ///
    /// # Returns
    /// - `ProjectFaker` - Generator sharing this source
    pub fn project(&mut self) -> project::ProjectFaker<'_, R> {
        project::ProjectFaker::new(self)
    }

    /// Borrows this generator for role values.
    ///
    /// # Returns
    /// - `RoleFaker` - Generator sharing this source
    pub fn role(&mut self) -> role::RoleFaker<'_, R> {
        role::RoleFaker::new(self)
    }

    /// Borrows this generator for realm values.
    ///
    /// # Returns
    /// - `RealmFaker` - Generator sharing this source
    pub fn realm(&mut self) -> realm::RealmFaker<'_, R> {
        realm::RealmFaker::new(self)
    }

    /// Borrows this generator for OpenID client values.
    ///
    /// # Returns
    /// - `OpenIdFaker` - Generator sharing this source
    pub fn openid(&mut self) -> openid::OpenIdFaker<'_, R> {
        openid::OpenIdFaker::new(self)
    }

    /// Borrows this generator for user values.
    ///
    /// # Returns
    /// - `UserFaker` - Generator sharing this source
    pub fn user(&mut self) -> user::UserFaker<'_, R> {
        user::UserFaker::new(self)
    }

    fn seed(&mut self, domain: &Domain) -> Result<&'static str, FakerError> {
        if domain.is_empty() {
            return Err(FakerError::EmptyDomain(domain.name()));
        }

        let index = self.index(domain.len())?;
        domain
            .get(index)
            .ok_or(FakerError::EmptyDomain(domain.name()))
    }

    fn choose(&mut self, charset: &[u8]) -> Result<char, FakerError> {
        let index = self.index(charset.len())?;
        Ok(char::from(charset[index]))
    }

    fn next_u64(&mut self) -> Result<u64, FakerError> {
        self.rng.try_next_u64().map_err(|e| {
            tracing::error!("Secure random source failed: {}", e);
            FakerError::RandomSource(e.to_string())
        })
    }
}

#[cfg(test)]
pub(crate) mod test_source {
    use rand::{TryCryptoRng, TryRngCore};
    use std::{collections::VecDeque, fmt};

    /// Error reported by [`FailingSource`].
    #[derive(Debug)]
    pub struct SourceUnavailable;

    impl fmt::Display for SourceUnavailable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "entropy source unavailable")
        }
    }

    impl std::error::Error for SourceUnavailable {}

    /// Secure-marked source that succeeds `remaining` times and then fails on every draw.
    pub struct FailingSource {
        pub remaining: usize,
    }

    impl FailingSource {
        pub fn new() -> Self {
            Self { remaining: 0 }
        }

        pub fn after(remaining: usize) -> Self {
            Self { remaining }
        }

        fn take(&mut self) -> Result<(), SourceUnavailable> {
            if self.remaining == 0 {
                return Err(SourceUnavailable);
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    impl TryRngCore for FailingSource {
        type Error = SourceUnavailable;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            self.take().map(|_| 0)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            self.take().map(|_| 0)
        }

        fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
            self.take()?;
            dst.fill(0);
            Ok(())
        }
    }

    impl TryCryptoRng for FailingSource {}

    /// Secure-marked source replaying fixed 64-bit values, failing once they run out.
    pub struct ScriptedSource {
        values: VecDeque<u64>,
    }

    impl ScriptedSource {
        pub fn new(values: &[u64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.values.len()
        }

        fn take(&mut self) -> Result<u64, SourceUnavailable> {
            self.values.pop_front().ok_or(SourceUnavailable)
        }
    }

    impl TryRngCore for ScriptedSource {
        type Error = SourceUnavailable;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            self.take().map(|value| value as u32)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            self.take()
        }

        fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.take()?.to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
            Ok(())
        }
    }

    impl TryCryptoRng for ScriptedSource {}
}
