use thiserror::Error;

/// Errors raised while generating fixture values.
///
/// Every variant is returned to the immediate caller. The generator never retries and never
/// substitutes a weaker random source when the secure one fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FakerError {
    /// The secure random source could not supply randomness.
    ///
    /// Fatal for the current generation call. Callers needing resilience retry the whole
    /// fixture-generation call.
    ///
    /// # Fields
    /// - Message reported by the underlying source
    #[error("Secure random source failure: {0}")]
    RandomSource(String),

    /// Requested password length cannot hold one character of every class.
    #[error("Password length {length} is below the minimum of {required}")]
    PasswordTooShort { length: usize, required: usize },

    /// A domain without entries was used for a draw.
    ///
    /// # Fields
    /// - Name of the offending domain
    #[error("Domain {0} has no entries")]
    EmptyDomain(&'static str),
}
