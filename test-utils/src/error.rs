use terraform_supabase::error::FakerError;
use thiserror::Error;

/// Errors that can occur while building fixtures or harness contexts.
#[derive(Error, Debug)]
pub enum TestError {
    /// Fixture value generation failed.
    ///
    /// Wraps the generator error unchanged; a secure random source failure is fatal for the
    /// fixture being built.
    #[error(transparent)]
    Faker(#[from] FakerError),

    /// Harness configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The harness requires this variable to locate the module under test.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
