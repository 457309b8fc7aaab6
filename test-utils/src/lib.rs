//! Terraform Supabase Test Utils
//!
//! Provides fixture records and input variable composition for Terraform module tests of the
//! Supabase provider. The crate produces the values an external harness applies; it never runs
//! Terraform itself.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **fixture**: Immutable `Project` records with functional `with_*` updates
//! - **vars**: Projection keys, override merge and typed field access
//! - **TestBuilder**: Fluent builder for configuring a module test run
//! - **TestContext**: Module directory, upgrade flag and merged input variables
//! - **Config**: Harness defaults read from the environment
//! - **TestError**: Error types that can occur during fixture setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use serde_json::json;
//! use test_utils::{builder::TestBuilder, error::TestError};
//!
//! #[test]
//! fn project_basic() -> Result<(), TestError> {
//!     let context = TestBuilder::new("modules/project")
//!         .with_override("region", json!("us-west-1"))
//!         .build()?;
//!
//!     // Hand `context.vars` to the harness: apply, read outputs, destroy.
//!     assert_eq!(context.organization_id(), "hadenlabs");
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod fixture;
pub mod vars;
