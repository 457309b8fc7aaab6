//! Test fixtures providing in-memory Supabase project records.
//!
//! Fixtures are immutable value objects. Every `with_*` call returns a new record and leaves the
//! receiver untouched, so one base record can be specialized several times in a single test.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Sentinel organization id, generated name/region/password, "micro" instance size
//! let project = fixture::project::default()?;
//!
//! // Every field generated
//! let random = fixture::project::default_with_faker()?;
//!
//! // Functional updates
//! let custom = project.with_name("production-database").with_region("us-east-1");
//! ```

pub mod project;

pub use project::{
    default as project_default, default_with_faker as project_default_with_faker,
    default_with_organization_id as project_default_with_organization_id, Project,
    DEFAULT_INSTANCE_SIZE, DEFAULT_ORGANIZATION_ID,
};
