//! Terraform Supabase fixtures
//!
//! Generates randomized, constraint-satisfying values for Supabase module tests: project names,
//! organization ids, regions, instance sizes, database passwords, plus role, realm, OpenID client
//! and user values. All randomness comes from a cryptographically secure source.
//!
//! # Overview
//!
//! - **faker**: `Faker` generator, fixed seed domains and per-subject generators
//! - **error**: `FakerError` returned by every generator call
//!
//! Records, configuration maps and the override merge built on top of these values live in the
//! `test-utils` workspace member.
//!
//! # Usage
//!
//! ```rust,ignore
//! use terraform_supabase::faker::Faker;
//!
//! let mut faker = Faker::new();
//! let name = faker.project().name()?;
//! let org_id = faker.project().organization_id()?;
//! assert_eq!(org_id.len(), 12);
//! ```

pub mod error;
pub mod faker;
