//! Fixed seed domains for generated fixture values.
//!
//! Each domain is a process-wide `static` slice. Nothing in the crate hands out a mutable
//! reference to them, so concurrent callers always draw from identical tables.

/// A fixed, ordered set of permissible seeds for one field category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    name: &'static str,
    seeds: &'static [&'static str],
}

impl Domain {
    /// Creates a domain over a static seed table.
    ///
    /// # Arguments
    /// - `name` - Label used in error messages
    /// - `seeds` - Seed values in draw order
    ///
    /// # Returns
    /// - `Domain` - New domain instance
    pub const fn new(name: &'static str, seeds: &'static [&'static str]) -> Self {
        Self { name, seeds }
    }

    /// Label used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Seed values in draw order.
    pub fn seeds(&self) -> &'static [&'static str] {
        self.seeds
    }

    /// Number of seeds.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Checks whether the domain has no seeds.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Checks whether `value` is one of the domain's seeds.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn contains(&self, value: &str) -> bool {
        self.seeds.contains(&value)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'static str> {
        self.seeds.get(index).copied()
    }
}

/// Project name prefixes.
pub static PROJECT_NAMES: Domain = Domain::new(
    "project_names",
    &[
        "backend",
        "frontend",
        "api",
        "mobile",
        "web",
        "dashboard",
        "admin",
        "app",
        "service",
        "platform",
        "portal",
        "cms",
        "ecommerce",
        "blog",
        "forum",
        "docs",
        "analytics",
        "monitoring",
        "auth",
        "database",
    ],
);

/// AWS-style region codes accepted by the Supabase provider.
pub static REGIONS: Domain = Domain::new(
    "regions",
    &[
        "us-east-1",
        "us-west-1",
        "eu-west-1",
        "ap-southeast-1",
        "eu-central-1",
        "ap-northeast-1",
    ],
);

/// Instance size tiers, smallest first.
pub static INSTANCE_SIZES: Domain =
    Domain::new("instance_sizes", &["micro", "small", "medium", "large", "xlarge"]);

/// Role name prefixes.
pub static ROLE_NAMES: Domain = Domain::new("role_names", &["admin", "sre", "developer"]);

/// Service prefixes for identity-provider client ids and names.
pub static SERVICE_PREFIXES: Domain = Domain::new("service_prefixes", &["api", "mobile", "front"]);

/// Realm and user name prefixes.
pub static CHARACTER_NAMES: Domain =
    Domain::new("character_names", &["optimusprime", "wheeljack", "bumblebee"]);

/// Given names for generated user profiles.
pub static FIRST_NAMES: Domain = Domain::new(
    "first_names",
    &["Ada", "Grace", "Linus", "Margaret", "Dennis", "Barbara", "Ken", "Frances"],
);

/// Family names for generated user profiles.
pub static LAST_NAMES: Domain = Domain::new(
    "last_names",
    &["Lovelace", "Hopper", "Torvalds", "Hamilton", "Ritchie", "Liskov", "Thompson", "Allen"],
);

/// Reserved mail domains for generated addresses.
pub static EMAIL_DOMAINS: Domain =
    Domain::new("email_domains", &["example.com", "example.org", "example.net"]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_have_expected_sizes() {
        assert_eq!(PROJECT_NAMES.len(), 20);
        assert_eq!(REGIONS.len(), 6);
        assert_eq!(INSTANCE_SIZES.len(), 5);
        assert_eq!(ROLE_NAMES.len(), 3);
        assert_eq!(SERVICE_PREFIXES.len(), 3);
        assert_eq!(CHARACTER_NAMES.len(), 3);
    }

    #[test]
    fn name_seeds_never_contain_separator() {
        for domain in [PROJECT_NAMES, ROLE_NAMES, SERVICE_PREFIXES, CHARACTER_NAMES] {
            assert!(
                domain.seeds().iter().all(|seed| !seed.contains('-')),
                "{} has a seed containing '-'",
                domain.name()
            );
        }
    }

    #[test]
    fn contains_is_case_sensitive() {
        assert!(INSTANCE_SIZES.contains("micro"));
        assert!(!INSTANCE_SIZES.contains("Micro"));
        assert!(!INSTANCE_SIZES.contains("micro "));
    }
}
