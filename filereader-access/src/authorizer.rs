//! Read authorization decisions.

use std::collections::HashSet;

use crate::policy::AccessPolicy;

/// Role that may read any path unless configured otherwise.
pub const DEFAULT_BYPASS_ROLE: &str = "admin";

/// Decides whether a role may read a path.
///
/// Implementations fail closed: blank input yields `false`, never a panic.
pub trait AccessAuthorizer: Send + Sync {
    fn can_read(&self, path: &str, role: &str) -> bool;
}

/// Allow-list authorizer with a role bypass.
///
/// - blank role or blank path: denied
/// - role matching a bypass role (case-insensitive): allowed
/// - otherwise: allowed iff the path is in the allow-list (case-insensitive)
#[derive(Debug, Clone)]
pub struct RoleAllowListAuthorizer {
    allowed_paths: HashSet<String>,
    bypass_roles: HashSet<String>,
}

impl RoleAllowListAuthorizer {
    /// Creates an authorizer with the default `admin` bypass role.
    /// Blank entries are dropped.
    pub fn new<I, S>(allowed_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_bypass_roles(allowed_paths, [DEFAULT_BYPASS_ROLE])
    }

    /// Creates an authorizer with an empty allow-list; only bypass roles can read.
    pub fn empty() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    pub fn with_bypass_roles<I, S, R, T>(allowed_paths: I, bypass_roles: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            allowed_paths: normalize_all(allowed_paths),
            bypass_roles: normalize_all(bypass_roles),
        }
    }

    /// Builds an authorizer from a loaded policy.
    pub fn from_policy(policy: &AccessPolicy) -> Self {
        Self::with_bypass_roles(&policy.allowed_paths, &policy.bypass_roles)
    }

    pub fn allowed_path_count(&self) -> usize {
        self.allowed_paths.len()
    }

    pub fn is_bypass_role(&self, role: &str) -> bool {
        self.bypass_roles.contains(&fold(role))
    }
}

impl Default for RoleAllowListAuthorizer {
    fn default() -> Self {
        Self::empty()
    }
}

impl AccessAuthorizer for RoleAllowListAuthorizer {
    fn can_read(&self, path: &str, role: &str) -> bool {
        if role.trim().is_empty() || path.trim().is_empty() {
            return false;
        }

        if self.is_bypass_role(role) {
            return true;
        }

        self.allowed_paths.contains(&fold(path))
    }
}

/// Allows every well-formed request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllAuthorizer;

impl AccessAuthorizer for AllowAllAuthorizer {
    fn can_read(&self, path: &str, role: &str) -> bool {
        !role.trim().is_empty() && !path.trim().is_empty()
    }
}

/// Denies every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllAuthorizer;

impl AccessAuthorizer for DenyAllAuthorizer {
    fn can_read(&self, _path: &str, _role: &str) -> bool {
        false
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

fn normalize_all<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter(|v| !v.as_ref().trim().is_empty())
        .map(|v| fold(v.as_ref()))
        .collect()
}
