//! Access policy: reads `access.toml` and produces the allow-list and bypass
//! roles an authorizer is built from.
//!
//! ```toml
//! [access]
//! bypass-roles = ["admin"]
//! allowed-paths = ["reports/q1.xml", "notes.txt"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::authorizer::DEFAULT_BYPASS_ROLE;
use crate::error::AccessResult;

/// Allow-list configuration for a [`RoleAllowListAuthorizer`](crate::RoleAllowListAuthorizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub allowed_paths: Vec<String>,
    pub bypass_roles: Vec<String>,
}

impl Default for AccessPolicy {
    /// `admin` bypass, nothing else readable.
    fn default() -> Self {
        Self {
            allowed_paths: Vec::new(),
            bypass_roles: vec![DEFAULT_BYPASS_ROLE.to_string()],
        }
    }
}

impl AccessPolicy {
    /// Loads a policy from `policy_path`.
    /// Falls back to the default (fail-closed) policy with a warning when the
    /// file is missing or malformed.
    pub fn load_from(policy_path: &Path) -> Self {
        if !policy_path.exists() {
            info!(path = %policy_path.display(), "No access policy found, only bypass roles may read");
            return Self::default();
        }

        match Self::try_load_from(policy_path) {
            Ok(policy) => {
                info!(
                    path = %policy_path.display(),
                    allowed_paths = policy.allowed_paths.len(),
                    "Loaded access policy"
                );
                policy
            }
            Err(e) => {
                warn!(
                    path = %policy_path.display(),
                    error = %e,
                    "Failed to load access policy, falling back to default"
                );
                Self::default()
            }
        }
    }

    /// Fallible form of [`load_from`](Self::load_from).
    pub fn try_load_from(policy_path: &Path) -> AccessResult<Self> {
        let contents = std::fs::read_to_string(policy_path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> AccessResult<Self> {
        let file: PolicyFile = toml::from_str(contents)?;
        Ok(file.into_policy())
    }

    /// Returns a copy with `paths` appended to the allow-list.
    pub fn with_allowed_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_paths.extend(paths.into_iter().map(Into::into));
        self.allowed_paths.retain(|p| !p.trim().is_empty());
        self
    }
}

/// Raw TOML structure matching the access.toml format.
#[derive(Deserialize, Default)]
struct PolicyFile {
    #[serde(default)]
    access: AccessSection,
}

#[derive(Deserialize)]
struct AccessSection {
    #[serde(default = "default_bypass_roles", rename = "bypass-roles")]
    bypass_roles: Vec<String>,
    #[serde(default, rename = "allowed-paths")]
    allowed_paths: Vec<String>,
}

impl Default for AccessSection {
    fn default() -> Self {
        Self {
            bypass_roles: default_bypass_roles(),
            allowed_paths: Vec::new(),
        }
    }
}

fn default_bypass_roles() -> Vec<String> {
    vec![DEFAULT_BYPASS_ROLE.to_string()]
}

impl PolicyFile {
    fn into_policy(self) -> AccessPolicy {
        let keep = |v: &String| !v.trim().is_empty();
        AccessPolicy {
            allowed_paths: self.access.allowed_paths.into_iter().filter(keep).collect(),
            bypass_roles: self.access.bypass_roles.into_iter().filter(keep).collect(),
        }
    }
}
