//! Role-based read authorization for filereader.
//!
//! One generic authorizer serves every format. It is parameterized only by:
//! - an allow-list of paths, compared case-insensitively
//! - a set of bypass roles (default `admin`) that may read any path
//!
//! The allow-list is configured externally, either in code or from an
//! `access.toml` policy file, and is immutable once the authorizer exists.

mod authorizer;
mod error;
mod policy;

pub use authorizer::{
    AccessAuthorizer, AllowAllAuthorizer, DEFAULT_BYPASS_ROLE, DenyAllAuthorizer,
    RoleAllowListAuthorizer,
};
pub use error::{AccessError, AccessResult};
pub use policy::AccessPolicy;
