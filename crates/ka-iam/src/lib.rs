//! Key Ages Identity Directory
//!
//! Read-only access to an identity system's principals, their access
//! credentials and their group memberships:
//! - `IdentityDirectory` trait, the seam the auditor is written against
//! - AWS IAM backend (with feature flag `aws`)
//!
//! Authentication is ambient; backends use whatever credentials their SDK
//! resolves from the environment.

use async_trait::async_trait;

pub mod error;
pub mod model;

#[cfg(feature = "aws")]
pub mod aws;

pub use error::DirectoryError;
pub use model::{Credential, CredentialListing, GroupListing, GroupMembership, Principal};

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Read operations the audit needs from an identity system.
///
/// Listing order is whatever the backend returns; callers must not assume it
/// reflects creation time.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Backend name, for logs
    fn name(&self) -> &str;

    /// All principals, following any continuation the backend uses
    async fn list_principals(&self) -> Result<Vec<Principal>>;

    /// Credentials attached to a principal
    async fn list_credentials(&self, principal_name: &str) -> Result<CredentialListing>;

    /// Groups a principal belongs to
    async fn list_group_memberships(&self, principal_name: &str) -> Result<GroupListing>;
}
