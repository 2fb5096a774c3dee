//! Directory response types.
//!
//! Field names follow the IAM wire shape (`UserName`, `AccessKeyMetadata`,
//! `CreateDate`, `Groups`, `GroupName`) so captured IAM JSON responses decode
//! directly with serde.
//! Every field the audit inspects is an `Option`: absence is decided here, once,
//! instead of at each use site.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An account in the identity system.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Principal {
    #[serde(rename = "UserName")]
    pub name: String,
}

impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A long-lived access credential belonging to one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credential {
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub create_date: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn created_at(created: DateTime<Utc>) -> Self {
        Self {
            access_key_id: None,
            create_date: Some(created),
        }
    }
}

/// Response of a credential listing for one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialListing {
    #[serde(rename = "AccessKeyMetadata", default)]
    pub credentials: Option<Vec<Credential>>,
}

impl CredentialListing {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    /// A listing with no credentials field at all.
    pub fn absent() -> Self {
        Self { credentials: None }
    }

    /// First credential in upstream order. Upstream order is not a creation
    /// order guarantee.
    pub fn first(&self) -> Option<&Credential> {
        self.credentials.as_deref().and_then(|c| c.first())
    }
}

/// A group the principal belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupMembership {
    #[serde(rename = "GroupName", default)]
    pub name: Option<String>,
}

impl GroupMembership {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Response of a group membership listing for one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupListing {
    #[serde(rename = "Groups", default)]
    pub groups: Option<Vec<GroupMembership>>,
}

impl GroupListing {
    pub fn new(groups: Vec<GroupMembership>) -> Self {
        Self {
            groups: Some(groups),
        }
    }

    pub fn absent() -> Self {
        Self { groups: None }
    }

    /// Name of the first group in upstream order, if both exist.
    pub fn first_name(&self) -> Option<&str> {
        self.groups
            .as_deref()
            .and_then(|g| g.first())
            .and_then(|g| g.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_credential_listing_decodes_iam_shape() {
        let json = r#"{
            "AccessKeyMetadata": [
                {"UserName": "alice", "AccessKeyId": "AKIAEXAMPLE", "Status": "Active",
                 "CreateDate": "2024-01-01T00:00:00Z"},
                {"UserName": "alice", "AccessKeyId": "AKIASECOND", "Status": "Active",
                 "CreateDate": "2023-06-01T00:00:00Z"}
            ],
            "IsTruncated": false
        }"#;

        let listing: CredentialListing = serde_json::from_str(json).unwrap();
        let first = listing.first().unwrap();

        assert_eq!(first.access_key_id.as_deref(), Some("AKIAEXAMPLE"));
        assert_eq!(
            first.create_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_fields_decode_as_absent() {
        let listing: CredentialListing = serde_json::from_str("{}").unwrap();
        assert_eq!(listing, CredentialListing::absent());
        assert!(listing.first().is_none());

        let listing: CredentialListing =
            serde_json::from_str(r#"{"AccessKeyMetadata": [{"AccessKeyId": "AKIA"}]}"#).unwrap();
        assert!(listing.first().unwrap().create_date.is_none());

        let groups: GroupListing = serde_json::from_str(r#"{"Groups": [{}]}"#).unwrap();
        assert!(groups.first_name().is_none());
    }

    #[test]
    fn test_first_name_uses_listing_order() {
        let groups = GroupListing::new(vec![
            GroupMembership::named("Developers"),
            GroupMembership::named("Admins"),
        ]);
        assert_eq!(groups.first_name(), Some("Developers"));

        assert_eq!(GroupListing::new(Vec::new()).first_name(), None);
        assert_eq!(GroupListing::absent().first_name(), None);
    }

    #[test]
    fn test_principal_decodes_user_name() {
        let principal: Principal =
            serde_json::from_str(r#"{"UserName": "bob", "Path": "/", "UserId": "AIDA"}"#).unwrap();
        assert_eq!(principal, Principal::new("bob"));
    }
}
