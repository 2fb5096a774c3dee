//! AWS IAM directory backend
//!
//! Principals are IAM users, credentials are access keys and group memberships
//! come from `ListGroupsForUser`.
//!
//! Configuration via standard AWS SDK chain (env vars, profile, instance role, etc.)

use async_trait::async_trait;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::primitives::DateTime as SmithyDateTime;
use aws_sdk_iam::types::{AccessKeyMetadata, Group};
use aws_sdk_iam::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    Credential, CredentialListing, DirectoryError, GroupListing, GroupMembership,
    IdentityDirectory, Principal, Result,
};

const LIST_USERS: &str = "ListUsers";
const LIST_ACCESS_KEYS: &str = "ListAccessKeys";
const LIST_GROUPS_FOR_USER: &str = "ListGroupsForUser";

/// IAM accepts `MaxItems` between 1 and 1000.
pub const MAX_PAGE_SIZE: i32 = 1000;

/// AWS IAM identity directory
pub struct AwsIamDirectory {
    client: Client,
    page_size: Option<i32>,
}

impl AwsIamDirectory {
    /// Create a directory from the ambient AWS configuration
    ///
    /// # Arguments
    /// * `region` - Optional AWS region (uses default chain if not specified)
    /// * `endpoint_url` - Optional endpoint override, e.g. LocalStack
    pub async fn new(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        if let Some(url) = endpoint_url.clone() {
            loader = loader.endpoint_url(url);
        }
        let config = loader.load().await;

        info!(
            region = ?config.region().map(|r| r.as_ref().to_string()),
            endpoint_url = ?endpoint_url,
            "Initialized AWS IAM directory"
        );

        Self::from_client(Client::new(&config))
    }

    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            page_size: None,
        }
    }

    /// Users per `ListUsers` page (clamped to 1..=1000). Unset uses the
    /// service default.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size.clamp(1, MAX_PAGE_SIZE));
        self
    }

    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }
}

#[async_trait]
impl IdentityDirectory for AwsIamDirectory {
    fn name(&self) -> &str {
        "aws-iam"
    }

    async fn list_principals(&self) -> Result<Vec<Principal>> {
        let mut paginator = self.client.list_users().into_paginator();
        if let Some(page_size) = self.page_size {
            paginator = paginator.page_size(page_size);
        }

        let mut users = paginator.items().send();
        let mut principals = Vec::new();

        while let Some(user) = users.next().await {
            let user = user.map_err(|e| {
                DirectoryError::upstream(LIST_USERS, DisplayErrorContext(&e).to_string())
            })?;
            principals.push(Principal::new(user.user_name()));
        }

        debug!(count = principals.len(), "Listed IAM users");
        Ok(principals)
    }

    async fn list_credentials(&self, principal_name: &str) -> Result<CredentialListing> {
        debug!(principal = %principal_name, "Listing access keys");

        let response = self
            .client
            .list_access_keys()
            .user_name(principal_name)
            .send()
            .await
            .map_err(|e| {
                DirectoryError::upstream(LIST_ACCESS_KEYS, DisplayErrorContext(&e).to_string())
            })?;

        let credentials = response
            .access_key_metadata()
            .iter()
            .map(to_credential)
            .collect::<Result<Vec<_>>>()?;

        Ok(CredentialListing::new(credentials))
    }

    async fn list_group_memberships(&self, principal_name: &str) -> Result<GroupListing> {
        debug!(principal = %principal_name, "Listing groups for user");

        let response = self
            .client
            .list_groups_for_user()
            .user_name(principal_name)
            .send()
            .await
            .map_err(|e| {
                DirectoryError::upstream(LIST_GROUPS_FOR_USER, DisplayErrorContext(&e).to_string())
            })?;

        Ok(GroupListing::new(
            response.groups().iter().map(to_membership).collect(),
        ))
    }
}

fn to_credential(metadata: &AccessKeyMetadata) -> Result<Credential> {
    let create_date = metadata.create_date().map(to_utc).transpose()?;

    Ok(Credential {
        access_key_id: metadata.access_key_id().map(str::to_string),
        create_date,
    })
}

fn to_membership(group: &Group) -> GroupMembership {
    GroupMembership::named(group.group_name())
}

fn to_utc(value: &SmithyDateTime) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(value.secs(), value.subsec_nanos()).ok_or_else(|| {
        DirectoryError::decode(
            LIST_ACCESS_KEYS,
            format!("CreateDate out of range: {} seconds", value.secs()),
        )
    })
}
