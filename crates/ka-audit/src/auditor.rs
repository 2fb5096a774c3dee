//! Credential age auditor
//!
//! Walks every principal in a directory, one upstream call at a time:
//! list principals → credentials → groups → age → record.
//!
//! Each decision point is classified up front:
//! - data gaps in a principal's credentials skip that principal (`SkipReason`)
//! - data gaps in its groups fall back to `NO_GROUP`
//! - every directory or output fault aborts the run (`AuditError`)

use std::io::Write;
use std::sync::Arc;
use std::vec::IntoIter;

use chrono::{DateTime, Utc};
use futures::{stream, Stream, TryStreamExt};
use ka_iam::{CredentialListing, IdentityDirectory, Principal};
use tracing::{debug, info};

use crate::age::age_in_days;
use crate::clock::{Clock, SystemClock};
use crate::record::{group_field, AuditRecord};
use crate::Result;

/// Why a principal produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The credential listing had no credentials field
    CredentialsAbsent,
    /// The principal has no credentials
    NoCredentials,
    /// The first credential has no creation timestamp
    MissingCreateDate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::CredentialsAbsent => "credentials_absent",
            SkipReason::NoCredentials => "no_credentials",
            SkipReason::MissingCreateDate => "missing_create_date",
        }
    }
}

/// Result of auditing a single principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Record(AuditRecord),
    Skipped(SkipReason),
}

/// Creation time of the first credential, or why there is none to use.
pub fn first_credential_created(
    listing: &CredentialListing,
) -> std::result::Result<DateTime<Utc>, SkipReason> {
    let credentials = listing
        .credentials
        .as_deref()
        .ok_or(SkipReason::CredentialsAbsent)?;
    let first = credentials.first().ok_or(SkipReason::NoCredentials)?;
    first.create_date.ok_or(SkipReason::MissingCreateDate)
}

pub struct Auditor {
    directory: Arc<dyn IdentityDirectory>,
    clock: Arc<dyn Clock>,
}

impl Auditor {
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self {
            directory,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock, e.g. with a `FixedClock` for reproducible ages.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Audit one principal.
    ///
    /// Groups are only fetched once the principal is known to have a usable
    /// credential.
    pub async fn audit_principal(&self, principal: &Principal) -> Result<Outcome> {
        let credentials = self.directory.list_credentials(&principal.name).await?;

        let created = match first_credential_created(&credentials) {
            Ok(created) => created,
            Err(reason) => {
                debug!(principal = %principal.name, reason = reason.as_str(), "Skipping principal");
                return Ok(Outcome::Skipped(reason));
            }
        };

        let groups = self
            .directory
            .list_group_memberships(&principal.name)
            .await?;

        let now = self.clock.now();

        Ok(Outcome::Record(AuditRecord {
            principal: principal.name.clone(),
            group: group_field(&groups),
            age_days: age_in_days(created, now),
        }))
    }

    /// Lazily audit every principal, in directory order.
    ///
    /// Principals are listed on first poll. The first error is yielded and
    /// ends the stream; polling again after the end issues no further calls.
    /// Calling `run` again starts over with fresh upstream queries.
    pub fn run(&self) -> impl Stream<Item = Result<AuditRecord>> + Send + '_ {
        stream::try_unfold(None, move |listed| self.advance(listed))
    }

    async fn advance(
        &self,
        listed: Option<IntoIter<Principal>>,
    ) -> Result<Option<(AuditRecord, Option<IntoIter<Principal>>)>> {
        let mut remaining = match listed {
            Some(remaining) => remaining,
            None => {
                let principals = self.directory.list_principals().await?;
                info!(
                    directory = self.directory.name(),
                    principals = principals.len(),
                    "Starting credential age audit"
                );
                principals.into_iter()
            }
        };

        while let Some(principal) = remaining.next() {
            if let Outcome::Record(record) = self.audit_principal(&principal).await? {
                return Ok(Some((record, Some(remaining))));
            }
        }

        Ok(None)
    }

    /// Run the audit, writing one line per record as it is produced.
    ///
    /// Returns the number of records written. Records already written stay
    /// written when a later fault aborts the run.
    pub async fn write_report<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut records = std::pin::pin!(self.run());
        let mut written = 0;

        while let Some(record) = records.try_next().await? {
            writeln!(out, "{record}")?;
            out.flush()?;
            written += 1;
        }

        info!(records = written, "Credential age audit complete");
        Ok(written)
    }
}
