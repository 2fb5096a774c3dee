//! Key Ages Credential Audit
//!
//! Reports, for every principal in an identity directory, the age in days of
//! its first access credential together with its first group.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ka_audit::Auditor;
//!
//! let auditor = Auditor::new(Arc::new(directory));
//! let written = auditor.write_report(&mut std::io::stdout()).await?;
//! ```
//!
//! Records are printed as `principal\tgroup\tage_days`, with `none` when the
//! principal has no usable group. Principals without a dated first credential
//! produce no record. Any directory fault ends the run.

pub mod age;
pub mod auditor;
pub mod clock;
pub mod error;
pub mod record;

pub use age::age_in_days;
pub use auditor::{Auditor, Outcome, SkipReason};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AuditError;
pub use record::{AuditRecord, NO_GROUP};

pub type Result<T> = std::result::Result<T, AuditError>;
