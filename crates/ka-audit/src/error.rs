use ka_iam::DirectoryError;
use thiserror::Error;

/// Faults that abort an audit run.
///
/// Anything recoverable per principal is a `SkipReason` instead.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Identity directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Failed to write audit record: {0}")]
    Output(#[from] std::io::Error),
}
