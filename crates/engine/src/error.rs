//! Errors surfaced by the reminder engine and its collaborators.

use thiserror::Error;

/// Failures from the record store behind [`UserRepository`].
///
/// Every variant is fatal for the run that hits it: a malformed record
/// aborts the whole roster fetch rather than being skipped.
///
/// [`UserRepository`]: crate::UserRepository
#[derive(Debug, Error)]
pub enum StoreError {
    /// Currency code outside the threshold table.
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),
    /// A record is missing a required field.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    /// Transport or query failure.
    #[error("query failed: {0}")]
    Query(String),
}

/// Run-aborting failures from [`NotifyUnpaid::execute`].
///
/// Each wraps the store failure with the operation and, where one exists,
/// the person it was evaluating. Delivery failures never show up here.
///
/// [`NotifyUnpaid::execute`]: crate::NotifyUnpaid::execute
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("get users: {0}")]
    GetUsers(#[source] StoreError),
    #[error("get unpaid amount for {name}: {source}")]
    GetUnpaidAmount {
        name: String,
        #[source]
        source: StoreError,
    },
    #[error("get shared unpaid amount for {name}: {source}")]
    GetSharedUnpaidAmount {
        name: String,
        #[source]
        source: StoreError,
    },
}

/// Delivery failure; the engine logs it and moves to the next recipient.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NotifyError(pub String);
