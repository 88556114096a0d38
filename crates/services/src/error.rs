//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::wheel::WheelError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while writing to the category handoff slot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HandoffError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `WheelSelector::confirm`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfirmError {
    #[error(transparent)]
    Wheel(#[from] WheelError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
