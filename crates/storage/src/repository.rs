use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Name of the single slot used to pass a chosen category from the wheel to study.
pub const HANDOFF_SLOT: &str = "selected_category";

/// Single-value mailbox between the wheel and the study screen.
///
/// At most one value is pending at a time; writing replaces it and taking
/// clears it.
#[async_trait]
pub trait HandoffRepository: Send + Sync {
    /// Store `value` as the pending category, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_pending(&self, value: &str) -> Result<(), StorageError>;

    /// Read the pending value and clear the slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read or cleared.
    async fn take_pending(&self) -> Result<Option<String>, StorageError>;
}

/// In-memory handoff slot for tests and ephemeral runs.
#[derive(Clone, Default)]
pub struct InMemoryHandoff {
    slot: Arc<Mutex<Option<String>>>,
}

impl InMemoryHandoff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HandoffRepository for InMemoryHandoff {
    async fn put_pending(&self, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(value.to_string());
        Ok(())
    }

    async fn take_pending(&self) -> Result<Option<String>, StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.take())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub handoff: Arc<dyn HandoffRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let handoff: Arc<dyn HandoffRepository> = Arc::new(InMemoryHandoff::new());
        Self { handoff }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn take_clears_the_slot() {
        let repo = InMemoryHandoff::new();
        repo.put_pending("Routing").await.unwrap();
        assert_eq!(repo.take_pending().await.unwrap().as_deref(), Some("Routing"));
        assert_eq!(repo.take_pending().await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_previous_value() {
        let repo = InMemoryHandoff::new();
        repo.put_pending("A").await.unwrap();
        repo.put_pending("B").await.unwrap();
        assert_eq!(repo.take_pending().await.unwrap().as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn clones_share_the_slot() {
        let repo = InMemoryHandoff::new();
        let other = repo.clone();
        repo.put_pending("Shared").await.unwrap();
        assert_eq!(other.take_pending().await.unwrap().as_deref(), Some("Shared"));
    }
}
