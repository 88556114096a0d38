use std::sync::Arc;

use quiz_core::model::CategoryName;
use storage::repository::HandoffRepository;

use crate::error::HandoffError;

/// Passes a category chosen on the wheel over to the study screen.
#[derive(Clone)]
pub struct CategoryHandoff {
    repo: Arc<dyn HandoffRepository>,
}

impl CategoryHandoff {
    #[must_use]
    pub fn new(repo: Arc<dyn HandoffRepository>) -> Self {
        Self { repo }
    }

    /// Store `category` as the pending selection.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::Storage` if the slot cannot be written.
    pub async fn hand_off(&self, category: &CategoryName) -> Result<(), HandoffError> {
        self.repo.put_pending(category.as_str()).await?;
        tracing::debug!(category = %category, "category handed off");
        Ok(())
    }

    /// Take the pending selection, clearing the slot.
    ///
    /// A missing value, a blank value and a failing backend all read as "no
    /// pending category".
    pub async fn take_pending(&self) -> Option<CategoryName> {
        let raw = match self.repo.take_pending().await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(error = %err, "could not read category handoff; using all categories");
                return None;
            }
        };

        match CategoryName::new(raw) {
            Ok(category) => Some(category),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed category handoff");
                None
            }
        }
    }
}

impl std::fmt::Debug for CategoryHandoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryHandoff").finish_non_exhaustive()
    }
}
