use std::sync::Arc;

use quiz_core::model::Dataset;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::handoff::CategoryHandoff;
use crate::study::StudySession;
use crate::wheel::WheelSelector;
use crate::Clock;

/// Assembles app-facing services around the loaded dataset.
#[derive(Clone, Debug)]
pub struct AppServices {
    clock: Clock,
    dataset: Arc<Dataset>,
    handoff: Arc<CategoryHandoff>,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, dataset: Arc<Dataset>, storage: &Storage) -> Self {
        let handoff = Arc::new(CategoryHandoff::new(Arc::clone(&storage.handoff)));
        Self {
            clock,
            dataset,
            handoff,
        }
    }

    /// Build services with the handoff slot stored in `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        dataset: Arc<Dataset>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(clock, dataset, &storage))
    }

    /// Build services with an in-memory handoff slot.
    #[must_use]
    pub fn in_memory(clock: Clock, dataset: Arc<Dataset>) -> Self {
        Self::new(clock, dataset, &Storage::in_memory())
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn handoff(&self) -> Arc<CategoryHandoff> {
        Arc::clone(&self.handoff)
    }

    /// Open a study session, consuming any category handed over from the wheel.
    pub async fn start_study(&self) -> StudySession {
        let pending = self.handoff.take_pending().await;
        let mut session = StudySession::new(self.dataset());
        session.initialize(pending);
        session
    }

    #[must_use]
    pub fn wheel(&self) -> WheelSelector {
        WheelSelector::new(&self.dataset)
    }
}
