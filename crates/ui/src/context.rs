use std::sync::Arc;

use quiz_core::model::Dataset;
use services::{AppServices, CategoryHandoff, Clock};

pub trait UiApp: Send + Sync {
    fn services(&self) -> Arc<AppServices>;
}

#[derive(Clone)]
pub struct AppContext {
    services: Arc<AppServices>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
        }
    }

    #[must_use]
    pub fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.services.clock()
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        self.services.dataset()
    }

    #[must_use]
    pub fn handoff(&self) -> Arc<CategoryHandoff> {
        self.services.handoff()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
