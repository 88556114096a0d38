use std::fmt;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{CategoryName, Dataset};
use quiz_core::wheel::{SpinPhase, SpinPlan, WheelError, WheelGeometry};

use crate::error::ConfirmError;
use crate::handoff::CategoryHandoff;

/// Result of asking the wheel to spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinRequest {
    Started(SpinPlan),
    /// A spin is already running; the request was dropped.
    AlreadySpinning,
}

/// Snapshot for one rendered frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelFrame {
    pub rotation: f64,
    pub is_spinning: bool,
    pub resolved: Option<CategoryName>,
}

/// Random category picker behind the wheel screen.
///
/// The caller owns the frame loop: it calls `spin` once, then `tick` with the
/// current time on every frame until the returned frame stops spinning.
#[derive(Clone)]
pub struct WheelSelector {
    categories: Vec<CategoryName>,
    geometry: Option<WheelGeometry>,
    phase: SpinPhase,
    rng: StdRng,
}

impl WheelSelector {
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_rng(dataset, StdRng::from_rng(&mut rand::rng()))
    }

    #[must_use]
    pub fn with_seed(dataset: &Dataset, seed: u64) -> Self {
        Self::with_rng(dataset, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: &Dataset, rng: StdRng) -> Self {
        let categories = dataset.categories();
        let geometry = WheelGeometry::new(&categories).ok();
        Self {
            categories,
            geometry,
            phase: SpinPhase::Idle,
            rng,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    /// Sector partition, or `None` when there are no categories to show.
    #[must_use]
    pub fn geometry(&self) -> Option<&WheelGeometry> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.phase.is_spinning()
    }

    #[must_use]
    pub fn resolved_category(&self) -> Option<&CategoryName> {
        self.phase.resolved()
    }

    /// Start a random spin at `now`.
    ///
    /// # Errors
    ///
    /// Returns `WheelError::NoCategories` when the wheel is empty.
    pub fn spin(&mut self, now: DateTime<Utc>) -> Result<SpinRequest, WheelError> {
        if self.geometry.is_none() {
            return Err(WheelError::NoCategories);
        }
        if self.phase.is_spinning() {
            return Ok(SpinRequest::AlreadySpinning);
        }

        let plan = SpinPlan::random(&mut self.rng, now);
        self.start(plan);
        Ok(SpinRequest::Started(plan))
    }

    /// Start a spin with a known plan.
    ///
    /// # Errors
    ///
    /// Returns `WheelError::NoCategories` when the wheel is empty.
    pub fn spin_with(&mut self, plan: SpinPlan) -> Result<SpinRequest, WheelError> {
        if self.geometry.is_none() {
            return Err(WheelError::NoCategories);
        }
        if self.phase.is_spinning() {
            return Ok(SpinRequest::AlreadySpinning);
        }
        self.start(plan);
        Ok(SpinRequest::Started(plan))
    }

    fn start(&mut self, plan: SpinPlan) {
        tracing::info!(
            final_angle = plan.final_angle(),
            duration_ms = plan.duration().num_milliseconds(),
            "wheel spin started"
        );
        self.phase = SpinPhase::Spinning(plan);
    }

    /// Step the animation to `now` and return what to draw.
    pub fn tick(&mut self, now: DateTime<Utc>) -> WheelFrame {
        if let Some(geometry) = self.geometry.as_ref() {
            let was_spinning = self.phase.is_spinning();
            let phase = std::mem::take(&mut self.phase);
            self.phase = phase.advance(now, geometry);
            if was_spinning {
                if let Some(category) = self.phase.resolved() {
                    tracing::info!(category = %category, "wheel landed");
                }
            }
        }

        WheelFrame {
            rotation: self.phase.rotation_at(now),
            is_spinning: self.phase.is_spinning(),
            resolved: self.phase.resolved().cloned(),
        }
    }

    /// Hand the landed category to the study screen.
    ///
    /// # Errors
    ///
    /// Returns `ConfirmError::Wheel(WheelError::NothingResolved)` if no spin
    /// has finished, or `ConfirmError::Handoff` if the slot cannot be written.
    pub async fn confirm(&self, handoff: &CategoryHandoff) -> Result<CategoryName, ConfirmError> {
        let category = self
            .resolved_category()
            .cloned()
            .ok_or(WheelError::NothingResolved)?;
        handoff.hand_off(&category).await?;
        Ok(category)
    }
}

impl fmt::Debug for WheelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelSelector")
            .field("categories_len", &self.categories.len())
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
