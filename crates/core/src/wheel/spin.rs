use std::f64::consts::TAU;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::model::CategoryName;

use super::WheelGeometry;

/// Full turns a spin makes at least.
pub const MIN_TURNS: f64 = 3.0;
/// Full turns a spin stays below.
pub const MAX_TURNS: f64 = 5.0;
pub const MIN_DURATION_MS: i64 = 3_000;
pub const MAX_DURATION_MS: i64 = 5_000;

/// Cubic ease-out: fast start, gentle stop.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Parameters of a single spin, fixed when the spin starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    started_at: DateTime<Utc>,
    final_angle: f64,
    duration: Duration,
}

impl SpinPlan {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, final_angle: f64, duration: Duration) -> Self {
        Self {
            started_at,
            final_angle,
            duration,
        }
    }

    /// Draw a random spin: 3 to 5 turns plus a random offset, lasting 3 to 5 seconds.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, started_at: DateTime<Utc>) -> Self {
        let turns = rng.random_range(MIN_TURNS..MAX_TURNS);
        let offset = rng.random_range(0.0..TAU);
        let duration_ms = rng.random_range(MIN_DURATION_MS..MAX_DURATION_MS);
        Self::new(
            started_at,
            turns * TAU + offset,
            Duration::milliseconds(duration_ms),
        )
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn final_angle(&self) -> f64 {
        self.final_angle
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the spin completed at `now`, in `[0, 1]`.
    ///
    /// Always measured from the start timestamp, never from the previous frame.
    #[must_use]
    pub fn progress_at(&self, now: DateTime<Utc>) -> f64 {
        let total = self.duration.num_milliseconds();
        if total <= 0 {
            return 1.0;
        }
        let elapsed = (now - self.started_at).num_milliseconds();
        #[allow(clippy::cast_precision_loss)]
        let progress = elapsed as f64 / total as f64;
        progress.clamp(0.0, 1.0)
    }

    /// Wheel rotation to render at `now`.
    #[must_use]
    pub fn rotation_at(&self, now: DateTime<Utc>) -> f64 {
        ease_out_cubic(self.progress_at(now)) * self.final_angle
    }
}

/// Where the wheel is in its spin lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning(SpinPlan),
    Resolved {
        category: CategoryName,
        rotation: f64,
    },
}

impl SpinPhase {
    /// Step the animation to `now`.
    ///
    /// A finished spin becomes `Resolved` with whichever sector is under the
    /// pointer at the final angle. Other phases are returned unchanged.
    #[must_use]
    pub fn advance(self, now: DateTime<Utc>, geometry: &WheelGeometry) -> Self {
        match self {
            Self::Spinning(plan) if plan.progress_at(now) >= 1.0 => {
                let rotation = plan.final_angle();
                let category = geometry.sector_under_pointer(rotation).category().clone();
                Self::Resolved { category, rotation }
            }
            other => other,
        }
    }

    #[must_use]
    pub fn rotation_at(&self, now: DateTime<Utc>) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Spinning(plan) => plan.rotation_at(now),
            Self::Resolved { rotation, .. } => *rotation,
        }
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        matches!(self, Self::Spinning(_))
    }

    #[must_use]
    pub fn resolved(&self) -> Option<&CategoryName> {
        match self {
            Self::Resolved { category, .. } => Some(category),
            _ => None,
        }
    }
}
