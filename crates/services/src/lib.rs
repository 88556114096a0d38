#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod handoff;
pub mod study;
pub mod wheel;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ConfirmError, HandoffError};
pub use handoff::CategoryHandoff;
pub use study::{JudgeOutcome, Judgement, StudyProgress, StudySession};
pub use wheel::{SpinRequest, WheelFrame, WheelSelector};
