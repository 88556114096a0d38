mod progress;
mod session;

// Public API of the study subsystem.
pub use progress::StudyProgress;
pub use session::{JudgeOutcome, Judgement, StudySession};
