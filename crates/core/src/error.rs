use thiserror::Error;

use crate::model::{CategoryError, QuestionError};
use crate::wheel::WheelError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Wheel(#[from] WheelError),
}
