use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CategoryError, CategoryName};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,
    #[error("question answer cannot be empty")]
    EmptyAnswer,
    #[error(transparent)]
    InvalidCategory(#[from] CategoryError),
}

/// A single flashcard: a prompt and its answer, labelled with a category.
///
/// Two questions are considered the same card when their prompt text matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    category: CategoryName,
    prompt: String,
    answer: String,
}

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the category, prompt or answer is blank.
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let category = CategoryName::new(category)?;
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        Ok(Self {
            category,
            prompt,
            answer,
        })
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn same_prompt(&self, other: &Question) -> bool {
        self.prompt == other.prompt
    }
}

/// Raw dataset shape. Accepts the Czech keys used by the bundled network deck.
#[derive(Deserialize)]
struct QuestionRecord {
    #[serde(alias = "okruh")]
    category: String,
    #[serde(alias = "otazka")]
    prompt: String,
    #[serde(alias = "odpoved")]
    answer: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.category, record.prompt, record.answer)
    }
}
