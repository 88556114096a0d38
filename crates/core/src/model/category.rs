use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Question;

/// Validated category label (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a validated category name.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Which questions a study session draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    Unfiltered,
    Filtered(CategoryName),
}

impl CategoryFilter {
    /// Display label for the unfiltered entry in category lists.
    pub const ALL_LABEL: &'static str = "All Categories";

    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::Unfiltered => true,
            Self::Filtered(name) => question.category() == name,
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&CategoryName> {
        match self {
            Self::Unfiltered => None,
            Self::Filtered(name) => Some(name),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Unfiltered => Self::ALL_LABEL,
            Self::Filtered(name) => name.as_str(),
        }
    }
}

impl From<Option<CategoryName>> for CategoryFilter {
    fn from(value: Option<CategoryName>) -> Self {
        value.map_or(Self::Unfiltered, Self::Filtered)
    }
}

impl From<CategoryName> for CategoryFilter {
    fn from(value: CategoryName) -> Self {
        Self::Filtered(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_name_is_trimmed() {
        let name = CategoryName::new("  Routing ").unwrap();
        assert_eq!(name.as_str(), "Routing");
    }

    #[test]
    fn category_name_rejects_blank() {
        assert_eq!(CategoryName::new(" \t").unwrap_err(), CategoryError::EmptyName);
    }

    #[test]
    fn filter_labels() {
        assert_eq!(CategoryFilter::Unfiltered.label(), "All Categories");
        let filter = CategoryFilter::from(Some(CategoryName::new("OSI").unwrap()));
        assert_eq!(filter.label(), "OSI");
        assert_eq!(CategoryFilter::from(None), CategoryFilter::Unfiltered);
    }
}
