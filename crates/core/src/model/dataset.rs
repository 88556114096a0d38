use serde::{Deserialize, Serialize};

use crate::model::{CategoryFilter, CategoryName, Question};

/// The full, read-only question list loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    questions: Vec<Question>,
}

impl Dataset {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct category labels in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryName> {
        let mut seen: Vec<CategoryName> = Vec::new();
        for question in &self.questions {
            if !seen.contains(question.category()) {
                seen.push(question.category().clone());
            }
        }
        seen
    }

    /// Questions matching `filter`, in dataset order.
    #[must_use]
    pub fn pool(&self, filter: &CategoryFilter) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|question| filter.matches(question))
            .cloned()
            .collect()
    }
}

impl From<Vec<Question>> for Dataset {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(category: &str, prompt: &str) -> Question {
        Question::new(category, prompt, "answer").unwrap()
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let dataset = Dataset::new(vec![
            q("Zeta", "1"),
            q("Alpha", "2"),
            q("Zeta", "3"),
            q("Mid", "4"),
        ]);
        let names: Vec<_> = dataset
            .categories()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn pool_filters_by_category() {
        let dataset = Dataset::new(vec![q("A", "1"), q("A", "2"), q("B", "3")]);
        let a = CategoryFilter::Filtered(CategoryName::new("A").unwrap());
        assert_eq!(dataset.pool(&a).len(), 2);
        assert_eq!(dataset.pool(&CategoryFilter::Unfiltered).len(), 3);
        let missing = CategoryFilter::Filtered(CategoryName::new("C").unwrap());
        assert!(dataset.pool(&missing).is_empty());
    }

    #[test]
    fn deserializes_from_json_array() {
        let dataset: Dataset = serde_json::from_str(
            r#"[{"okruh":"A","otazka":"q1","odpoved":"a1"},{"category":"B","prompt":"q2","answer":"a2"}]"#,
        )
        .unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.categories().len(), 2);
    }
}
