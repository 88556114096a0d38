use quiz_core::model::{CategoryFilter, Question};
use services::{AppServices, JudgeOutcome, Judgement, StudySession};

pub const REVEAL_HINT: &str = "Tap to show answer";
pub const EMPTY_POOL_MESSAGE: &str = "No questions available for this category.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    ToggleReveal,
    Judge(Judgement),
    SelectCategory(CategoryFilter),
    Reshuffle,
    ClearMissed,
    ToggleMissedPanel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyCardVm {
    pub category: String,
    pub prompt: String,
    /// `None` until the card is flipped.
    pub answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryItemVm {
    pub filter: CategoryFilter,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissedItemVm {
    pub prompt: String,
    pub answer: String,
}

impl From<&Question> for MissedItemVm {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_string(),
            answer: question.answer().to_string(),
        }
    }
}

pub struct StudyVm {
    session: StudySession,
}

impl StudyVm {
    #[must_use]
    pub fn new(session: StudySession) -> Self {
        Self { session }
    }

    pub fn apply(&mut self, intent: StudyIntent) -> Option<JudgeOutcome> {
        match intent {
            StudyIntent::ToggleReveal => self.session.toggle_reveal(),
            StudyIntent::Judge(judgement) => return self.session.judge(judgement),
            StudyIntent::SelectCategory(filter) => self.session.select_category(filter),
            StudyIntent::Reshuffle => self.session.reshuffle(),
            StudyIntent::ClearMissed => self.session.clear_missed(),
            StudyIntent::ToggleMissedPanel => self.session.toggle_missed_panel(),
        }
        None
    }

    #[must_use]
    pub fn card(&self) -> Option<StudyCardVm> {
        let question = self.session.current_question()?;
        Some(StudyCardVm {
            category: question.category().to_string(),
            prompt: question.prompt().to_string(),
            answer: self
                .session
                .is_revealed()
                .then(|| question.answer().to_string()),
        })
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.session.streak())
    }

    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        let progress = self.session.progress();
        (progress.pool_size > 0)
            .then(|| format!("{} / {}", progress.position(), progress.pool_size))
    }

    /// "All Categories" first, then every dataset category in first-seen order.
    #[must_use]
    pub fn category_items(&self) -> Vec<CategoryItemVm> {
        let active = self.session.active_category();
        std::iter::once(CategoryFilter::Unfiltered)
            .chain(
                self.session
                    .categories()
                    .into_iter()
                    .map(CategoryFilter::Filtered),
            )
            .map(|filter| CategoryItemVm {
                label: filter.label().to_string(),
                selected: &filter == active,
                filter,
            })
            .collect()
    }

    #[must_use]
    pub fn active_label(&self) -> String {
        self.session.active_category().label().to_string()
    }

    #[must_use]
    pub fn missed_items(&self) -> Vec<MissedItemVm> {
        self.session.missed().iter().map(MissedItemVm::from).collect()
    }

    #[must_use]
    pub fn missed_header_label(&self) -> String {
        format!("Incorrect answers ({})", self.session.missed().len())
    }

    #[must_use]
    pub fn is_missed_panel_open(&self) -> bool {
        self.session.is_missed_panel_open()
    }
}

/// Open the study screen, applying a category handed over from the wheel.
pub async fn start_study(services: &AppServices) -> StudyVm {
    StudyVm::new(services.start_study().await)
}
