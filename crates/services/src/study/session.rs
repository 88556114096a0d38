use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use quiz_core::model::{CategoryFilter, CategoryName, Dataset, Question};
use quiz_core::shuffle::shuffled;

use super::progress::StudyProgress;

//
// ─── JUDGEMENTS ────────────────────────────────────────────────────────────────
//

/// The user's verdict on the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    Correct,
    Incorrect,
}

impl From<bool> for Judgement {
    fn from(is_correct: bool) -> Self {
        if is_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// What a judgement changed, for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgeOutcome {
    pub streak: u32,
    /// The question was added to the missed list by this judgement.
    pub newly_missed: bool,
    /// The pass was exhausted and a fresh shuffle started.
    pub reshuffled: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz state for the study screen.
///
/// Draws questions from the active category's pool without repeats until the
/// pass is exhausted, then starts a fresh shuffled pass. Tracks a streak of
/// correct answers and the list of missed questions.
pub struct StudySession {
    dataset: Arc<Dataset>,
    active: CategoryFilter,
    pool: Vec<Question>,
    remaining: Vec<Question>,
    current: usize,
    revealed: bool,
    streak: u32,
    missed: Vec<Question>,
    missed_panel_open: bool,
    rng: StdRng,
}

impl StudySession {
    /// Create a session over the whole dataset with an OS-seeded RNG.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_rng(dataset, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a session with a deterministic RNG.
    #[must_use]
    pub fn with_seed(dataset: Arc<Dataset>, seed: u64) -> Self {
        Self::with_rng(dataset, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: Arc<Dataset>, rng: StdRng) -> Self {
        let mut session = Self {
            dataset,
            active: CategoryFilter::Unfiltered,
            pool: Vec::new(),
            remaining: Vec::new(),
            current: 0,
            revealed: false,
            streak: 0,
            missed: Vec::new(),
            missed_panel_open: false,
            rng,
        };
        session.rebuild_pool();
        session
    }

    /// Apply a category handed over from the wheel, if any, and start a fresh pass.
    ///
    /// Without a pending category the active filter is kept.
    pub fn initialize(&mut self, pending: Option<CategoryName>) {
        if let Some(category) = pending {
            self.active = CategoryFilter::Filtered(category);
        }
        self.rebuild_pool();
    }

    /// Switch to another category. Re-selecting the active one changes nothing.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        if filter == self.active {
            return;
        }
        self.active = filter;
        self.rebuild_pool();
    }

    /// Show or hide the answer of the current question.
    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Record the user's verdict and move to another question.
    ///
    /// Returns `None` when there is no question to judge.
    pub fn judge(&mut self, judgement: Judgement) -> Option<JudgeOutcome> {
        let question = self.current_question()?.clone();

        let mut newly_missed = false;
        match judgement {
            Judgement::Correct => self.streak = self.streak.saturating_add(1),
            Judgement::Incorrect => {
                self.streak = 0;
                if !self.missed.iter().any(|m| m.same_prompt(&question)) {
                    self.missed.push(question);
                    self.missed_panel_open = true;
                    newly_missed = true;
                }
            }
        }

        let reshuffled = self.advance();
        Some(JudgeOutcome {
            streak: self.streak,
            newly_missed,
            reshuffled,
        })
    }

    /// Start a new shuffled pass over the pool. Streak and missed list are kept.
    pub fn reshuffle(&mut self) {
        self.reseed();
    }

    pub fn clear_missed(&mut self) {
        self.missed.clear();
    }

    pub fn toggle_missed_panel(&mut self) {
        self.missed_panel_open = !self.missed_panel_open;
    }

    /// The question on screen, or `None` when the pool is empty.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.remaining.get(self.current)
    }

    #[must_use]
    pub fn has_questions(&self) -> bool {
        !self.pool.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn missed(&self) -> &[Question] {
        &self.missed
    }

    #[must_use]
    pub fn is_missed_panel_open(&self) -> bool {
        self.missed_panel_open
    }

    #[must_use]
    pub fn active_category(&self) -> &CategoryFilter {
        &self.active
    }

    /// Categories of the whole dataset, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryName> {
        self.dataset.categories()
    }

    #[must_use]
    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    #[must_use]
    pub fn progress(&self) -> StudyProgress {
        StudyProgress {
            pool_size: self.pool.len(),
            remaining: self.remaining.len(),
        }
    }

    fn rebuild_pool(&mut self) {
        self.pool = self.dataset.pool(&self.active);
        tracing::debug!(
            category = self.active.label(),
            pool = self.pool.len(),
            "study pool rebuilt"
        );
        self.reseed();
    }

    fn reseed(&mut self) {
        self.remaining = shuffled(&self.pool, &mut self.rng);
        self.current = 0;
        self.revealed = false;
    }

    /// Drop the current question from the pass and pick the next one.
    ///
    /// Returns `true` when the pass ran out and a new one was shuffled.
    fn advance(&mut self) -> bool {
        if self.current < self.remaining.len() {
            self.remaining.remove(self.current);
        }

        let reshuffled = if self.remaining.is_empty() {
            self.remaining = shuffled(&self.pool, &mut self.rng);
            self.current = 0;
            true
        } else {
            self.current = self.rng.random_range(0..self.remaining.len());
            false
        };

        self.revealed = false;
        reshuffled
    }
}

impl fmt::Debug for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudySession")
            .field("active", &self.active)
            .field("pool_len", &self.pool.len())
            .field("remaining_len", &self.remaining.len())
            .field("current", &self.current)
            .field("revealed", &self.revealed)
            .field("streak", &self.streak)
            .field("missed_len", &self.missed.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
