/// Position within the current pass over the pool, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyProgress {
    pub pool_size: usize,
    pub remaining: usize,
}

impl StudyProgress {
    /// 1-based position of the question on screen within the pass.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.pool_size == 0 {
            return 0;
        }
        self.pool_size.saturating_sub(self.remaining) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_counts_current_card() {
        let fresh = StudyProgress { pool_size: 5, remaining: 5 };
        assert_eq!(fresh.position(), 1);
        let last = StudyProgress { pool_size: 5, remaining: 1 };
        assert_eq!(last.position(), 5);
        let empty = StudyProgress { pool_size: 0, remaining: 0 };
        assert_eq!(empty.position(), 0);
    }
}
