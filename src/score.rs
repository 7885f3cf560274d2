//! Score ledger with a persisted high score.
//!
//! The ledger is the only component touching the storage port. Score is
//! monotone non-decreasing except through [`ScoreLedger::reset`]; the high
//! score is never reset.

use crate::persistence::ScoreStore;
use crate::sim::state::EnemyKind;

/// Storage key for the persisted high score.
pub const HIGH_SCORE_KEY: &str = "highscore";

#[derive(Debug)]
pub struct ScoreLedger {
    score: u64,
    high_score: u64,
    store: Box<dyn ScoreStore>,
}

impl ScoreLedger {
    /// Build a ledger over the given store. A missing stored value reads as
    /// a high score of zero.
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let high_score = store
            .get_number(HIGH_SCORE_KEY)
            .map(|v| v as u64)
            .unwrap_or(0);
        Self {
            score: 0,
            high_score,
            store,
        }
    }

    /// Credit a destroyed enemy by kind.
    pub fn add_enemy_score(&mut self, kind: EnemyKind) {
        self.score += match kind {
            EnemyKind::A => 100,
            EnemyKind::B => 200,
            EnemyKind::C => 300,
        };
    }

    /// Credit the stage-clear bonus. Returns the amount awarded.
    pub fn add_stage_bonus(&mut self, stage: u32) -> u64 {
        let bonus = stage as u64 * 1000;
        self.score += bonus;
        bonus
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Persist the current score iff it beats the stored high score. A
    /// non-increasing score performs no write.
    pub fn save_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.set_number(HIGH_SCORE_KEY, self.score as f64);
            log::info!("New high score: {}", self.score);
        }
    }

    /// Zero the current score. The high score is untouched.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test store with a shared write counter.
    #[derive(Debug, Default)]
    struct Inner {
        value: Option<f64>,
        writes: usize,
    }

    #[derive(Debug, Clone, Default)]
    struct CountingStore(Rc<RefCell<Inner>>);

    impl ScoreStore for CountingStore {
        fn get_number(&self, _key: &str) -> Option<f64> {
            self.0.borrow().value
        }

        fn set_number(&mut self, _key: &str, value: f64) {
            let mut inner = self.0.borrow_mut();
            inner.value = Some(value);
            inner.writes += 1;
        }
    }

    #[test]
    fn enemy_scores_sum_by_kind() {
        let mut ledger = ScoreLedger::new(Box::new(CountingStore::default()));
        ledger.add_enemy_score(EnemyKind::A);
        ledger.add_enemy_score(EnemyKind::B);
        ledger.add_enemy_score(EnemyKind::C);
        assert_eq!(ledger.score(), 600);
    }

    #[test]
    fn stage_bonus_is_stage_times_thousand() {
        let mut ledger = ScoreLedger::new(Box::new(CountingStore::default()));
        ledger.add_enemy_score(EnemyKind::A);
        let bonus = ledger.add_stage_bonus(3);
        assert_eq!(bonus, 3000);
        assert_eq!(ledger.score(), 3100);
    }

    #[test]
    fn high_score_written_only_on_improvement() {
        let store = CountingStore::default();
        let handle = store.clone();
        let mut ledger = ScoreLedger::new(Box::new(store));

        ledger.add_enemy_score(EnemyKind::C);
        ledger.save_high_score();
        assert_eq!(handle.0.borrow().writes, 1);
        assert_eq!(ledger.high_score(), 300);

        // Saving again without a better score performs no second write
        ledger.save_high_score();
        assert_eq!(handle.0.borrow().writes, 1);

        ledger.reset();
        ledger.save_high_score();
        assert_eq!(handle.0.borrow().writes, 1);
    }

    #[test]
    fn missing_stored_value_reads_as_zero() {
        let ledger = ScoreLedger::new(Box::new(CountingStore::default()));
        assert_eq!(ledger.high_score(), 0);
    }

    #[test]
    fn stored_high_score_loads_at_construction() {
        let store = CountingStore::default();
        store.0.borrow_mut().value = Some(5000.0);
        let ledger = ScoreLedger::new(Box::new(store));
        assert_eq!(ledger.high_score(), 5000);
    }

    #[test]
    fn reset_keeps_high_score() {
        let mut ledger = ScoreLedger::new(Box::new(CountingStore::default()));
        ledger.add_stage_bonus(2);
        ledger.save_high_score();
        ledger.reset();
        assert_eq!(ledger.score(), 0);
        assert_eq!(ledger.high_score(), 2000);
    }
}
