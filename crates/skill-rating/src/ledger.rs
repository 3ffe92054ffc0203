//! In-memory store of current ratings with per-entity read-modify-write.
//!
//! Each entity's rating sits behind its own mutex. Recording an outcome locks
//! the user entry, then the problem entry, computes the update and commits
//! both before releasing. Updates touching the same entity are serialized;
//! updates on disjoint entities run concurrently.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use rustc_hash::FxHashMap;
use skill_core::errors::LedgerError;
use skill_core::Rating;

use crate::adjust::{Adjustment, RatingAdjuster};

type Entry = Arc<Mutex<Rating>>;

#[derive(Debug, Default)]
pub struct RatingLedger {
    adjuster: RatingAdjuster,
    users: RwLock<FxHashMap<String, Entry>>,
    problems: RwLock<FxHashMap<String, Entry>>,
}

impl RatingLedger {
    pub fn new(adjuster: RatingAdjuster) -> Self {
        Self {
            adjuster,
            users: RwLock::default(),
            problems: RwLock::default(),
        }
    }

    /// Insert or replace a user's rating.
    pub fn insert_user(&self, id: impl Into<String>, rating: Rating) {
        insert(&self.users, id.into(), rating);
    }

    /// Insert or replace a problem's rating.
    pub fn insert_problem(&self, id: impl Into<String>, rating: Rating) {
        insert(&self.problems, id.into(), rating);
    }

    pub fn user(&self, id: &str) -> Option<Rating> {
        entry(&self.users, id).map(|e| current(&e))
    }

    pub fn problem(&self, id: &str) -> Option<Rating> {
        entry(&self.problems, id).map(|e| current(&e))
    }

    pub fn user_count(&self) -> usize {
        read(&self.users).len()
    }

    pub fn problem_count(&self) -> usize {
        read(&self.problems).len()
    }

    /// Apply one outcome to both stored ratings.
    ///
    /// On error neither rating changes.
    pub fn record_outcome(
        &self,
        user_id: &str,
        problem_id: &str,
        solved: bool,
    ) -> Result<Adjustment, LedgerError> {
        let user_entry =
            entry(&self.users, user_id).ok_or_else(|| LedgerError::UnknownUser(user_id.into()))?;
        let problem_entry = entry(&self.problems, problem_id)
            .ok_or_else(|| LedgerError::UnknownProblem(problem_id.into()))?;

        // Users before problems, always.
        let mut user = lock(&user_entry);
        let mut problem = lock(&problem_entry);

        let adjustment = self.adjuster.adjust(&user, &problem, solved)?;
        (*user, *problem) = adjustment.ratings();

        tracing::debug!(user_id, problem_id, solved, "outcome recorded");
        Ok(adjustment)
    }
}

fn insert(map: &RwLock<FxHashMap<String, Entry>>, id: String, rating: Rating) {
    let mut guard = map.write().unwrap_or_else(|e| e.into_inner());
    match guard.get(&id) {
        Some(existing) => *lock(existing) = rating,
        None => {
            guard.insert(id, Arc::new(Mutex::new(rating)));
        }
    }
}

fn entry(map: &RwLock<FxHashMap<String, Entry>>, id: &str) -> Option<Entry> {
    read(map).get(id).cloned()
}

fn read(
    map: &RwLock<FxHashMap<String, Entry>>,
) -> std::sync::RwLockReadGuard<'_, FxHashMap<String, Entry>> {
    map.read().unwrap_or_else(|e| e.into_inner())
}

fn current(entry: &Mutex<Rating>) -> Rating {
    *lock(entry)
}

/// Ratings are `Copy` and written in a single assignment, so a poisoned
/// mutex still holds a consistent value.
fn lock(entry: &Mutex<Rating>) -> MutexGuard<'_, Rating> {
    entry.lock().unwrap_or_else(|e| e.into_inner())
}
