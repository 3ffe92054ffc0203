//! Next-problem selection: exclude recently shown problems, then draw
//! uniformly from what is left.
//!
//! The candidate set is built once and sampled once, so selection always
//! terminates and always returns an index into the pool.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use skill_core::config::SelectionConfig;
use skill_core::errors::SelectionError;
use skill_core::Rating;

#[derive(Debug, Clone, Default)]
pub struct ProblemSelector {
    history_window: Option<usize>,
    max_gap_sigmas: Option<f64>,
}

impl ProblemSelector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            history_window: config.history_window,
            max_gap_sigmas: config.max_gap_sigmas,
        }
    }

    /// Pick the index of the next problem to show `user`.
    ///
    /// `history` lists previously shown indices, oldest first. When every
    /// problem is excluded the least recently shown one is returned.
    pub fn select<R: Rng + ?Sized>(
        &self,
        user: &Rating,
        problems: &[Rating],
        history: &[usize],
        rng: &mut R,
    ) -> Result<usize, SelectionError> {
        if problems.is_empty() {
            return Err(SelectionError::EmptyPool);
        }

        let recent = self.recent(history);
        let excluded: FxHashSet<usize> = recent.iter().copied().collect();
        let open: Vec<usize> = (0..problems.len())
            .filter(|i| !excluded.contains(i))
            .collect();

        if open.is_empty() {
            return Ok(least_recent(recent, problems.len()));
        }

        let candidates = match self.max_gap_sigmas {
            Some(sigmas) => {
                let reach = sigmas * user.std_dev();
                let near: Vec<usize> = open
                    .iter()
                    .copied()
                    .filter(|&i| (problems[i].mean - user.mean).abs() <= reach)
                    .collect();
                if near.is_empty() {
                    open
                } else {
                    near
                }
            }
            None => open,
        };

        let choice = candidates
            .choose(rng)
            .copied()
            .unwrap_or(candidates[0]);
        tracing::trace!(choice, candidates = candidates.len(), "problem selected");
        Ok(choice)
    }

    fn recent<'h>(&self, history: &'h [usize]) -> &'h [usize] {
        match self.history_window {
            Some(window) => &history[history.len().saturating_sub(window)..],
            None => history,
        }
    }
}

/// Problem whose latest appearance in `recent` is earliest. Every index in
/// `0..pool_len` appears in `recent` when this is called.
fn least_recent(recent: &[usize], pool_len: usize) -> usize {
    let mut last_seen = vec![0usize; pool_len];
    for (position, &index) in recent.iter().enumerate() {
        if index < pool_len {
            last_seen[index] = position;
        }
    }
    (0..pool_len)
        .min_by_key(|&i| last_seen[i])
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<Rating> {
        [150.0, 450.0, 700.0, 900.0, 1100.0]
            .iter()
            .map(|&m| Rating::from_std(m, 100.0).unwrap())
            .collect()
    }

    fn user() -> Rating {
        Rating::from_std(300.0, 500.0).unwrap()
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = ProblemSelector::default().select(&user(), &[], &[], &mut rng);
        assert_eq!(err, Err(SelectionError::EmptyPool));
    }

    #[test]
    fn test_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = [0, 2, 4];
        for _ in 0..200 {
            let i = ProblemSelector::default()
                .select(&user(), &pool(), &history, &mut rng)
                .unwrap();
            assert!(i == 1 || i == 3, "picked excluded {i}");
        }
    }

    #[test]
    fn test_all_excluded_returns_least_recent() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = [3, 1, 0, 2, 4, 1];
        let i = ProblemSelector::default()
            .select(&user(), &pool(), &history, &mut rng)
            .unwrap();
        assert_eq!(i, 3);
    }

    #[test]
    fn test_history_window_limits_exclusion() {
        let config = SelectionConfig {
            history_window: Some(1),
            ..Default::default()
        };
        let selector = ProblemSelector::new(&config);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = FxHashSet::default();
        for _ in 0..300 {
            seen.insert(selector.select(&user(), &pool(), &[0, 1, 2, 3], &mut rng).unwrap());
        }
        assert!(!seen.contains(&3));
        assert!(seen.contains(&0));
    }

    #[test]
    fn test_gap_narrowing_prefers_nearby() {
        let config = SelectionConfig {
            max_gap_sigmas: Some(1.0),
            ..Default::default()
        };
        let narrow_user = Rating::from_std(1000.0, 150.0).unwrap();
        let selector = ProblemSelector::new(&config);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let i = selector.select(&narrow_user, &pool(), &[], &mut rng).unwrap();
            assert!(i == 3 || i == 4, "picked distant {i}");
        }
    }

    #[test]
    fn test_gap_narrowing_falls_back_when_none_near() {
        let config = SelectionConfig {
            max_gap_sigmas: Some(0.1),
            ..Default::default()
        };
        let far_user = Rating::from_std(2800.0, 50.0).unwrap();
        let selector = ProblemSelector::new(&config);
        let mut rng = StdRng::seed_from_u64(5);
        let i = selector.select(&far_user, &pool(), &[], &mut rng).unwrap();
        assert!(i < pool().len());
    }

    #[test]
    fn test_out_of_range_history_ignored() {
        let mut rng = StdRng::seed_from_u64(9);
        let i = ProblemSelector::default()
            .select(&user(), &pool()[..1], &[42], &mut rng)
            .unwrap();
        assert_eq!(i, 0);
    }
}
