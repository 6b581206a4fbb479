use rand::Rng;

use crate::history::HistoryTracker;
use crate::profiles::browsers::BrowserTemplate;
use crate::spec::{DEFAULT_HISTORY_WINDOW, DEFAULT_RETRY_BUDGET};

/// Cumulative-distribution draw over market-share weights.
///
/// Sums the candidate weights, draws uniformly in `[0, total)` and walks the
/// list accumulating weight. If rounding exhausts the walk the last candidate
/// is returned; an empty total degrades to the last candidate as well.
/// Candidates must be non-empty.
pub fn weighted_select<'a, R: Rng + ?Sized>(
    candidates: &[&'a BrowserTemplate],
    rng: &mut R,
) -> &'a BrowserTemplate {
    let total: f64 = candidates.iter().map(|t| t.market_share).sum();
    if total <= 0.0 {
        return candidates[candidates.len() - 1];
    }

    let draw = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for &candidate in candidates {
        cumulative += candidate.market_share;
        if draw <= cumulative {
            return candidate;
        }
    }

    candidates[candidates.len() - 1]
}

/// Uniform draw: every candidate weighs 1. Candidates must be non-empty.
pub fn uniform_select<'a, R: Rng + ?Sized>(
    candidates: &[&'a BrowserTemplate],
    rng: &mut R,
) -> &'a BrowserTemplate {
    candidates[rng.random_range(0..candidates.len())]
}

/// Stateful strategy cycling a fixed, ordered candidate list.
///
/// The order of the list handed to [`select`](Self::select) is caller-visible
/// and must stay stable across calls for the cycle to be deterministic.
#[derive(Debug, Clone, Default)]
pub struct RoundRobinStrategy {
    index: usize,
}

impl RoundRobinStrategy {
    /// Strategy starting at the first candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current candidate and advance modulo the list length.
    /// Candidates must be non-empty.
    pub fn select<'a>(&mut self, candidates: &[&'a BrowserTemplate]) -> &'a BrowserTemplate {
        let current = self.index % candidates.len();
        self.index = (current + 1) % candidates.len();
        candidates[current]
    }

    /// Rewind to the first candidate.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Index of the candidate the next call returns.
    pub fn current_index(&self) -> usize {
        self.index
    }
}

/// Uniform draws that retry around recently selected families.
///
/// Attempts up to the retry budget to draw a candidate not present in the
/// tracker, then falls back to an unconstrained draw rather than failing.
/// The chosen identity is recorded afterwards.
#[derive(Debug, Clone)]
pub struct AvoidRecentStrategy {
    history: HistoryTracker,
    max_retries: u32,
}

impl Default for AvoidRecentStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_WINDOW, DEFAULT_RETRY_BUDGET)
    }
}

impl AvoidRecentStrategy {
    /// Strategy with the given history capacity and retry budget.
    pub fn new(history_size: usize, max_retries: u32) -> Self {
        Self {
            history: HistoryTracker::new(history_size),
            max_retries,
        }
    }

    /// Select with the configured retry budget and tracking enabled.
    pub fn select<'a, R: Rng + ?Sized>(
        &mut self,
        candidates: &[&'a BrowserTemplate],
        rng: &mut R,
    ) -> &'a BrowserTemplate {
        self.select_with(candidates, self.max_retries, true, rng)
    }

    /// Select with an explicit retry budget. With `track` false the history
    /// is neither consulted nor updated and the draw is plain uniform.
    pub fn select_with<'a, R: Rng + ?Sized>(
        &mut self,
        candidates: &[&'a BrowserTemplate],
        retry_budget: u32,
        track: bool,
        rng: &mut R,
    ) -> &'a BrowserTemplate {
        if !track {
            return uniform_select(candidates, rng);
        }

        let mut selected = None;
        for _ in 0..retry_budget {
            let candidate = uniform_select(candidates, rng);
            if !self.history.contains(candidate.browser.as_str()) {
                selected = Some(candidate);
                break;
            }
        }

        // Budget exhausted: degrade to an unconstrained draw, never an error.
        let selected = selected.unwrap_or_else(|| uniform_select(candidates, rng));
        self.history.add(selected.browser.as_str());
        selected
    }

    /// Number of families currently tracked.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current history capacity.
    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }

    /// Resize the history, evicting the oldest entries if it shrinks.
    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }

    /// Forget all tracked families.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::BrowserFamily;
    use crate::profiles::browsers::all_templates;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weighted_favors_the_heaviest_candidate() {
        let candidates = all_templates();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..200 {
            let chosen = weighted_select(&candidates, &mut rng);
            *counts.entry(chosen.browser).or_insert(0u32) += 1;
        }

        let chrome = counts.get(&BrowserFamily::Chrome).copied().unwrap_or(0);
        for (family, count) in &counts {
            if *family != BrowserFamily::Chrome {
                assert!(
                    chrome > *count,
                    "chrome ({chrome}) not above {family:?} ({count})"
                );
            }
        }
    }

    #[test]
    fn weighted_is_deterministic_per_seed() {
        let candidates = all_templates();
        let a = weighted_select(&candidates, &mut StdRng::seed_from_u64(12345));
        let b = weighted_select(&candidates, &mut StdRng::seed_from_u64(12345));
        assert_eq!(a.browser, b.browser);
    }

    #[test]
    fn weighted_with_zero_total_falls_back_to_the_last_candidate() {
        use crate::configs::{Engine, RiskLevel};

        let a = BrowserTemplate {
            browser: BrowserFamily::Chrome,
            engine: Engine::Blink,
            stable_version: 145,
            min_version: 90,
            max_version: 145,
            market_share: 0.0,
            risk_level: RiskLevel::Low,
        };
        let b = BrowserTemplate {
            browser: BrowserFamily::Firefox,
            engine: Engine::Gecko,
            stable_version: 147,
            min_version: 100,
            max_version: 147,
            market_share: 0.0,
            risk_level: RiskLevel::Low,
        };

        let candidates = vec![&a, &b];
        let mut rng = StdRng::seed_from_u64(0);
        // Both fallback paths of the walk land on the last candidate.
        assert_eq!(
            weighted_select(&candidates, &mut rng).browser,
            BrowserFamily::Firefox
        );
    }

    #[test]
    fn uniform_covers_every_candidate() {
        let candidates = all_templates();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(uniform_select(&candidates, &mut rng).browser);
        }
        assert_eq!(seen.len(), candidates.len());
    }

    #[test]
    fn round_robin_cycles_in_order() {
        let candidates = all_templates();
        let mut strategy = RoundRobinStrategy::new();

        let mut first_pass = Vec::new();
        for _ in 0..candidates.len() {
            first_pass.push(strategy.select(&candidates).browser);
        }

        // Every candidate exactly once, in registry order.
        let expected: Vec<_> = candidates.iter().map(|t| t.browser).collect();
        assert_eq!(first_pass, expected);

        // The (N+1)-th call wraps to the first candidate.
        assert_eq!(strategy.select(&candidates).browser, expected[0]);

        strategy.reset();
        assert_eq!(strategy.current_index(), 0);
        assert_eq!(strategy.select(&candidates).browser, expected[0]);
    }

    #[test]
    fn avoid_recent_skips_tracked_families() {
        let candidates = all_templates();
        let mut strategy = AvoidRecentStrategy::new(4, 20);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        // With a budget comfortably above the candidate count, the first
        // four draws are all distinct.
        for _ in 0..candidates.len() {
            seen.insert(strategy.select(&candidates, &mut rng).browser);
        }
        assert_eq!(seen.len(), candidates.len());
        assert_eq!(strategy.history_len(), candidates.len());
    }

    #[test]
    fn avoid_recent_falls_back_instead_of_failing() {
        let candidates = all_templates();
        let mut strategy = AvoidRecentStrategy::new(8, 5);
        let mut rng = StdRng::seed_from_u64(2);

        // Saturate the history with every family, then select again: the
        // budget is exhausted and the unconstrained fallback still returns.
        for _ in 0..candidates.len() {
            strategy.select(&candidates, &mut rng);
        }
        let chosen = strategy.select(&candidates, &mut rng);
        assert!(candidates.iter().any(|t| t.browser == chosen.browser));
    }

    #[test]
    fn avoid_recent_with_tracking_disabled_leaves_history_alone() {
        let candidates = all_templates();
        let mut strategy = AvoidRecentStrategy::new(8, 5);
        let mut rng = StdRng::seed_from_u64(4);

        strategy.select_with(&candidates, 5, false, &mut rng);
        assert_eq!(strategy.history_len(), 0);
    }
}
