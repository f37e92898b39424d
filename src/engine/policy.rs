use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Brand;

/// Default probability that a positive swipe declares a match.
pub const DEFAULT_MATCH_RATE: f64 = 0.3;

/// Decides whether a positive swipe on `candidate` produces a match.
///
/// The engine consults the policy only for like / super-like actions.
/// Implementations may hold mutable state (an RNG, counters), which is why
/// the receiver is `&mut self`. Swap in a compatibility-scored policy here
/// once a real matching backend exists.
pub trait MatchPolicy: Send {
    fn is_match(&mut self, owner_id: &str, candidate: &Brand) -> bool;
}

/// Declares a match on every positive swipe. Demo and test use.
pub struct AlwaysMatch;

impl MatchPolicy for AlwaysMatch {
    fn is_match(&mut self, _owner_id: &str, _candidate: &Brand) -> bool {
        true
    }
}

/// Never declares a match. Demo and test use.
pub struct NeverMatch;

impl MatchPolicy for NeverMatch {
    fn is_match(&mut self, _owner_id: &str, _candidate: &Brand) -> bool {
        false
    }
}

/// Declares a match with fixed probability per positive swipe.
///
/// Rates outside `[0.0, 1.0]` are clamped.
pub struct RandomWithRate {
    rate: f64,
    rng: StdRng,
}

impl RandomWithRate {
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible sessions.
    pub fn seeded(rate: f64, seed: u64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MatchPolicy for RandomWithRate {
    fn is_match(&mut self, _owner_id: &str, _candidate: &Brand) -> bool {
        self.rng.gen::<f64>() < self.rate
    }
}

/// Scores each candidate and matches at or above a threshold.
pub struct ScoredThreshold<F> {
    score: F,
    threshold: f64,
}

impl<F> ScoredThreshold<F>
where
    F: FnMut(&str, &Brand) -> f64 + Send,
{
    pub fn new(score: F, threshold: f64) -> Self {
        Self { score, threshold }
    }
}

impl<F> MatchPolicy for ScoredThreshold<F>
where
    F: FnMut(&str, &Brand) -> f64 + Send,
{
    fn is_match(&mut self, owner_id: &str, candidate: &Brand) -> bool {
        (self.score)(owner_id, candidate) >= self.threshold
    }
}
