//! Random tip selection
//!
//! Draws a bounded number of distinct tips from a catalog using a partial
//! Fisher-Yates shuffle, so every subset and ordering is equally likely.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Profile, Tip};

/// Samples tips without replacement
pub struct TipSelector<R: Rng = StdRng> {
    rng: R,
}

impl TipSelector<StdRng> {
    /// Create a selector seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a selector with a fixed seed (reproducible output)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for TipSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TipSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick `count` distinct tips in random order
    ///
    /// A count larger than the catalog returns the whole catalog shuffled.
    pub fn sample(&mut self, catalog: &[Tip], count: usize) -> Vec<Tip> {
        let mut pool = catalog.to_vec();
        let count = count.min(pool.len());
        let (chosen, _) = pool.partial_shuffle(&mut self.rng, count);
        chosen.to_vec()
    }

    /// Pick tips from a profile's own catalog
    pub fn sample_for(&mut self, profile: Profile, count: usize) -> Vec<Tip> {
        self.sample(profile.catalog(), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tip::{COUPLE_TIPS, INDIVIDUAL_TIPS};
    use std::collections::HashSet;

    #[test]
    fn test_sample_six_of_twelve() {
        let mut selector = TipSelector::with_seed(7);
        let tips = selector.sample(&COUPLE_TIPS, 6);

        assert_eq!(tips.len(), 6);
        let titles: HashSet<_> = tips.iter().map(|t| t.title).collect();
        assert_eq!(titles.len(), 6);
        assert!(tips.iter().all(|t| COUPLE_TIPS.contains(t)));
    }

    #[test]
    fn test_sample_never_repeats() {
        let mut selector = TipSelector::with_seed(42);
        for _ in 0..200 {
            let tips = selector.sample(&INDIVIDUAL_TIPS, 4);
            let titles: HashSet<_> = tips.iter().map(|t| t.title).collect();
            assert_eq!(titles.len(), 4);
        }
    }

    #[test]
    fn test_sample_is_bounded_by_catalog() {
        let mut selector = TipSelector::with_seed(1);
        let tips = selector.sample(&INDIVIDUAL_TIPS, 50);
        assert_eq!(tips.len(), INDIVIDUAL_TIPS.len());

        assert!(selector.sample(&[], 3).is_empty());
        assert!(selector.sample(&INDIVIDUAL_TIPS, 0).is_empty());
    }

    #[test]
    fn test_same_seed_same_tips() {
        let a = TipSelector::with_seed(99).sample(&COUPLE_TIPS, 6);
        let b = TipSelector::with_seed(99).sample(&COUPLE_TIPS, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_tip_can_be_drawn() {
        let mut selector = TipSelector::with_seed(3);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            for tip in selector.sample_for(Profile::Couple, 6) {
                seen.insert(tip.title);
            }
        }
        assert_eq!(seen.len(), COUPLE_TIPS.len());
    }
}
