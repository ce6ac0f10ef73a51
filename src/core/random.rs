use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of randomness for pairing selection.
///
/// Both random operations the app performs (pick one rule from a list,
/// shuffle the fallback pool) go through this trait so tests can inject
/// a deterministic source and assert exact outcomes.
pub trait RandomSource: Send + Sync {
    /// An index in `0..len`. `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;

    /// A permutation of `0..len`. Every permutation must be reachable.
    fn permutation(&self, len: usize) -> Vec<usize>;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut rand::thread_rng());
        indices
    }
}

/// Deterministic source seeded once, for reproducing a selection sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().unwrap().gen_range(0..len)
    }

    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut *self.rng.lock().unwrap());
        indices
    }
}

/// Source that always picks the same index (clamped to the list) and
/// returns the identity permutation. Lets tests assert an exact rule
/// instead of "one of N".
#[derive(Debug)]
pub struct FixedRandom {
    index: usize,
}

impl FixedRandom {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RandomSource for FixedRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.index.min(len - 1)
    }

    fn permutation(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_range() {
        let source = ThreadRandom;
        for _ in 0..100 {
            assert!(source.pick_index(3) < 3);
        }
    }

    #[test]
    fn test_thread_random_permutation_is_complete() {
        let source = ThreadRandom;
        let mut perm = source.permutation(10);
        perm.sort_unstable();
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.pick_index(6)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.pick_index(6)).collect();
        assert_eq!(picks_a, picks_b);
        assert_eq!(a.permutation(6), b.permutation(6));
    }

    #[test]
    fn test_fixed_random_clamps() {
        let source = FixedRandom::new(10);
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.permutation(4), vec![0, 1, 2, 3]);
    }
}
