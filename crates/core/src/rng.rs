//! RNG module - injected randomness for food placement
//!
//! The engine never reads ambient randomness. Every operation that may place
//! food takes a [`RandomSource`] explicitly, so replaying the same inputs with
//! the same source reproduces the same game.
//!
//! Provided sources:
//!
//! - any `FnMut() -> f64` closure (handy for pinning outcomes in tests)
//! - [`SimpleRng`]: seeded LCG for reproducible replays and benches
//! - [`SessionRng`]: `rand`'s `StdRng`, the default for interactive play

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Map a unit value onto `[0, len)`
///
/// Values outside the contract (negative, NaN, `>= 1.0`) are clamped into range.
/// `len` must be non-zero.
pub(crate) fn unit_to_index(r: f64, len: usize) -> usize {
    // `as` saturates: NaN and negatives become 0.
    let idx = (r * len as f64).floor() as usize;
    idx.min(len - 1)
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (feed back into `new` to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seeded `StdRng` that remembers its seed so a session can be replayed
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the platform generator
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn next_unit(&mut self) -> f64 {
        // StandardUniform for f64 samples [0, 1).
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_unit_values_in_range() {
        let mut rng = SimpleRng::new(7);
        let mut session = SessionRng::new(7);
        for _ in 0..1000 {
            let a = rng.next_unit();
            let b = session.next_unit();
            assert!((0.0..1.0).contains(&a), "{}", a);
            assert!((0.0..1.0).contains(&b), "{}", b);
        }
    }

    #[test]
    fn test_session_rng_replays_from_seed() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(a.seed());
        for _ in 0..50 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn test_closure_is_a_source() {
        let mut calls = 0;
        let mut src = || {
            calls += 1;
            0.5
        };
        assert_eq!(src.next_unit(), 0.5);
        assert_eq!(src.next_unit(), 0.5);
        drop(src);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_unit_to_index_clamps() {
        assert_eq!(unit_to_index(0.0, 5), 0);
        assert_eq!(unit_to_index(0.999_999, 5), 4);
        assert_eq!(unit_to_index(1.0, 5), 4);
        assert_eq!(unit_to_index(7.5, 5), 4);
        assert_eq!(unit_to_index(-0.3, 5), 0);
        assert_eq!(unit_to_index(f64::NAN, 5), 0);
        assert_eq!(unit_to_index(0.5, 1), 0);
    }
}
