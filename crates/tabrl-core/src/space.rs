//! Discrete space type

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A discrete space of `n` values, `0..n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Whether `value` lies inside the space
    pub fn contains(&self, value: usize) -> bool {
        value < self.n
    }

    /// Draw a uniformly random element of the space
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n)
    }
}

impl std::fmt::Display for Discrete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Discrete({})", self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_contains() {
        let space = Discrete::new(2);
        assert!(space.contains(0));
        assert!(space.contains(1));
        assert!(!space.contains(2));
    }

    #[test]
    fn test_sample_in_range() {
        let space = Discrete::new(3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(space.contains(space.sample(&mut rng)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Discrete::new(11).to_string(), "Discrete(11)");
    }
}
