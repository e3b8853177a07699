//! Deterministic byte-oriented hashers. Neither is resistant to deliberate collisions, they only
//! have to spread ordinary keys across buckets.

use std::hash::{BuildHasher, Hasher};

const MULTIPLIER: u64 = 31;

/// Accumulates `state * 31 + byte` over every byte written.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialHasher {
    state: u64,
}

impl Hasher for PolynomialHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(*byte as u64);
        }
    }
}

/// Builds [`PolynomialHasher`]s. The default hasher for both tables in this module.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialState;

impl BuildHasher for PolynomialState {
    type Hasher = PolynomialHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PolynomialHasher {
            state: 0,
        }
    }
}

/// Sums every byte written. Any two keys made of the same bytes in a different order collide.
#[derive(Debug, Clone, Copy)]
pub struct ByteSumHasher {
    state: u64,
}

impl Hasher for ByteSumHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_add(*byte as u64);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteSumState;

impl BuildHasher for ByteSumState {
    type Hasher = ByteSumHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ByteSumHasher {
            state: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial() {
        let mut hasher = PolynomialState.build_hasher();
        hasher.write(b"ab");
        assert_eq!(hasher.finish(), 97 * 31 + 98);

        assert_ne!(
            PolynomialState.hash_one("ab"),
            PolynomialState.hash_one("ba"),
            "Byte order should affect a polynomial hash."
        );
        assert_eq!(PolynomialState.hash_one("key-1"), PolynomialState.hash_one("key-1"));
    }

    #[test]
    fn test_byte_sum() {
        let mut hasher = ByteSumState.build_hasher();
        hasher.write(b"ab");
        assert_eq!(hasher.finish(), 97 + 98);

        assert_eq!(
            ByteSumState.hash_one("ab"),
            ByteSumState.hash_one("ba"),
            "Anagrams should collide under a byte sum."
        );
    }
}
