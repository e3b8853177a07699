//! Prime helpers for sizing open addressing tables.

use std::cmp;

/// Returns true if `n` is prime.
pub const fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`, or [`None`] if it doesn't fit in a
/// [`usize`].
pub fn next_prime(n: usize) -> Option<usize> {
    let mut candidate = cmp::max(n, 2);
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}
