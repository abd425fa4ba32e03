//! Integer square root and trial division over the mod-30 wheel.

use crate::constants::{SMALL_PRIMES, WHEEL_MODULUS, WHEEL_RESIDUES};

/// Exact integer square root: the largest `r` with `r * r <= n`.
///
/// Newton-Raphson iteration seeded from above with `2^ceil(bits/2)`. The
/// iterates decrease monotonically and stop at `floor(sqrt(n))`.
///
/// # Example
/// ```
/// use fibprime_core::wheel::isqrt;
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// assert_eq!(isqrt(u64::MAX), u64::from(u32::MAX));
/// ```
#[must_use]
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    let bits = 64 - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Smallest prime factor of `n`, or `None` when `n` is prime.
///
/// Values below 2 have no prime factor and also return `None`; callers that
/// need a primality answer should use [`is_prime`].
///
/// The primes below 30 are checked directly, then divisors `30k + r` for
/// each wheel residue `r`, up to and including `isqrt(n)`.
#[must_use]
pub fn smallest_factor(n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }

    for p in SMALL_PRIMES {
        if n == p {
            return None;
        }
        if n % p == 0 {
            return Some(p);
        }
    }

    let limit = isqrt(n);
    let mut base = WHEEL_MODULUS;
    while base <= limit {
        for r in WHEEL_RESIDUES {
            let d = base + r;
            if d > limit {
                return None;
            }
            if n % d == 0 {
                return Some(d);
            }
        }
        base += WHEEL_MODULUS;
    }
    None
}

/// Deterministic primality by wheel trial division.
///
/// # Example
/// ```
/// use fibprime_core::wheel::is_prime;
/// assert!(is_prime(22_855_967));
/// assert!(!is_prime(1_387));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    n >= 2 && smallest_factor(n).is_none()
}
