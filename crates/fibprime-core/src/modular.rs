//! Modular arithmetic on `u64` residues.
//!
//! Every product is widened to `u128` before reduction, so no operation here
//! can overflow for any modulus that fits in 64 bits.

/// Compute `(a * b) mod m`.
///
/// # Example
/// ```
/// use fibprime_core::modular::mul_mod;
/// assert_eq!(mul_mod(u64::MAX - 1, u64::MAX - 1, u64::MAX), 1);
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be non-zero");
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// Compute `(a + b) mod m` for `a, b < m`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(a < m && b < m);
    ((u128::from(a) + u128::from(b)) % u128::from(m)) as u64
}

/// Compute `(a - b) mod m` for `a, b < m`.
#[inline]
#[must_use]
pub fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(a < m && b < m);
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Compute `base^exp mod m` by binary square-and-multiply.
///
/// Returns 0 when `m == 1`.
///
/// # Example
/// ```
/// use fibprime_core::modular::pow_mod;
/// assert_eq!(pow_mod(2, 10, 1000), 24);
/// assert_eq!(pow_mod(2, 6, 7), 1);
/// ```
#[must_use]
pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be non-zero");
    if m == 1 {
        return 0;
    }

    let mut result = 1;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Compute `(F(n) mod m, F(n+1) mod m)` with modular fast doubling.
///
/// Walks the bits of `n` from most to least significant, keeping the pair
/// `(F(k), F(k+1))` and applying
///
/// ```text
/// F(2k)   = F(k) * (2*F(k+1) - F(k))
/// F(2k+1) = F(k)^2 + F(k+1)^2
/// ```
///
/// then advancing one index when the bit is set.
#[must_use]
pub fn fib_pair_mod(n: u64, m: u64) -> (u64, u64) {
    debug_assert!(m > 0, "modulus must be non-zero");
    if m == 1 {
        return (0, 0);
    }

    let num_bits = 64 - n.leading_zeros();
    let mut fk = 0;
    let mut fk1 = 1 % m;

    for i in (0..num_bits).rev() {
        let twice_fk1 = add_mod(fk1, fk1, m);
        let f2k = mul_mod(fk, sub_mod(twice_fk1, fk, m), m);
        let f2k1 = add_mod(mul_mod(fk, fk, m), mul_mod(fk1, fk1, m), m);

        if (n >> i) & 1 == 1 {
            fk = f2k1;
            fk1 = add_mod(f2k, f2k1, m);
        } else {
            fk = f2k;
            fk1 = f2k1;
        }
    }

    (fk, fk1)
}

/// Compute `F(n) mod m`.
///
/// # Example
/// ```
/// use fibprime_core::modular::fib_mod;
/// // F(100) = 354224848179261915075
/// assert_eq!(fib_mod(100, 1_000_000), 915_075);
/// ```
#[inline]
#[must_use]
pub fn fib_mod(n: u64, m: u64) -> u64 {
    fib_pair_mod(n, m).0
}
