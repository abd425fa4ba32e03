//! The three-stage primality filter.
//!
//! Stage 1 is the base-2 Fermat test, stage 2 the Fibonacci congruence
//! `F(n+1) ≡ 0 (mod n)`, and stage 3 deterministic trial division. The first
//! two are cheap and reject almost every composite; stage 3 only runs on
//! candidates that passed both, and a composite reaching it is a
//! counterexample.

use crate::modular::{fib_mod, pow_mod};
use crate::wheel::smallest_factor;

/// Outcome of classifying one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Passed both probabilistic stages and trial division.
    Prime,
    /// Passed both probabilistic stages but has a divisor.
    CompositeConfirmed {
        /// The candidate under test.
        candidate: u64,
        /// Its smallest prime factor.
        factor: u64,
    },
    /// Failed a probabilistic stage; definitely composite.
    FilteredOut,
}

impl Verdict {
    /// Whether this verdict is a counterexample to the conjecture.
    #[must_use]
    pub fn is_counterexample(&self) -> bool {
        matches!(self, Self::CompositeConfirmed { .. })
    }
}

/// Stage 1: `2^(n-1) ≡ 1 (mod n)`.
///
/// Every odd prime passes. Values below 3 fail.
#[must_use]
pub fn fermat_test(n: u64) -> bool {
    n >= 3 && pow_mod(2, n - 1, n) == 1
}

/// Stage 2: `F(n+1) ≡ 0 (mod n)`.
///
/// Every prime congruent to ±2 (mod 5) passes. Values below 2 fail, as does
/// `u64::MAX`, whose successor index is not representable.
#[must_use]
pub fn fibonacci_test(n: u64) -> bool {
    match n.checked_add(1) {
        Some(index) if n >= 2 => fib_mod(index, n) == 0,
        _ => false,
    }
}

/// Stage 3: deterministic verification by wheel trial division.
///
/// Values below 2 are never candidates and come back as
/// [`Verdict::FilteredOut`].
#[must_use]
pub fn verify(n: u64) -> Verdict {
    if n < 2 {
        return Verdict::FilteredOut;
    }
    match smallest_factor(n) {
        None => Verdict::Prime,
        Some(factor) => Verdict::CompositeConfirmed {
            candidate: n,
            factor,
        },
    }
}

/// Run all three stages in order, short-circuiting on the first failure.
///
/// # Example
/// ```
/// use fibprime_core::filter::{classify, Verdict};
/// assert_eq!(classify(997), Verdict::Prime);
/// assert_eq!(classify(1_387), Verdict::FilteredOut);
/// ```
#[must_use]
pub fn classify(n: u64) -> Verdict {
    if !fermat_test(n) || !fibonacci_test(n) {
        return Verdict::FilteredOut;
    }
    verify(n)
}

/// A candidate classifier the worker pool can run.
pub trait CandidateFilter: Send + Sync {
    /// Classify a single candidate.
    fn classify(&self, candidate: u64) -> Verdict;

    /// Name shown in logs and banners.
    fn name(&self) -> &str;
}

/// Fermat base 2, then Fibonacci, then trial division.
#[derive(Debug, Clone, Copy, Default)]
pub struct PswFilter;

impl PswFilter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CandidateFilter for PswFilter {
    fn classify(&self, candidate: u64) -> Verdict {
        classify(candidate)
    }

    fn name(&self) -> &str {
        "Fermat-2 + Fibonacci"
    }
}
