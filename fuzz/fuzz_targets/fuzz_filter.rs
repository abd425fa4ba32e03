#![no_main]

use libfuzzer_sys::fuzz_target;

use fibprime_core::filter::{classify, fermat_test, fibonacci_test, Verdict};
use fibprime_core::wheel::smallest_factor;

fn naive_fermat(n: u64) -> bool {
    if n < 3 {
        return false;
    }
    let mut acc = 1u64;
    for _ in 0..n - 1 {
        acc = acc * 2 % n;
    }
    acc == 1
}

fn naive_fibonacci(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..=n {
        (a, b) = (b, (a + b) % n);
    }
    a == 0
}

fn naive_factor(n: u64) -> Option<u64> {
    (2..n).take_while(|d| d * d <= n).find(|d| n % d == 0)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Keep n small enough for the linear-time oracles.
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % (1 << 18));

    let fermat = naive_fermat(n);
    let fibonacci = naive_fibonacci(n);
    let factor = if n < 2 { None } else { naive_factor(n) };

    assert_eq!(fermat_test(n), fermat, "fermat_test({n})");
    assert_eq!(fibonacci_test(n), fibonacci, "fibonacci_test({n})");
    assert_eq!(smallest_factor(n), factor, "smallest_factor({n})");

    let expected = match (fermat && fibonacci, factor) {
        (false, _) => Verdict::FilteredOut,
        (true, None) => Verdict::Prime,
        (true, Some(factor)) => Verdict::CompositeConfirmed { candidate: n, factor },
    };
    assert_eq!(classify(n), expected, "classify({n})");
});
