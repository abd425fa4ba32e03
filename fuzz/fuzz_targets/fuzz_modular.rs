#![no_main]

use libfuzzer_sys::fuzz_target;

use fibprime_core::modular::{mul_mod, pow_mod};

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let word = |i: usize| {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&data[i * 8..i * 8 + 8]);
        u64::from_le_bytes(buf)
    };
    let (a, b, m) = (word(0), word(1), word(2));
    if m == 0 {
        return;
    }

    let expected = (u128::from(a) * u128::from(b) % u128::from(m)) as u64;
    assert_eq!(mul_mod(a, b, m), expected);

    // Square-and-multiply against a short linear product.
    let exp = b % 64;
    let mut acc = 1 % m;
    for _ in 0..exp {
        acc = mul_mod(acc, a % m, m);
    }
    assert_eq!(pow_mod(a, exp, m), acc);
});
