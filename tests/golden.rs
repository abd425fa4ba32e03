//! Golden file integration tests.
//!
//! Reads tests/testdata/reference.json and checks every filter stage against
//! independently computed results for primes, Fermat pseudoprimes,
//! Fibonacci pseudoprimes and ordinary composites.

use serde::Deserialize;

use fibprime_core::filter::{classify, fermat_test, fibonacci_test, verify, Verdict};
use fibprime_core::generator::is_candidate;
use fibprime_core::wheel::smallest_factor;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    n: u64,
    kind: Kind,
    residue_mod_5: u64,
    fermat: bool,
    fibonacci: bool,
    smallest_factor: Option<u64>,
    verdict: ExpectedVerdict,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
enum Kind {
    Prime,
    FermatPseudoprime,
    FibonacciPseudoprime,
    Composite,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
enum ExpectedVerdict {
    Prime,
    FilteredOut,
    CompositeConfirmed,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/reference.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn cases_of(kind: Kind) -> Vec<GoldenCase> {
    load_golden_data()
        .cases
        .into_iter()
        .filter(|c| c.kind == kind)
        .collect()
}

// ---------------------------------------------------------------------------
// Stage-by-stage checks
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_well_formed() {
    let data = load_golden_data();
    assert!(!data.cases.is_empty());
    for case in &data.cases {
        assert_eq!(case.n % 5, case.residue_mod_5, "n={}", case.n);
        let is_prime = case.smallest_factor.is_none();
        assert_eq!(is_prime, case.kind == Kind::Prime, "n={}", case.n);
    }
}

#[test]
fn golden_fermat_stage() {
    for case in load_golden_data().cases {
        assert_eq!(fermat_test(case.n), case.fermat, "fermat_test({})", case.n);
    }
}

#[test]
fn golden_fibonacci_stage() {
    for case in load_golden_data().cases {
        assert_eq!(
            fibonacci_test(case.n),
            case.fibonacci,
            "fibonacci_test({})",
            case.n
        );
    }
}

#[test]
fn golden_trial_division_stage() {
    for case in load_golden_data().cases {
        assert_eq!(
            smallest_factor(case.n),
            case.smallest_factor,
            "smallest_factor({})",
            case.n
        );
        let expected = match case.smallest_factor {
            None => Verdict::Prime,
            Some(factor) => Verdict::CompositeConfirmed {
                candidate: case.n,
                factor,
            },
        };
        assert_eq!(verify(case.n), expected);
    }
}

#[test]
fn golden_classification() {
    for case in load_golden_data().cases {
        let got = match classify(case.n) {
            Verdict::Prime => ExpectedVerdict::Prime,
            Verdict::FilteredOut => ExpectedVerdict::FilteredOut,
            Verdict::CompositeConfirmed { .. } => ExpectedVerdict::CompositeConfirmed,
        };
        assert_eq!(got, case.verdict, "classify({})", case.n);
    }
}

// ---------------------------------------------------------------------------
// Per-kind properties
// ---------------------------------------------------------------------------

#[test]
fn golden_primes_in_residue_class_pass_both_stages() {
    for case in cases_of(Kind::Prime) {
        let in_class = matches!(case.residue_mod_5, 2 | 3);
        assert_eq!(case.fibonacci, in_class, "n={}", case.n);
        assert!(case.fermat || case.n == 2, "n={}", case.n);
    }
}

#[test]
fn golden_fermat_pseudoprimes_fail_fibonacci() {
    for case in cases_of(Kind::FermatPseudoprime) {
        assert!(fermat_test(case.n), "n={}", case.n);
        assert!(!fibonacci_test(case.n), "n={}", case.n);
    }
}

#[test]
fn golden_fibonacci_pseudoprimes_fail_fermat() {
    let cases = cases_of(Kind::FibonacciPseudoprime);
    assert!(cases.iter().any(|c| c.n == 5_777));
    for case in cases {
        assert!(is_candidate(case.n), "n={} is not a generated candidate", case.n);
        assert!(fibonacci_test(case.n), "n={}", case.n);
        assert!(!fermat_test(case.n), "n={}", case.n);
        assert_eq!(classify(case.n), Verdict::FilteredOut);
    }
}
