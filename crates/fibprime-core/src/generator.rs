//! Candidate generation over the residue classes ±2 (mod 5).
//!
//! Odd integers congruent to 2 or 3 modulo 5 are exactly the integers ending
//! in 7 or 3. Starting from the first one at or above the lower bound, the
//! sequence alternates +4 (from …3 to …7) and +6 (from …7 to the next …3).

/// Lazy, strictly increasing iterator over the candidates in `[start, end)`.
///
/// # Example
/// ```
/// use fibprime_core::generator::CandidateRange;
/// let first: Vec<u64> = CandidateRange::new(0, 40).collect();
/// assert_eq!(first, [3, 7, 13, 17, 23, 27, 33, 37]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateRange {
    next: Option<u64>,
    end: u64,
}

impl CandidateRange {
    /// Create the candidate sequence for `[start, end)`.
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        let next = align_up(start).filter(|&n| n < end);
        Self { next, end }
    }
}

/// Step from a candidate to its successor: +4 from …3, +6 from …7.
#[inline]
#[must_use]
pub fn step_after(candidate: u64) -> u64 {
    if candidate % 10 == 3 {
        4
    } else {
        6
    }
}

/// Whether `n` belongs to the searched residue classes.
#[inline]
#[must_use]
pub fn is_candidate(n: u64) -> bool {
    matches!(n % 10, 3 | 7)
}

/// First candidate `>= n`, or `None` if it would not fit in a `u64`.
#[must_use]
pub fn align_up(n: u64) -> Option<u64> {
    let offset = match n % 10 {
        0 => 3,
        1 => 2,
        2 => 1,
        3 | 7 => 0,
        d @ 4..=6 => 7 - d,
        d => 13 - d,
    };
    n.checked_add(offset)
}

impl Iterator for CandidateRange {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = current
            .checked_add(step_after(current))
            .filter(|&n| n < self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(n) => {
                let span = (self.end - n) / 10 * 2 + 2;
                let upper = usize::try_from(span).ok();
                (1, upper)
            }
        }
    }
}

impl std::iter::FusedIterator for CandidateRange {}
