//! Error handling and exit codes.

use std::process::ExitCode;

use fibprime_core::constants::exit_codes;
use fibprime_core::SearchError;
use fibprime_orchestration::SearchOutcome;

/// Map a search error to its exit code.
#[must_use]
pub fn handle_error(err: &SearchError) -> i32 {
    match err {
        SearchError::Config(_) => exit_codes::ERROR_CONFIG,
        SearchError::QueueClosed(_) | SearchError::Spawn(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Map a finished search to its exit code.
#[must_use]
pub fn outcome_exit_code(outcome: &SearchOutcome) -> i32 {
    match outcome {
        SearchOutcome::Exhausted => exit_codes::SUCCESS,
        SearchOutcome::Counterexample { .. } => exit_codes::COUNTEREXAMPLE_FOUND,
        SearchOutcome::Interrupted => exit_codes::ERROR_CANCELED,
    }
}

/// Convert an exit code into a process status.
#[must_use]
pub fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(status_byte(code))
}

/// Codes outside `0..=255` become the generic failure code.
fn status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&SearchError::Config("bad".into())), 4);
        assert_eq!(handle_error(&SearchError::QueueClosed(3)), 1);
        assert_eq!(handle_error(&SearchError::Spawn("pool".into())), 1);
    }

    #[test]
    fn outcome_codes() {
        assert_eq!(outcome_exit_code(&SearchOutcome::Exhausted), 0);
        assert_eq!(
            outcome_exit_code(&SearchOutcome::Counterexample {
                candidate: 693,
                factor: 3
            }),
            3
        );
        assert_eq!(outcome_exit_code(&SearchOutcome::Interrupted), 130);
    }

    #[test]
    fn status_byte_conversion() {
        assert_eq!(status_byte(0), 0);
        assert_eq!(status_byte(130), 130);
        assert_eq!(status_byte(-1), 1);
        assert_eq!(status_byte(300), 1);
    }
}
