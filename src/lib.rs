//! Cross-crate integration tests for the fibprime workspace live in `tests/`.
