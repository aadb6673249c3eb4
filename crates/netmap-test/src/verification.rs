//! Verification helpers for validation results

use thiserror::Error;
use vmimport_netmap::{FailureCategory, ValidationFailure};

/// Verification error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Expected {expected} failures, got {actual}: {failures:?}")]
    CountMismatch {
        expected: usize,
        actual: usize,
        failures: Vec<String>,
    },

    #[error("Category mismatch at index {index}: expected '{expected}', got '{actual}'")]
    CategoryMismatch {
        index: usize,
        expected: FailureCategory,
        actual: FailureCategory,
    },

    #[error("No failure message mentions '{needle}'")]
    MessageNotFound { needle: String },
}

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerificationError>;

/// Verify the exact, ordered categories of a failure sequence
pub fn expect_categories(
    failures: &[ValidationFailure],
    expected: &[FailureCategory],
) -> VerifyResult<()> {
    if failures.len() != expected.len() {
        return Err(VerificationError::CountMismatch {
            expected: expected.len(),
            actual: failures.len(),
            failures: failures.iter().map(|f| f.to_string()).collect(),
        });
    }
    for (index, (failure, expected)) in failures.iter().zip(expected).enumerate() {
        if failure.category != *expected {
            return Err(VerificationError::CategoryMismatch {
                index,
                expected: *expected,
                actual: failure.category,
            });
        }
    }
    Ok(())
}

/// Verify there are no failures
pub fn expect_valid(failures: &[ValidationFailure]) -> VerifyResult<()> {
    expect_categories(failures, &[])
}

/// Verify exactly one failure of `category`
pub fn expect_single(failures: &[ValidationFailure], category: FailureCategory) -> VerifyResult<()> {
    expect_categories(failures, &[category])
}

/// Verify some failure message contains `needle`
pub fn expect_message_contains(failures: &[ValidationFailure], needle: &str) -> VerifyResult<()> {
    if failures.iter().any(|f| f.message.contains(needle)) {
        Ok(())
    } else {
        Err(VerificationError::MessageNotFound {
            needle: needle.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_categories() {
        let failures = vec![ValidationFailure::new(FailureCategory::TypeInvalid, "x")];
        assert_eq!(expect_single(&failures, FailureCategory::TypeInvalid), Ok(()));
        assert!(matches!(
            expect_valid(&failures),
            Err(VerificationError::CountMismatch { expected: 0, actual: 1, .. })
        ));
        assert!(matches!(
            expect_single(&failures, FailureCategory::ConfigInvalid),
            Err(VerificationError::CategoryMismatch { index: 0, .. })
        ));
        assert!(expect_message_contains(&failures, "x").is_ok());
        assert!(expect_message_contains(&failures, "y").is_err());
    }
}
