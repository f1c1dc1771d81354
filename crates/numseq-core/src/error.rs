//! Error type shared by every numeric operation.

/// Error type for numeric operations.
///
/// Every operation is total on its declared domain; the only failure is an
/// argument outside that domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    /// An argument lies outside the operation's domain.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}

impl NumError {
    pub(crate) fn invalid(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

/// Reject negative integers, returning the value as `u64` otherwise.
pub(crate) fn non_negative(operation: &'static str, n: i64) -> Result<u64, NumError> {
    u64::try_from(n).map_err(|_| NumError::invalid(operation, format!("{n} is negative")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = NumError::invalid("factorial", "-1 is negative");
        assert_eq!(
            err.to_string(),
            "invalid argument to factorial: -1 is negative"
        );
    }

    #[test]
    fn non_negative_accepts_zero_and_max() {
        assert_eq!(non_negative("op", 0), Ok(0));
        assert_eq!(non_negative("op", i64::MAX), Ok(i64::MAX as u64));
    }

    #[test]
    fn non_negative_rejects_min() {
        let err = non_negative("op", i64::MIN).unwrap_err();
        assert!(matches!(err, NumError::InvalidArgument { operation: "op", .. }));
    }
}
