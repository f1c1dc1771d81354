//! Error handling and exit codes.

use numseq_core::{exit_codes, NumError};

/// Application-level failures beyond the library's domain errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Variants of one operation produced different results.
    #[error("{operation}: variants disagree ({detail})")]
    Mismatch {
        operation: &'static str,
        detail: String,
    },
}

/// Map an error to the process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(NumError::InvalidArgument { .. }) = err.downcast_ref::<NumError>() {
        exit_codes::ERROR_INVALID_ARGUMENT
    } else if let Some(AppError::Mismatch { .. }) = err.downcast_ref::<AppError>() {
        exit_codes::ERROR_MISMATCH
    } else {
        exit_codes::ERROR_GENERIC
    }
}
