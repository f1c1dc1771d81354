//! Constants shared across the workspace.

/// Default number of terms taken from an infinite sequence by the CLI.
pub const DEFAULT_TAKE: usize = 20;

/// Ceiling on components for the registry's finite `coprimes` sequence.
pub const DEFAULT_COPRIME_LIMIT: u64 = 100;

/// Side counts of the named polygonal specialisations.
pub const TRIANGULAR_SIDES: u64 = 3;
/// Pentagonal numbers.
pub const PENTAGONAL_SIDES: u64 = 5;
/// Hexagonal numbers.
pub const HEXAGONAL_SIDES: u64 = 6;

/// Smallest side count for which polygonal numbers are defined.
pub const MIN_POLYGON_SIDES: i64 = 3;

/// Exit codes for the `numseq` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Variants of the same operation disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// An argument was outside the operation's domain.
    pub const ERROR_INVALID_ARGUMENT: i32 = 4;
}
