//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigUint;
use numseq_core::DEFAULT_TAKE;

/// NumSeq — exact number theory and lazy integer sequences.
#[derive(Parser, Debug)]
#[command(name = "numseq", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (full values, debug logging).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Emit a JSON document instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Also write the values to this file, one per line.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Number of terms to take from an unbounded sequence.
    #[arg(long, global = true, default_value_t = DEFAULT_TAKE, env = "NUMSEQ_TAKE")]
    pub take: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute n! exactly.
    #[command(allow_negative_numbers = true)]
    Factorial {
        /// The argument n.
        n: i64,
        /// Variant to run.
        #[arg(long, value_enum, default_value_t = FactorialMethod::Iterative)]
        method: FactorialMethod,
    },

    /// Greatest common divisor of two non-negative integers.
    Gcd {
        m: BigUint,
        n: BigUint,
        /// Variant to run.
        #[arg(long, value_enum, default_value_t = EuclidMethod::Iterative)]
        method: EuclidMethod,
    },

    /// Bézout coefficients x, y with x*m + y*n = gcd(m, n).
    Xgcd {
        m: BigUint,
        n: BigUint,
        /// Variant to run.
        #[arg(long, value_enum, default_value_t = EuclidMethod::Iterative)]
        method: EuclidMethod,
    },

    /// The n-th Fibonacci number by fast doubling.
    #[command(allow_negative_numbers = true)]
    Fib {
        /// Index n (F(0) = 0).
        n: i64,
    },

    /// Primes: unbounded, up to a bound, or within a window.
    Primes {
        /// Lower bound (or the upper bound when given alone).
        #[arg(long)]
        start: Option<u64>,
        /// Upper bound (inclusive).
        #[arg(long)]
        stop: Option<u64>,
    },

    /// Polygonal numbers with r sides: one term or the sequence.
    #[command(allow_negative_numbers = true)]
    Polygonal {
        /// Number of sides (at least 3).
        r: i64,
        /// Compute only the term with this index.
        #[arg(long)]
        index: Option<i64>,
    },

    /// Every positive rational in Calkin–Wilf order.
    Rationals,

    /// Coprime pairs from the tree rooted at (1, 1), components at most n.
    Coprimes {
        /// Ceiling on the generated components.
        n: u64,
    },

    /// A named sequence from the registry.
    Seq {
        /// Sequence name (fibonacci, primes, triangular, ...).
        name: String,
    },

    /// Generate a shell completion script.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Factorial variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FactorialMethod {
    Recursive,
    Iterative,
    Product,
    /// Run every variant and cross-check.
    All,
}

/// Euclidean algorithm variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EuclidMethod {
    Recursive,
    Iterative,
    /// Run both variants and cross-check.
    All,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default tracing directive for the subscriber.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("numseq").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn negative_factorial_argument_parses() {
        let config = parse(&["factorial", "-5"]);
        assert!(matches!(
            config.command,
            Command::Factorial {
                n: -5,
                method: FactorialMethod::Iterative
            }
        ));
    }

    #[test]
    fn big_gcd_arguments() {
        let config = parse(&["gcd", "10000000000000000000000", "4096", "--method", "all"]);
        match config.command {
            Command::Gcd { m, n, method } => {
                assert_eq!(m, BigUint::from(10u32).pow(22));
                assert_eq!(n, BigUint::from(4096u32));
                assert_eq!(method, EuclidMethod::All);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["primes", "--stop", "30", "-q", "--take", "5"]);
        assert!(config.quiet);
        assert_eq!(config.take, 5);
        assert!(matches!(
            config.command,
            Command::Primes {
                start: None,
                stop: Some(30)
            }
        ));
    }

    #[test]
    fn log_level_follows_verbose() {
        assert_eq!(parse(&["rationals"]).log_level(), tracing::Level::WARN);
        assert_eq!(parse(&["-v", "rationals"]).log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unknown_method_rejected() {
        let result = AppConfig::try_parse_from(["numseq", "factorial", "5", "--method", "magic"]);
        assert!(result.is_err());
    }
}
