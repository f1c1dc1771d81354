//! Application entry point and dispatch.

use std::fmt::Debug;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use num_bigint::BigUint;

use numseq_cli::completion::generate_completion;
use numseq_cli::output::write_to_file;
use numseq_cli::presenter::{CLIResultPresenter, JsonPresenter};
use numseq_cli::{Report, ResultPresenter};
use numseq_core::fastdoubling::thread_memo_stats;
use numseq_core::{
    coprime_pairs, fibonacci, iterative_factorial, iterative_gcd, iterative_xgcd,
    polygonal_number, polygonal_numbers, product_factorial, rationals,
    recursive_factorial, recursive_gcd, recursive_xgcd, Bezout, DefaultFactory, NumError,
    PrimeBounds, SequenceFactory, Term,
};

use crate::config::{AppConfig, Command, EuclidMethod, FactorialMethod};
use crate::errors::AppError;

type FactorialFn = fn(i64) -> Result<BigUint, NumError>;
type GcdFn = fn(&BigUint, &BigUint) -> BigUint;
type XgcdFn = fn(&BigUint, &BigUint) -> Bezout;

static FACTORIAL_VARIANTS: [(&str, FactorialFn); 3] = [
    ("recursive", recursive_factorial),
    ("iterative", iterative_factorial),
    ("product", product_factorial),
];

static GCD_VARIANTS: [(&str, GcdFn); 2] =
    [("recursive", recursive_gcd), ("iterative", iterative_gcd)];

static XGCD_VARIANTS: [(&str, XgcdFn); 2] =
    [("recursive", recursive_xgcd), ("iterative", iterative_xgcd)];

/// Run the application, writing to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Run the application, writing the presentation to `out`.
pub fn run_with_output(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    // Handle shell completion
    if let Command::Completion { shell } = config.command {
        let mut cmd = <AppConfig as CommandFactory>::command();
        generate_completion(&mut cmd, shell, out);
        return Ok(());
    }

    let report = build_report(config)?;
    presenter(config).present(&report, out)?;

    if let Some(ref path) = config.output {
        write_to_file(path, &report.values)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

/// Presenter selected by the output flags.
#[must_use]
pub fn presenter(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonPresenter)
    } else {
        Box::new(CLIResultPresenter::new(
            config.verbose,
            config.quiet,
            config.details,
        ))
    }
}

/// Compute the requested operation into a report.
pub fn build_report(config: &AppConfig) -> Result<Report> {
    let start = Instant::now();
    let take = config.take;
    let mut report = match &config.command {
        Command::Factorial { n, method } => factorial_report(*n, *method)?,
        Command::Gcd { m, n, method } => gcd_report(m, n, *method)?,
        Command::Xgcd { m, n, method } => xgcd_report(m, n, *method)?,
        Command::Fib { n } => fib_report(*n)?,
        Command::Primes { start, stop } => primes_report(*start, *stop, take),
        Command::Polygonal { r, index } => polygonal_report(*r, *index, take)?,
        Command::Rationals => sequence_report(
            "rationals",
            format!("first {take}"),
            rationals().take(take).map(|q| q.to_string()),
        ),
        Command::Coprimes { n } => sequence_report(
            "coprimes",
            format!("n={n}"),
            coprime_pairs(*n).map(|p| Term::from(p).to_string()),
        ),
        Command::Seq { name } => {
            let factory = DefaultFactory::new();
            let seq = factory.create(name)?;
            sequence_report(
                "seq",
                format!("{name}, first {take}"),
                seq.take(take).map(|term| term.to_string()),
            )
            .with_detail("available", factory.available().join(", "))
        }
        Command::Completion { .. } => bail!("completion does not produce a report"),
    };
    report.duration = start.elapsed();
    tracing::debug!(
        operation = %report.operation,
        terms = report.values.len(),
        elapsed = ?report.duration,
        "operation complete"
    );
    Ok(report)
}

fn sequence_report(
    operation: &str,
    input: String,
    values: impl Iterator<Item = String>,
) -> Report {
    Report::new(operation, input, values.collect(), Duration::ZERO)
}

/// Agree on one value across variants, or report which ones disagree.
fn cross_check<T: PartialEq + Debug>(
    operation: &'static str,
    results: Vec<(&'static str, T)>,
) -> Result<T> {
    let mut iter = results.into_iter();
    let Some((first_name, first)) = iter.next() else {
        bail!("{operation}: no variant selected");
    };
    for (name, value) in iter {
        if value != first {
            return Err(AppError::Mismatch {
                operation,
                detail: format!("{first_name} = {first:?}, {name} = {value:?}"),
            }
            .into());
        }
    }
    Ok(first)
}

fn method_names<F>(variants: &[(&str, F)]) -> String {
    variants
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn factorial_report(n: i64, method: FactorialMethod) -> Result<Report> {
    let variants = match method {
        FactorialMethod::Recursive => &FACTORIAL_VARIANTS[..1],
        FactorialMethod::Iterative => &FACTORIAL_VARIANTS[1..2],
        FactorialMethod::Product => &FACTORIAL_VARIANTS[2..],
        FactorialMethod::All => &FACTORIAL_VARIANTS[..],
    };
    let results = variants
        .iter()
        .map(|(name, f)| Ok((*name, f(n)?)))
        .collect::<Result<Vec<_>, NumError>>()?;
    let value = cross_check("factorial", results)?;
    Ok(Report::new(
        "factorial",
        format!("n={n}"),
        vec![value.to_string()],
        Duration::ZERO,
    )
    .with_detail("method", method_names(variants))
    .with_detail("bits", value.bits()))
}

fn euclid_variants<'a, F>(
    variants: &'a [(&'static str, F)],
    method: EuclidMethod,
) -> &'a [(&'static str, F)] {
    match method {
        EuclidMethod::Recursive => &variants[..1],
        EuclidMethod::Iterative => &variants[1..],
        EuclidMethod::All => variants,
    }
}

fn gcd_report(m: &BigUint, n: &BigUint, method: EuclidMethod) -> Result<Report> {
    let variants = euclid_variants(&GCD_VARIANTS, method);
    let results = variants.iter().map(|(name, f)| (*name, f(m, n))).collect();
    let value = cross_check("gcd", results)?;
    Ok(Report::new(
        "gcd",
        format!("m={m}, n={n}"),
        vec![value.to_string()],
        Duration::ZERO,
    )
    .with_detail("method", method_names(variants)))
}

fn xgcd_report(m: &BigUint, n: &BigUint, method: EuclidMethod) -> Result<Report> {
    let variants = euclid_variants(&XGCD_VARIANTS, method);
    let triples: Vec<(&'static str, Bezout)> =
        variants.iter().map(|(name, f)| (*name, f(m, n))).collect();

    // Variants may pick different coefficients; only the identity and gcd must agree.
    if let Some((name, _)) = triples.iter().find(|(_, t)| !t.satisfies(m, n)) {
        return Err(AppError::Mismatch {
            operation: "xgcd",
            detail: format!("{name} coefficients violate x*m + y*n = gcd"),
        }
        .into());
    }
    let gcds = triples.iter().map(|(name, t)| (*name, t.gcd.clone())).collect();
    cross_check("xgcd", gcds)?;

    let Some((_, triple)) = triples.into_iter().next() else {
        bail!("xgcd: no variant selected");
    };
    Ok(Report::new(
        "xgcd",
        format!("m={m}, n={n}"),
        vec![triple.x.to_string(), triple.y.to_string(), triple.gcd.to_string()],
        Duration::ZERO,
    )
    .with_detail("method", method_names(variants))
    .with_detail("identity", format!("({})*{m} + ({})*{n} = {}", triple.x, triple.y, triple.gcd)))
}

fn fib_report(n: i64) -> Result<Report> {
    let value = fibonacci(n)?;
    let stats = thread_memo_stats();
    Ok(Report::new(
        "fibonacci",
        format!("n={n}"),
        vec![value.to_string()],
        Duration::ZERO,
    )
    .with_detail("bits", value.bits())
    .with_detail("memo entries", stats.entries)
    .with_detail("memo hits", stats.hits)
    .with_detail("memo misses", stats.misses))
}

fn primes_report(start: Option<u64>, stop: Option<u64>, take: usize) -> Report {
    let bounds = PrimeBounds::from_options(start, stop);
    let (input, values): (String, Vec<String>) = match bounds {
        PrimeBounds::Unbounded => (
            format!("unbounded, first {take}"),
            bounds.primes().take(take).map(|p| p.to_string()).collect(),
        ),
        PrimeBounds::Until(n) => (
            format!("p <= {n}"),
            bounds.primes().map(|p| p.to_string()).collect(),
        ),
        PrimeBounds::Between(m, n) => (
            format!("{m} <= p <= {n}"),
            bounds.primes().map(|p| p.to_string()).collect(),
        ),
    };
    let count = values.len();
    Report::new("primes", input, values, Duration::ZERO)
        .with_detail("algorithm", algorithm_name(bounds))
        .with_detail("count", count)
}

fn algorithm_name(bounds: PrimeBounds) -> &'static str {
    match bounds {
        PrimeBounds::Unbounded => "incremental sieve",
        PrimeBounds::Until(_) => "bounded sieve",
        PrimeBounds::Between(..) => "segmented sieve",
    }
}

fn polygonal_report(r: i64, index: Option<i64>, take: usize) -> Result<Report> {
    let report = if let Some(n) = index {
        Report::new(
            "polygonal",
            format!("r={r}, n={n}"),
            vec![polygonal_number(n, r)?.to_string()],
            Duration::ZERO,
        )
    } else {
        let seq = polygonal_numbers(r)?;
        sequence_report(
            "polygonal",
            format!("r={r}, first {take}"),
            seq.take(take).map(|t| t.to_string()),
        )
    };
    Ok(report.with_detail("sides", r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("numseq").chain(args.iter().copied())).unwrap()
    }

    fn values(args: &[&str]) -> Vec<String> {
        build_report(&config(args)).unwrap().values
    }

    #[test]
    fn factorial_all_methods_agree() {
        assert_eq!(values(&["factorial", "20", "--method", "all"]), ["2432902008176640000"]);
    }

    #[test]
    fn factorial_negative_is_invalid_argument() {
        let err = build_report(&config(&["factorial", "-3"])).unwrap_err();
        assert!(err.downcast_ref::<NumError>().is_some());
    }

    #[test]
    fn gcd_and_xgcd() {
        assert_eq!(values(&["gcd", "42", "91", "--method", "all"]), ["7"]);
        let triple = values(&["xgcd", "240", "46", "--method", "all"]);
        assert_eq!(triple[2], "2");
        let x: i64 = triple[0].parse().unwrap();
        let y: i64 = triple[1].parse().unwrap();
        assert_eq!(x * 240 + y * 46, 2);
    }

    #[test]
    fn primes_dispatch() {
        assert_eq!(values(&["primes", "--stop", "10"]), ["2", "3", "5", "7"]);
        assert_eq!(values(&["primes", "--start", "10"]), ["2", "3", "5", "7"]);
        assert_eq!(values(&["primes", "--start", "10", "--stop", "30"]).len(), 6);
        assert_eq!(values(&["primes", "--take", "5"]), ["2", "3", "5", "7", "11"]);
        assert!(values(&["primes", "--start", "30", "--stop", "10"]).is_empty());
    }

    #[test]
    fn polygonal_term_and_sequence() {
        assert_eq!(values(&["polygonal", "5", "--index", "4"]), ["22"]);
        assert_eq!(values(&["polygonal", "6", "--take", "4"]), ["0", "1", "6", "15"]);
        assert!(build_report(&config(&["polygonal", "2"])).is_err());
    }

    #[test]
    fn rationals_and_coprimes() {
        assert_eq!(values(&["rationals", "--take", "4"]), ["1", "1/2", "2", "1/3"]);
        let pairs = values(&["coprimes", "10"]);
        assert_eq!(pairs.len(), 32);
        assert_eq!(pairs[..2], ["(1, 1)", "(2, 1)"]);
    }

    #[test]
    fn seq_by_name() {
        assert_eq!(values(&["seq", "fib", "--take", "6"]), ["0", "1", "1", "2", "3", "5"]);
        assert!(build_report(&config(&["seq", "squares"])).is_err());
        assert_eq!(
            values(&["seq", "coprimes", "--take", "3"]),
            ["(1, 1)", "(2, 1)", "(3, 2)"]
        );
    }

    #[test]
    fn cross_check_reports_mismatch() {
        let err = cross_check("demo", vec![("a", 1), ("b", 2)]).unwrap_err();
        let mismatch = err.downcast_ref::<AppError>().unwrap();
        assert!(mismatch.to_string().contains("a = 1, b = 2"));
        assert_eq!(cross_check("demo", vec![("a", 1), ("b", 1)]).unwrap(), 1);
    }

    #[test]
    fn completion_writes_script() {
        let mut buf = Vec::new();
        run_with_output(&config(&["completion", "bash"]), &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("numseq"));
    }

    #[test]
    fn json_output_is_parseable() {
        let mut buf = Vec::new();
        run_with_output(&config(&["--json", "fib", "10"]), &mut buf).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(doc["values"][0], "55");
        assert_eq!(doc["operation"], "fibonacci");
    }
}
