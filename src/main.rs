//! CLI entry point for the `decalc` tool.
//!
//! Evaluates each command-line argument as an expression, or each
//! non-empty line of standard input when no arguments are given. Results go
//! to stdout; errors go to stderr with a caret under the offending
//! character.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use decalc::{SeparatorSet, evaluate_with};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let separators = SeparatorSet::from_env();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let outcome = if args.is_empty() {
        run_lines(io::stdin().lock(), &separators, &mut stdout, &mut stderr)
    } else {
        run_all(args.iter().map(String::as_str), &separators, &mut stdout, &mut stderr)
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            let _ = writeln!(stderr, "decalc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_lines(
    input: impl BufRead,
    separators: &SeparatorSet,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= report(&line, separators, out, err)?;
    }
    Ok(all_ok)
}

fn run_all<'a>(
    exprs: impl Iterator<Item = &'a str>,
    separators: &SeparatorSet,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_ok = true;
    for expr in exprs {
        all_ok &= report(expr, separators, out, err)?;
    }
    Ok(all_ok)
}

/// Evaluate one expression and write its outcome. Returns whether it
/// evaluated.
fn report(
    expr: &str,
    separators: &SeparatorSet,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match evaluate_with(expr, separators) {
        Ok(value) => {
            writeln!(out, "{}", value.normalize())?;
            Ok(true)
        }
        Err(error) => {
            writeln!(err, "error: {error}")?;
            writeln!(err, "{}", error.caret_diagnostic(expr))?;
            Ok(false)
        }
    }
}
