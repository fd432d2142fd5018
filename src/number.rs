//! Canonicalisation of numeric runs into decimal literals.
//!
//! The tokenizer hands over a maximal run of digits and separator
//! characters such as `1'000'000.5` or `20 000,4`. Separators are dropped;
//! the digits after the last separator form the fraction and everything
//! before it is the integer part, so every separator but the last is read
//! as a grouping mark. The canonical literal is then parsed with a fixed
//! format (`.` as decimal point, no grouping), independent of any locale.

use rust_decimal::Decimal;

use crate::separators::SeparatorSet;

/// Rewrite a numeric run into a canonical `integer.fraction` literal.
///
/// A run made only of separators is returned unchanged and fails to parse
/// later. A single digit group is the whole number unless the run starts
/// with a separator (`.5`), in which case it is the fraction.
///
/// # Examples
///
/// ```rust
/// use decalc::SeparatorSet;
/// use decalc::number::normalize_numeric_run;
///
/// let separators = SeparatorSet::default();
/// assert_eq!(normalize_numeric_run("1'000'000.5", &separators), "1000000.5");
/// assert_eq!(normalize_numeric_run("20 000,4", &separators), "20000.4");
/// assert_eq!(normalize_numeric_run("42", &separators), "42");
/// ```
#[must_use]
pub fn normalize_numeric_run(run: &str, separators: &SeparatorSet) -> String {
    let segments: Vec<&str> = run
        .split(|c: char| separators.contains(c))
        .filter(|segment| !segment.is_empty())
        .collect();
    let leading_separator = run.chars().next().is_some_and(|c| separators.contains(c));
    match segments.as_slice() {
        [] => run.to_string(),
        [only] if leading_separator => format!("0.{only}"),
        [only] => (*only).to_string(),
        [integer @ .., fraction] => format!("{}.{fraction}", integer.concat()),
    }
}

/// Normalise `run` and parse it as an exact decimal.
///
/// # Errors
/// Returns the [`rust_decimal::Error`] raised when the canonical literal is
/// not a number or cannot be represented without rounding.
pub fn parse_numeric_run(
    run: &str,
    separators: &SeparatorSet,
) -> Result<Decimal, rust_decimal::Error> {
    let canonical = normalize_numeric_run(run, separators);
    Decimal::from_str_exact(&canonical)
}
