//! Tests for the recursive-descent evaluator.

mod errors;
