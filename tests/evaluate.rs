//! Integration tests for `evaluate_with`: results and located errors.

mod test_util;

use decalc::{
    EvaluationErrorKind, LocaleSeparators, ParserErrorKind, SeparatorSet, TokenizerErrorKind,
    evaluate_with,
};
use rstest::rstest;
use test_util::{dec, eval, eval_err};

#[rstest]
#[case("3+4", "7")]
#[case("3+(4*2)-1", "10")]
#[case("-3+-5", "-8")]
#[case("-3+-5*2", "-13")]
#[case("12/3/2", "2")]
#[case("0.1 + 0.2", "0.3")]
#[case("1'000'000.5 + 20 000,4", "1020000.9")]
#[case(" ( 2 ) ", "2")]
#[case("+-+4", "-4")]
#[case("1.25 * 4", "5")]
#[case("\t7\n/\n2", "3.5")]
fn evaluates_expressions(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(eval(src), dec(expected));
}

/// Additive chains group to the right: `10-3-2` is `10-(3-2)`.
#[rstest]
#[case("10-3-2", "9")]
#[case("1-2+3", "-4")]
#[case("(10-3)-2", "5")]
fn additive_chains_group_to_the_right(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(eval(src), dec(expected));
}

#[rstest]
#[case::empty("", ParserErrorKind::UnexpectedEndOfExpression, 0)]
#[case::blank("   ", ParserErrorKind::UnexpectedEndOfExpression, 3)]
#[case::unclosed("(3+4", ParserErrorKind::EndParenthesisExpected, 4)]
#[case::dangling_operator("3 +", ParserErrorKind::ExpressionAfterOperatorExpected, 3)]
#[case::dangling_operator_with_space("3 + ", ParserErrorKind::ExpressionAfterOperatorExpected, 4)]
#[case::missing_operator("(1) (2)", ParserErrorKind::OperatorExpected, 4)]
#[case::stray_close("4 ) * 2", ParserErrorKind::UnexpectedToken(decalc::Token::RParen), 2)]
#[case::division_by_zero("6 / (3 - 3)", ParserErrorKind::DivisionByZero, 2)]
#[case::leading_operator("* 2", ParserErrorKind::UnaryOperatorExpected(decalc::Token::Multiply), 0)]
fn parser_errors_are_located(
    #[case] src: &str,
    #[case] kind: ParserErrorKind,
    #[case] offset: usize,
) {
    let err = eval_err(src);
    assert_eq!(err.parser_kind(), Some(&kind), "{src:?}: {err}");
    assert_eq!(err.offset, offset, "{src:?}: {err}");
}

#[rstest]
#[case("3 + a", TokenizerErrorKind::InvalidCharacter('a'), 4)]
#[case("1 + (.)", TokenizerErrorKind::InvalidDecimal(".".to_string()), 5)]
#[case("99999999999999999999999999999999", TokenizerErrorKind::InvalidDecimal("99999999999999999999999999999999".to_string()), 0)]
fn tokenizer_errors_keep_their_offset(
    #[case] src: &str,
    #[case] kind: TokenizerErrorKind,
    #[case] offset: usize,
) {
    let err = eval_err(src);
    assert!(matches!(err.kind, EvaluationErrorKind::Tokenizer(_)));
    assert_eq!(err.tokenizer_kind(), Some(&kind), "{src:?}: {err}");
    assert_eq!(err.offset, offset);
}

#[test]
fn errors_render_description_and_offset() {
    let err = eval_err("(3+4");
    assert_eq!(err.to_string(), "')' expected at offset 4");
    assert_eq!(err.caret_diagnostic("(3+4"), "(3+4\n    ^");
}

#[test]
fn caret_keeps_tabs_aligned() {
    let src = "\t1 + b";
    let err = eval_err(src);
    assert_eq!(err.to_string(), "invalid character 'b' at offset 5");
    assert_eq!(err.caret_diagnostic(src), "\t1 + b\n\t    ^");
}

#[test]
fn locale_separators_are_passed_explicitly() {
    let arabic = LocaleSeparators::for_locale("ar_EG.UTF-8")
        .map_or_else(SeparatorSet::default, SeparatorSet::from);
    let value = evaluate_with("1\u{066C}000\u{066B}5 * 2", &arabic)
        .unwrap_or_else(|e| panic!("evaluation failed: {e}"));
    assert_eq!(value, dec("2001"));
    assert!(evaluate_with("1\u{066B}5", &SeparatorSet::default()).is_err());
}
