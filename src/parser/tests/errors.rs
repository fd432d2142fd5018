//! Parser failures and the token index they report.

use crate::error::{ParserError, ParserErrorKind};
use crate::parser::parse;
use crate::test_util::num;
use crate::token::Token;
use rstest::rstest;

#[rstest]
#[case::empty(vec![], ParserErrorKind::UnexpectedEndOfExpression, 0)]
#[case::dangling_plus(vec![num("3"), Token::Plus], ParserErrorKind::ExpressionAfterOperatorExpected, 2)]
#[case::lone_minus(vec![Token::Minus], ParserErrorKind::ExpressionAfterOperatorExpected, 1)]
#[case::unclosed_group(
    vec![Token::LParen, num("3"), Token::Plus, num("4")],
    ParserErrorKind::EndParenthesisExpected,
    4,
)]
#[case::leading_star(vec![Token::Multiply, num("3")], ParserErrorKind::UnaryOperatorExpected(Token::Multiply), 0)]
#[case::empty_group(vec![Token::LParen, Token::RParen], ParserErrorKind::UnaryOperatorExpected(Token::RParen), 1)]
#[case::operator_after_operator(
    vec![num("1"), Token::Plus, Token::Divide, num("2")],
    ParserErrorKind::ExpressionAfterOperatorExpected,
    2,
)]
#[case::sign_then_operator(
    vec![Token::Minus, Token::Multiply, num("2")],
    ParserErrorKind::ExpressionAfterOperatorExpected,
    1,
)]
#[case::adjacent_groups(
    vec![Token::LParen, num("3"), Token::RParen, Token::LParen, num("4"), Token::RParen],
    ParserErrorKind::OperatorExpected,
    3,
)]
#[case::adjacent_numbers(vec![num("3"), num("4")], ParserErrorKind::OperatorExpected, 1)]
#[case::stray_close(vec![num("3"), Token::RParen, Token::Plus, num("4")], ParserErrorKind::UnexpectedToken(Token::RParen), 1)]
#[case::divide_by_zero(vec![num("1"), Token::Divide, num("0")], ParserErrorKind::DivisionByZero, 1)]
#[case::divide_by_zero_group(
    vec![num("5"), Token::Divide, Token::LParen, num("2"), Token::Minus, num("2"), Token::RParen],
    ParserErrorKind::DivisionByZero,
    1,
)]
fn reports_first_failure(
    #[case] tokens: Vec<Token>,
    #[case] kind: ParserErrorKind,
    #[case] token_index: usize,
) {
    assert_eq!(parse(&tokens), Err(ParserError::new(kind, token_index)));
}

#[test]
fn overflow_points_at_the_operator() {
    let big = num("79228162514264337593543950335");
    let tokens = [num("1"), Token::Plus, big, Token::Multiply, num("2")];
    assert_eq!(
        parse(&tokens),
        Err(ParserError::new(ParserErrorKind::Overflow, 3))
    );
}

#[test]
fn first_error_wins() {
    // 1 / 0 * (  : the division fails before the unclosed group is seen.
    let tokens = [num("1"), Token::Divide, num("0"), Token::Multiply, Token::LParen];
    assert_eq!(
        parse(&tokens),
        Err(ParserError::new(ParserErrorKind::DivisionByZero, 1))
    );
}
