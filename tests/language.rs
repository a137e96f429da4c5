use tally::{
    error::{ParseError, RuntimeError},
    get_result,
};

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Box<dyn std::error::Error> {
    match get_result(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn parse_failure(src: &str) -> ParseError {
    match assert_failure(src).downcast::<ParseError>() {
        Ok(e) => *e,
        Err(e) => panic!("Expected a parse error for {src:?}, got: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
    assert_value("007", 7.0);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("20 - 6 / 2", 17.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("2 * 3 / 4", 1.5);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn grouping() {
    assert_value("(2 + 3) * 5", 25.0);
    assert_value("((1 + 2)) * ((3))", 9.0);
    assert_value("10 - (2 - 3)", 11.0);
    assert_value("8 / (4 / 2)", 4.0);
    assert_value("(((((7)))))", 7.0);
}

#[test]
fn subtraction_can_go_negative() {
    assert_value("2 - 5", -3.0);
    assert_value("0 - 0", 0.0);
}

#[test]
fn whitespace_is_insignificant() {
    let compact = get_result("2+3").unwrap();
    let spaced = get_result(" 2 +   3 ").unwrap();
    assert_eq!(compact, spaced);

    assert_value("\t(2\n+\r\n3)\t*  5\n", 25.0);
}

#[test]
fn repeated_runs_agree() {
    let src = "(12 + 3) * 4 / (6 - 1)";
    let first = get_result(src).unwrap();
    for _ in 0..10 {
        assert_eq!(get_result(src).unwrap(), first);
    }
    assert_eq!(first, 12.0);
}

#[test]
fn huge_literals_overflow_to_infinity() {
    let digits = "9".repeat(400);
    assert_value(&digits, f64::INFINITY);
}

#[test]
fn division_by_zero() {
    let e = assert_failure("1 / 0");
    let e = e.downcast::<RuntimeError>()
             .expect("division by zero is a runtime error");
    assert_eq!(*e, RuntimeError::DivisionByZero { column: 3 });

    assert_failure("5 / (2 - 2)");
    assert_failure("1 + 4 / (0 * 7)");
}

#[test]
fn division_by_zero_reports_first_failing_operand() {
    let e = assert_failure("(1 / 0) + (2 / 0)").downcast::<RuntimeError>()
                                               .unwrap();
    assert_eq!(*e, RuntimeError::DivisionByZero { column: 4 });
}

#[test]
fn invalid_character_is_reported_when_reached() {
    assert_eq!(parse_failure("2 + @"),
               ParseError::InvalidCharacter { description: "Invalid character: @".to_string(),
                                              column:      5, });
    assert_eq!(parse_failure("x"),
               ParseError::InvalidCharacter { description: "Invalid character: x".to_string(),
                                              column:      1, });
}

#[test]
fn invalid_character_after_expression_is_never_reached() {
    assert_value("2 + 3 $", 5.0);
    assert_value("(4) @@", 4.0);
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(parse_failure("(2 + 3"),
               ParseError::ExpectedClosingParen { found:  "end of input".to_string(),
                                                  column: 7, });
    assert!(matches!(parse_failure("((1)"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_failure("(1 2)"), ParseError::ExpectedClosingParen { .. }));
    assert_value("(1))", 1.0);
}

#[test]
fn operators_out_of_place() {
    assert_eq!(parse_failure("* 2"),
               ParseError::UnexpectedToken { token:  "'*'".to_string(),
                                             column: 1, });
    assert!(matches!(parse_failure("2 + + 3"),
                     ParseError::UnexpectedToken { column: 5, .. }));
    assert!(matches!(parse_failure("-1"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("()"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_operands() {
    assert_eq!(parse_failure(""), ParseError::UnexpectedEndOfInput { column: 1 });
    assert_eq!(parse_failure("   "), ParseError::UnexpectedEndOfInput { column: 4 });
    assert_eq!(parse_failure("2 *"), ParseError::UnexpectedEndOfInput { column: 4 });
}

#[test]
fn input_after_complete_expression_is_ignored() {
    assert_value("2 3", 2.0);
    assert_value("(1 + 2) (3)", 3.0);
    assert_value("6 / 2 ) * 100", 3.0);
}

#[test]
fn no_decimal_points() {
    assert!(matches!(parse_failure("1 + .5"),
                     ParseError::InvalidCharacter { column: 5, .. }));
    assert_value("1.5", 1.0);
}

#[test]
fn error_messages() {
    assert_eq!(assert_failure("1 / 0").to_string(),
               "Error at column 3: Division by zero.");
    assert_eq!(assert_failure("(2 + 3").to_string(),
               "Error at column 7: Expected closing parenthesis ')' but found end of input.");
    assert_eq!(assert_failure("2 + @").to_string(),
               "Error at column 5: Invalid character: @.");
}
