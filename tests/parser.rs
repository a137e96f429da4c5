use tally::{
    ast::{BinaryOperator, Expr},
    evaluate,
    interpreter::{lexer::Lexer, parser::core::Parser},
    parse,
};

fn num(value: f64, column: usize) -> Expr {
    Expr::Number { value, column }
}

#[test]
fn left_associative_tree_shape() {
    let tree = parse("10 - 2 - 3").unwrap();
    assert_eq!(tree,
               Expr::binary(Expr::binary(num(10.0, 1), BinaryOperator::Sub, num(2.0, 6), 4),
                            BinaryOperator::Sub,
                            num(3.0, 10),
                            8));
}

#[test]
fn precedence_tree_shape() {
    let tree = parse("2 + 3 * 4").unwrap();
    assert_eq!(tree,
               Expr::binary(num(2.0, 1),
                            BinaryOperator::Add,
                            Expr::binary(num(3.0, 5), BinaryOperator::Mul, num(4.0, 9), 7),
                            3));
}

#[test]
fn parentheses_add_no_nodes() {
    assert_eq!(parse("((7))").unwrap(), num(7.0, 3));
    assert_eq!(parse("(1 + 2)").unwrap().to_string(), "(1 + 2)");
}

#[test]
fn display_is_fully_parenthesized() {
    assert_eq!(parse("1 + 2 * 3 - 4").unwrap().to_string(), "((1 + (2 * 3)) - 4)");
    assert_eq!(parse("(1 + 2) * (3 - 4) / 5").unwrap().to_string(),
               "(((1 + 2) * (3 - 4)) / 5)");
}

#[test]
fn node_columns() {
    let tree = parse("1 + (2 * 3)").unwrap();
    assert_eq!(tree.column(), 3);
    match tree {
        Expr::BinaryOp { right, .. } => assert_eq!(right.column(), 8),
        other => panic!("{other:?} doesn't match"),
    }
}

#[test]
fn parser_over_explicit_lexer() {
    let mut parser = Parser::new(Lexer::new("6 / 3 * 2"));
    let tree = parser.parse().unwrap();
    assert_eq!(evaluate(&tree).unwrap(), 4.0);
}

#[test]
fn tree_can_be_evaluated_repeatedly() {
    let tree = parse("9 / 2").unwrap();
    assert_eq!(evaluate(&tree).unwrap(), 4.5);
    assert_eq!(evaluate(&tree).unwrap(), 4.5);
}

#[test]
fn parsing_stops_after_first_expression() {
    assert_eq!(parse("2 3").unwrap(), num(2.0, 1));
    assert_eq!(parse("1 + 2 ) $").unwrap().to_string(), "(1 + 2)");
}
