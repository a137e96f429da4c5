/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator traverses the AST, applies the arithmetic operators and
/// reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens one at
/// a time: integer literals, the four operators and parentheses. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Skips whitespace.
/// - Reports characters outside the alphabet as invalid tokens without
///   stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer through a one-token lookahead and
/// constructs an AST that encodes operator precedence and left
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with column info.
pub mod parser;
