/// The evaluator module computes the value of one input line.
///
/// The evaluator is a recursive-descent parser whose grammar rules return
/// numbers instead of syntax nodes. It pulls tokens from the scanner one at a
/// time and folds them into a result as soon as each rule completes.
///
/// # Responsibilities
/// - Implements the `expr`, `order` and `factor` rules with their precedence
///   and left-associativity.
/// - Performs the arithmetic and reports division by zero.
/// - Detects every syntactic mismatch in a single `advance` primitive.
pub mod evaluator;
/// The lexer module tokenizes an input line on demand.
///
/// The scanner classifies integers, the four arithmetic operators and
/// parentheses, skipping spaces in between. It is the first stage of
/// evaluation and never looks further ahead than the token requested.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, text and position.
/// - Signals the end of input with a sticky `EndOfInput` token.
/// - Reports characters outside the token set.
pub mod lexer;
