/// Evaluator state, options and the token-consuming primitive.
///
/// Holds the scanner, the single lookahead token and the nesting counter.
pub mod core;

/// Binary operator rules.
///
/// Implements the additive (`expr`) and multiplicative (`order`) levels of the
/// grammar together with the integer arithmetic they perform.
pub mod binary;

/// Operand rule.
///
/// Evaluates integer literals and parenthesized sub-expressions.
pub mod factor;
