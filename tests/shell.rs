use intcalc::{
    EvalError, Options,
    interpreter::lexer::TokenKind,
    shell::{evaluate_line, run_script},
};

fn run(input: &str) -> String {
    run_bytes(input.as_bytes())
}

fn run_bytes(input: &[u8]) -> String {
    let mut output = Vec::new();
    run_script(input, &mut output, &Options::default()).expect("script failed");
    String::from_utf8(output).expect("output is not UTF-8")
}

#[test]
fn prints_one_response_per_line() {
    assert_eq!(run("1 + 2\n(2 + 3) * 4\n"), "3\n20\n");
}

#[test]
fn skips_blank_lines() {
    assert_eq!(run("\n   \n6 * 7\n\n"), "42\n");
}

#[test]
fn keeps_going_after_an_error() {
    assert_eq!(run("5 / 0\n1 + a\n10 - 2 - 3"),
               "Error at position 2: Division by zero.\n\
                Error at position 4: Invalid character 'a'.\n\
                5\n");
}

#[test]
fn handles_crlf_line_endings() {
    assert_eq!(run("1 + 1\r\n2 * 2\r\n"), "2\n4\n");
}

#[test]
fn respects_the_nesting_limit() {
    let mut output = Vec::new();
    let options = Options { max_depth: 1,
                            ..Options::default() };
    run_script("(1)\n((1))\n".as_bytes(), &mut output, &options).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(),
               "1\nError at position 1: Parentheses nested more than 1 deep.\n");
}

#[test]
fn invalid_utf8_is_reported_and_skipped() {
    assert_eq!(run_bytes(b"1 + 1\n\xff\n2 + 2\n"),
               "2\n\
                Error at position 0: Invalid character '\u{fffd}'.\n\
                4\n");
}

#[test]
fn last_line_without_newline_is_evaluated() {
    assert_eq!(run("3 * 3\n4 * 4"), "9\n16\n");
}

#[test]
fn blank_lines_never_reach_the_evaluator() {
    let options = Options::default();
    assert_eq!(evaluate_line("", &options), None);
    assert_eq!(evaluate_line("   ", &options), None);
    assert_eq!(evaluate_line("1 +", &options),
               Some(Err(EvalError::UnexpectedToken { expected: &[TokenKind::Integer,
                                                                 TokenKind::LParen],
                                                     found:    TokenKind::EndOfInput,
                                                     position: 3, })));
    assert_eq!(evaluate_line(" 2 + 2 ", &options), Some(Ok(4)));
}
