use std::io::{BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{EvalError, Options, evaluate_with};

/// Printed once when the interactive shell starts.
pub const BANNER: &str = "Welcome to intcalc!";
/// Shown before every interactive read.
pub const PROMPT: &str = ">>> ";

/// Evaluates a line unless it is blank after trimming.
///
/// Blank lines are never handed to the evaluator; they yield `None`.
///
/// # Example
/// ```
/// use intcalc::{Options, shell::evaluate_line};
///
/// let options = Options::default();
/// assert_eq!(evaluate_line(" \t ", &options), None);
/// assert_eq!(evaluate_line("6 * 7", &options), Some(Ok(42)));
/// ```
#[must_use]
pub fn evaluate_line(line: &str, options: &Options) -> Option<Result<i64, EvalError>> {
    if line.trim().is_empty() {
        return None;
    }
    Some(evaluate_with(line, options))
}

/// Produces the text the shell prints for one line of input.
///
/// # Returns
/// - `None` if the line is blank after trimming; it is not evaluated.
/// - `Some(value)` with the result in decimal on success.
/// - `Some(message)` with the error message on failure.
///
/// # Example
/// ```
/// use intcalc::{Options, shell::respond};
///
/// let options = Options::default();
/// assert_eq!(respond("  ", &options), None);
/// assert_eq!(respond("10 - 2 - 3", &options).as_deref(), Some("5"));
/// assert_eq!(respond("5 / 0", &options).as_deref(),
///            Some("Error at position 2: Division by zero."));
/// ```
#[must_use]
pub fn respond(line: &str, options: &Options) -> Option<String> {
    evaluate_line(line, options).map(|result| match result {
                                    Ok(value) => value.to_string(),
                                    Err(e) => e.to_string(),
                                })
}

/// Evaluates every line of `reader`, writing one response per non-blank line
/// to `writer`.
///
/// Stops at the end of the stream. Evaluation errors are written like values
/// and do not stop the loop. Bytes that are not valid UTF-8 are replaced with
/// `U+FFFD`, which the scanner then reports as an invalid character.
///
/// # Errors
/// Returns the first error raised while reading or writing.
pub fn run_script<R, W>(mut reader: R, mut writer: W, options: &Options) -> std::io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        if let Some(response) = respond(&line, options) {
            writeln!(writer, "{response}")?;
        }
    }
    writer.flush()
}

/// Removes a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Runs the interactive read-evaluate-print loop on the terminal.
///
/// Prints [`BANNER`], then reads lines after [`PROMPT`] until the user presses
/// Ctrl-C or Ctrl-D. Evaluated lines are added to the editor history.
///
/// # Errors
/// Returns any line-editor failure other than an interrupt or end of file.
pub fn run_repl(options: &Options) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{BANNER}");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e),
        };

        if let Some(response) = respond(&line, options) {
            editor.add_history_entry(line.as_str())?;
            println!("{response}");
        }
    }
}
