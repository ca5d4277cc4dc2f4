use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    process,
};

use clap::Parser;
use intcalc::{
    Options,
    interpreter::evaluator::core::MAX_DEPTH,
    shell::{evaluate_line, run_repl, run_script},
};

/// intcalc evaluates integer arithmetic with `+ - * /` and parentheses.
///
/// Without an expression it starts an interactive shell, or evaluates standard
/// input line by line when that is not a terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intcalc to read lines from a file instead of evaluating an
    /// expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints every consumed token to stderr.
    #[arg(short, long)]
    trace: bool,

    /// Deepest parenthesis nesting accepted.
    #[arg(short = 'd', long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// An expression, or a file path when `--file` is given.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let options = Options { max_depth: args.max_depth,
                            trace:     args.trace, };

    match args.contents {
        Some(path) if args.file => {
            let file = File::open(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                process::exit(1);
            });
            if let Err(e) = run_script(BufReader::new(file), io::stdout().lock(), &options) {
                eprintln!("Failed to read '{path}': {e}");
                process::exit(1);
            }
        },
        Some(expression) => match evaluate_line(&expression, &options) {
            None => {},
            Some(Ok(value)) => println!("{value}"),
            Some(Err(e)) => {
                eprintln!("{e}");
                process::exit(1);
            },
        },
        None if io::stdin().is_terminal() => {
            if let Err(e) = run_repl(&options) {
                eprintln!("Failed to read input: {e}");
                process::exit(1);
            }
        },
        None => {
            if let Err(e) = run_script(io::stdin().lock(), io::stdout().lock(), &options) {
                eprintln!("Failed to read input: {e}");
                process::exit(1);
            }
        },
    }
}
