use std::fs;

use clap::Parser;
use tally::{evaluate, parse, tokenize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Expression evaluated when none is given on the command line.
const DEFAULT_EXPRESSION: &str = "(2 + 3) * 5";

/// tally evaluates arithmetic expressions made of integers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream before parsing.
    #[arg(short = 'k', long)]
    tokens: bool,

    /// Prints the fully parenthesized expression tree before evaluating it.
    #[arg(short, long)]
    tree: bool,

    /// Enables debug logging when `RUST_LOG` is not set.
    #[arg(short, long)]
    verbose: bool,

    #[arg(default_value = DEFAULT_EXPRESSION)]
    contents: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                     EnvFilter::new(if args.verbose { "debug" } else { "warn" })
                 });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    debug!(%source, "evaluating");

    if args.tokens {
        for (token, column) in tokenize(&source) {
            println!("{column:>4}  {token}");
        }
    }

    let tree = match parse(&source) {
        Ok(tree) => tree,
        Err(e) => {
            debug!(column = e.column(), "parse failed");
            eprintln!("Error parsing expression: {e}");
            std::process::exit(1);
        },
    };

    if args.tree {
        println!("{tree}");
    }

    match evaluate(&tree) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => {
            eprintln!("Error evaluating expression: {e}");
            std::process::exit(1);
        },
    }
}
