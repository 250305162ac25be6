mod phrase;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use kacalc::interpreter;
use log::{info, warn};
use session::{Outcome, Session};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "kacalc> ";

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Starts an interactive session when left out
    expression: Option<String>,

    /// Read the input as a spoken phrase, e.g. "what is five times three"
    #[clap(long)]
    spoken: bool,

    /// Print the normalized expression and its expression tree before the result
    #[clap(long)]
    tree: bool,

    /// List the supported operators, functions and constants
    #[clap(long)]
    list: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    if args.list {
        print_registries();
        return Ok(());
    }

    match &args.expression {
        Some(input) => evaluate_once(input, &args),
        None => run_interactive(&args)?,
    }
    Ok(())
}

fn evaluate_once(input: &str, args: &Arguments) {
    let expression = match prepare(input, args.spoken) {
        Some(expression) => expression,
        None => return,
    };
    if args.tree {
        print_tree(&expression);
    }

    let result = interpreter::evaluate(&expression);
    if result.starts_with(interpreter::ERROR_PREFIX) {
        warn!("Could not evaluate {:?}", expression);
    }
    println!("{}", result);
}

fn run_interactive(args: &Arguments) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().context("Failed to write prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read from stdin")?,
            None => break,
        };
        match line.trim() {
            "exit" | "quit" => break,
            "clear" => {
                session.clear();
                continue;
            }
            _ => {}
        }

        let line = match prepare(&line, args.spoken) {
            Some(line) => line,
            None => continue,
        };
        if args.tree {
            let expression = session.pending(&line);
            if !expression.is_empty() {
                print_tree(&expression);
            }
        }

        match session.submit(&line) {
            Outcome::Result(result) => println!("= {}", result),
            Outcome::Error(error) => println!("{}", error),
            Outcome::Empty => {}
        }
    }
    Ok(())
}

/// Turns raw input into an expression, running spoken phrases through the preprocessor.
///
/// returns: `None` when a spoken phrase could not be understood.
fn prepare(input: &str, spoken: bool) -> Option<String> {
    if !spoken {
        return Some(input.to_string());
    }
    let expression = phrase::parse_command(input);
    if expression.is_empty() && !input.trim().is_empty() {
        println!("Could not understand {:?}", input.trim());
        return None;
    }
    println!("Heard: {}", expression);
    Some(expression)
}

fn print_tree(expression: &str) {
    if let Ok(normalized) = interpreter::normalize(expression) {
        println!("{}", normalized);
    }
    if let Ok(tree) = interpreter::convert(expression) {
        print!("{}", tree);
    }
}

fn print_registries() {
    println!("Operators: {}", interpreter::OPERATOR_SYMBOLS.join(" "));
    println!(
        "Functions: {}",
        interpreter::function_names().collect::<Vec<_>>().join(", ")
    );
    println!(
        "Constants: {}",
        interpreter::constant_names().collect::<Vec<_>>().join(", ")
    );
}
