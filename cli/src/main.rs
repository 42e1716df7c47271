use std::io::{self, Write as _};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use connective::{build, lex, Ast};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use display::*;
use json::{Node, Output};
pub use style::*;

mod display;
mod json;
mod style;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Evaluate flat arithmetic expressions
#[derive(Debug, Parser)]
#[command(name = "connective", version, about)]
struct Args {
    /// Bind a single character variable, like `x=3`
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(char, f64)>,

    /// The output format
    #[arg(short, long, value_enum, env = "CONNECTIVE_FORMAT", default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Print the syntax tree instead of evaluating it
    #[arg(short, long)]
    tree: bool,

    /// Start an interactive repl, `NAME=VALUE` lines bind variables
    #[arg(short, long)]
    interactive: bool,

    /// An expression that will be evaluated. It may start with `-`, put it
    /// after `--` when it could be read as flags, like `-t`
    #[arg(required_unless_present = "interactive", allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    if args.interactive {
        return repl(&args);
    }

    let input = args.expression.join(" ");
    if print_eval(&args, &args.vars, &input) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn parse_binding(arg: &str) -> Result<(char, f64), String> {
    let (name, val) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found `{arg}`"))?;

    let mut chars = name.trim().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(format!("variable names are a single character, found `{name}`"));
    };

    let val = val
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value `{val}`: {e}"))?;

    Ok((c, val))
}

fn repl(args: &Args) -> ExitCode {
    bprintln!(LBlue, "Started interactive repl");

    let mut vars = args.vars.clone();
    let mut output = io::stdout();
    let input = io::stdin();
    let mut buf = String::new();
    loop {
        buf.clear();

        bprint!(LBlue, " >> ");
        let _ = output.flush();
        match input.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => (),
            Err(_) => {
                bprintln!(LRed, "Error reading line");
                continue;
            }
        }

        match buf.trim() {
            "" => (),
            "exit" => break,
            "clear" => {
                print!("\x1b[1;1H\x1B[2J");
                let _ = output.flush();
            }
            line => match parse_binding(line) {
                Ok(binding) => vars.push(binding),
                Err(_) => {
                    print_eval(args, &vars, line);
                }
            },
        }
    }

    ExitCode::SUCCESS
}

/// Prints the result or the error of `input`, returns whether it succeeded.
fn print_eval(args: &Args, vars: &[(char, f64)], input: &str) -> bool {
    if args.tree {
        return match build(lex(input)) {
            Ok(ast) => print_tree(args, ast.as_ref()),
            Err(e) => print_error(args, &e),
        };
    }

    match connective::calc(input, vars) {
        Ok(v) => match args.format {
            OutputFormat::Pretty => {
                println!("{v}");
                true
            }
            OutputFormat::Json => print_json(&Output::Value(v)),
        },
        Err(e) => print_error(args, &e),
    }
}

fn print_tree(args: &Args, ast: Option<&Ast>) -> bool {
    match args.format {
        OutputFormat::Pretty => {
            match ast {
                Some(a) => print!("{}", DisplayTree(a)),
                None => println!("{ABSENT}"),
            }
            true
        }
        OutputFormat::Json => print_json(&Output::Tree(ast.map(Node::new))),
    }
}

/// Always returns `false`, the evaluation failed.
fn print_error(args: &Args, error: &connective::Error) -> bool {
    match args.format {
        OutputFormat::Pretty => bprintln!(LRed, "{error}"),
        OutputFormat::Json => {
            print_json(&Output::Error(error.to_string()));
        }
    }
    false
}

fn print_json(output: &Output) -> bool {
    match serde_json::to_string(output) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            bprintln!(LRed, "Error writing json: {e}");
            false
        }
    }
}
