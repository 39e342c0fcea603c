//! stacc command-line interpreter.
//!
//! Usage:
//!   stacc <file>       Evaluate a file
//!   stacc -e <code>    Evaluate a string
//!   stacc              Read from stdin
//!
//! Prints each captured print on its own line, then the final stack
//! snapshot. With --json, emits the structured outcome instead.

use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
};

use tracing_subscriber::EnvFilter;

use stacc_lang::{eval, snapshot};

const USAGE: &str = "\
Usage: stacc [OPTIONS] [FILE]

Arguments:
  [FILE]  stacc source file to evaluate

Options:
  -e <CODE>   Evaluate CODE string
  --json      Emit the outcome as JSON
  -h, --help  Print this help message

If no arguments are given, reads from stdin.";

fn read_stdin() -> Result<String, io::Error> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

enum Action {
    Eval { source: String, json: bool },
    Help,
}

fn parse_args() -> Result<Action, String> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    let source = match args.as_slice() {
        [] => read_stdin().map_err(|e| format!("error reading stdin: {e}"))?,
        [arg] if arg == "-" => read_stdin().map_err(|e| format!("error reading stdin: {e}"))?,
        [arg] if arg == "-h" || arg == "--help" => return Ok(Action::Help),
        [flag, code] if flag == "-e" => code.clone(),
        [file] => fs::read_to_string(file).map_err(|e| format!("error reading {file}: {e}"))?,
        _ => return Err(USAGE.into()),
    };

    Ok(Action::Eval { source, json })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Eval { source, json }) => match eval(&source) {
            Ok(outcome) => {
                if json {
                    match serde_json::to_string(&outcome) {
                        Ok(payload) => println!("{payload}"),
                        Err(e) => {
                            eprintln!("error serializing outcome: {e}");
                            return ExitCode::FAILURE;
                        }
                    }
                } else {
                    for value in &outcome.prints {
                        println!("{value}");
                    }
                    println!("{}", snapshot(&outcome.stack));
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
