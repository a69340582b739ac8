use anyhow::{Context, Result};
use argh::FromArgs;
use eel::{Config, Interpreter, Program, Severity, render};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(FromArgs)]
/// Run Easily Extendable Language programs.
/// Starts an interactive prompt when no program source is given.
struct Args {
    #[argh(positional)]
    /// program file to run.
    file: Option<PathBuf>,

    #[argh(switch)]
    /// read the program from standard input.
    stdin: bool,

    #[argh(option, short = 'e')]
    /// program text to run instead of a file; a literal `\n` separates lines.
    eval: Option<String>,

    #[argh(switch)]
    /// print log entries in their encoded `<code>,<message>` form.
    raw: bool,

    #[argh(option, default = "Config::DEFAULT_MAX_DEPTH")]
    /// deepest allowed chain of nested commands on one line.
    max_depth: usize,

    #[argh(switch, short = 'v')]
    /// log evaluation details to standard error.
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

/// RUST_LOG wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "eel=debug" } else { "eel=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let interpreter = Interpreter::with_config(Config {
        max_depth: args.max_depth,
        ..Config::default()
    });

    let program = match (args.eval, args.file) {
        (Some(source), _) => inline_program(&source),
        (None, Some(path)) => read_program(Some(&path))?,
        (None, None) if args.stdin => read_program(None)?,
        (None, None) => {
            interpreter.repl().context("interactive session failed")?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let log = interpreter.evaluate(&program);
    for entry in &log {
        if args.raw {
            println!("{}", entry.encode());
        } else {
            println!("{}", render::render(entry));
        }
    }

    if log.iter().any(|entry| entry.severity == Severity::Error) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Shells rarely pass real newlines in an argument, so the two characters
/// `\n` also end a line.
fn inline_program(source: &str) -> Program {
    Program::from(source.replace("\\n", "\n"))
}

/// Program bytes from `path`, or from standard input when there is none.
fn read_program(path: Option<&Path>) -> Result<Program> {
    let bytes = match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read program from standard input")?;
            buf
        }
    };
    Ok(Program::from_bytes(&bytes)?)
}
