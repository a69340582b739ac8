//! Easily Extendable Language: a tiny line-oriented command language.
//!
//! Each line of a program is a command followed by its arguments. Any
//! argument that names a command is evaluated in place, consuming the
//! arguments after it, so `print add 1 2 is 3!!!` prints `3 is 3!!!`.
//! Arguments that match a variable name are replaced by the variable's value
//! before that happens.
//!
//! Evaluation produces an ordered log of `(severity, message)` entries,
//! exchanged with hosts as `"<severity code>,<message>"` strings. `error` and
//! `stop` halt the program, as does any failing command.
//!
//! The main entry point is [`Interpreter`]; [`parse`] is a shortcut that runs
//! a program with the default command set.

mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
mod expander;
mod interpreter;
pub mod preprocess;
pub mod program;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod value;

pub use command::{Arity, CommandId, Log, LogEntry, Outcome, Severity};
pub use config::Config;
pub use error::{EvalError, InputTypeError};
pub use interpreter::Interpreter;
pub use program::Program;
pub use registry::Registry;
pub use value::Value;

/// Evaluate `program` with the builtin commands and return its encoded log.
///
/// ```
/// assert_eq!(eel::parse("print hi\nstop lol\nprint 2"), vec!["0,hi", "3,lol"]);
/// ```
pub fn parse(program: impl Into<Program>) -> Vec<String> {
    Interpreter::default().parse(program)
}

/// Like [`parse`], for a program that is already split into lines.
///
/// ```
/// assert_eq!(eel::parse_lines(["-- note", "print hi"]), vec!["0,hi"]);
/// ```
pub fn parse_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Vec<String> {
    let lines = lines
        .into_iter()
        .map(|line| line.as_ref().to_string())
        .collect();
    Interpreter::default().parse(Program::Lines(lines))
}
