use thiserror::Error;

/// Failures raised while evaluating a line.
///
/// None of these escape an evaluation pass: each one becomes an
/// error-severity log entry and halts the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Command \"{0}\" Not Found.")]
    UnknownCommand(String),

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Command \"{name}\" expects {expected} {}, got {got}.", arguments(.expected))]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Maximum nesting depth of {0} exceeded.")]
    DepthExceeded(usize),
}

fn arguments(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}

/// The program handed to the interpreter is neither source text nor a list of lines.
#[derive(Debug, Error)]
#[error("expected program text or a list of lines, got {0}")]
pub struct InputTypeError(pub String);
