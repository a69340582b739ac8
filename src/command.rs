use crate::error::EvalError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Identifier of every command the language knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Print,
    Warn,
    Error,
    Stop,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Equals,
    Not,
}

impl CommandId {
    pub const ALL: [CommandId; 11] = [
        CommandId::Print,
        CommandId::Warn,
        CommandId::Error,
        CommandId::Stop,
        CommandId::Add,
        CommandId::Sub,
        CommandId::Mul,
        CommandId::Div,
        CommandId::Pow,
        CommandId::Equals,
        CommandId::Not,
    ];

    /// Name used to invoke the command from a script.
    pub fn name(self) -> &'static str {
        match self {
            CommandId::Print => "print",
            CommandId::Warn => "warn",
            CommandId::Error => "error",
            CommandId::Stop => "stop",
            CommandId::Add => "add",
            CommandId::Sub => "sub",
            CommandId::Mul => "mul",
            CommandId::Div => "div",
            CommandId::Pow => "pow",
            CommandId::Equals => "equals",
            CommandId::Not => "not",
        }
    }
}

impl FromStr for CommandId {
    type Err = EvalError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or_else(|| EvalError::UnknownCommand(name.to_string()))
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many following arguments a command consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    /// Everything left in the current argument list.
    Variadic,
}

/// Classification of a log entry, in wire-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info = 0,
    Warning = 1,
    Error = 2,
    Halt = 3,
}

impl Severity {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::Info),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            3 => Some(Severity::Halt),
            _ => None,
        }
    }
}

/// One line of program output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Wire form consumed by log renderers: `"<severity code>,<message>"`.
    pub fn encode(&self) -> String {
        format!("{},{}", self.severity.code(), self.message)
    }

    /// Inverse of [`LogEntry::encode`]. The message may itself contain commas.
    pub fn decode(encoded: &str) -> Option<Self> {
        let (code, message) = encoded.split_once(',')?;
        let severity = Severity::from_code(code.parse().ok()?)?;
        Some(Self::new(severity, message))
    }
}

/// Ordered output of one evaluation pass.
pub type Log = Vec<LogEntry>;

/// Result of evaluating one command invocation.
///
/// An absent `value` reads as boolean `true` wherever the value is consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub value: Option<Value>,
    pub log: Option<LogEntry>,
    pub stop: bool,
}

impl Outcome {
    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn log(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            log: Some(LogEntry::new(severity, message)),
            ..Self::default()
        }
    }

    /// Log entry plus a stop signal.
    pub fn halt(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            stop: true,
            ..Self::log(severity, message)
        }
    }

    pub fn failure(err: &EvalError) -> Self {
        Self::halt(Severity::Error, err.to_string())
    }

    pub fn value_or_default(self) -> Value {
        self.value.unwrap_or_default()
    }
}

/// Evaluation function behind a command.
pub type Handler = fn(&[Value]) -> Result<Outcome, EvalError>;

/// A registered command: identifier, arity and handler.
#[derive(Clone, Copy)]
pub struct Command {
    pub id: CommandId,
    pub arity: Arity,
    handler: Handler,
}

impl Command {
    pub fn new(id: CommandId, arity: Arity, handler: Handler) -> Self {
        Self { id, arity, handler }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Runs the handler on fully resolved arguments.
    ///
    /// Fixed-arity commands given too few arguments fail; surplus arguments
    /// are ignored. Handler errors are folded into a halting outcome.
    pub fn invoke(&self, args: &[Value]) -> Outcome {
        if let Arity::Fixed(expected) = self.arity {
            if args.len() < expected {
                return Outcome::failure(&EvalError::ArityMismatch {
                    name: self.name(),
                    expected,
                    got: args.len(),
                });
            }
        }
        (self.handler)(args).unwrap_or_else(|err| Outcome::failure(&err))
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_round_trip() {
        for id in CommandId::ALL {
            assert_eq!(id.name().parse::<CommandId>(), Ok(id));
        }
        assert_eq!(
            "Print".parse::<CommandId>(),
            Err(EvalError::UnknownCommand("Print".to_string()))
        );
    }

    #[test]
    fn test_log_entry_wire_format() {
        let entry = LogEntry::new(Severity::Warning, "low, on fuel");
        assert_eq!(entry.encode(), "1,low, on fuel");
        assert_eq!(LogEntry::decode("1,low, on fuel"), Some(entry));
        assert_eq!(LogEntry::decode("3,"), Some(LogEntry::new(Severity::Halt, "")));
        assert_eq!(LogEntry::decode("7,nope"), None);
        assert_eq!(LogEntry::decode("no comma"), None);
    }

    #[test]
    fn test_outcome_defaults() {
        let outcome = Outcome::default();
        assert!(!outcome.stop);
        assert!(outcome.log.is_none());
        assert_eq!(outcome.value_or_default(), Value::Bool(true));

        let halted = Outcome::failure(&EvalError::DivisionByZero);
        assert!(halted.stop);
        assert_eq!(halted.log, Some(LogEntry::new(Severity::Error, "Division by zero.")));
    }

    #[test]
    fn test_invoke_checks_fixed_arity() {
        fn first(args: &[Value]) -> Result<Outcome, EvalError> {
            Ok(Outcome::value(args[0].clone()))
        }
        let cmd = Command::new(CommandId::Not, Arity::Fixed(1), first);

        let outcome = cmd.invoke(&[]);
        assert!(outcome.stop);
        assert_eq!(
            outcome.log.map(|entry| entry.message),
            Some("Command \"not\" expects 1 argument, got 0.".to_string())
        );

        let outcome = cmd.invoke(&[Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(outcome.value, Some(Value::Number(1.0)));
    }
}
