use crate::command::{Arity, Command, CommandId, Outcome, Severity};
use crate::error::EvalError;
use crate::value::Value;

/// Built-in commands known to the language at compile time.
///
/// Each builtin is a unit struct; [`Command::builtin`] turns it into the
/// tagged handler stored in the registry.
pub(crate) trait BuiltinCommand {
    const ID: CommandId;
    const ARITY: Arity;

    /// Evaluates the command. Fixed-arity builtins may assume at least
    /// `ARITY` arguments, the caller checks that.
    fn execute(args: &[Value]) -> Result<Outcome, EvalError>;
}

impl Command {
    pub(crate) fn builtin<T: BuiltinCommand>() -> Self {
        Command::new(T::ID, T::ARITY, T::execute)
    }
}

/// Variadic arguments are stringified and joined with a single space.
fn join(args: &[Value]) -> String {
    args.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Log the arguments at info level.
pub struct Print;

impl BuiltinCommand for Print {
    const ID: CommandId = CommandId::Print;
    const ARITY: Arity = Arity::Variadic;

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::log(Severity::Info, join(args)))
    }
}

/// Log the arguments as a warning.
pub struct Warn;

impl BuiltinCommand for Warn {
    const ID: CommandId = CommandId::Warn;
    const ARITY: Arity = Arity::Variadic;

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::log(Severity::Warning, join(args)))
    }
}

/// Log the arguments as an error and halt.
pub struct Error;

impl BuiltinCommand for Error {
    const ID: CommandId = CommandId::Error;
    const ARITY: Arity = Arity::Variadic;

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::halt(Severity::Error, join(args)))
    }
}

/// Halt, with an optional message.
pub struct Stop;

impl BuiltinCommand for Stop {
    const ID: CommandId = CommandId::Stop;
    const ARITY: Arity = Arity::Variadic;

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::halt(Severity::Halt, join(args)))
    }
}

/// Numeric sum of two numbers; any other pair is concatenated.
pub struct Add;

impl BuiltinCommand for Add {
    const ID: CommandId = CommandId::Add;
    const ARITY: Arity = Arity::Fixed(2);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::value(match (&args[0], &args[1]) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            (a, b) => Value::Str(format!("{a}{b}")),
        }))
    }
}

pub struct Sub;

impl BuiltinCommand for Sub {
    const ID: CommandId = CommandId::Sub;
    const ARITY: Arity = Arity::Fixed(2);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::value(args[0].as_number() - args[1].as_number()))
    }
}

pub struct Mul;

impl BuiltinCommand for Mul {
    const ID: CommandId = CommandId::Mul;
    const ARITY: Arity = Arity::Fixed(2);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::value(args[0].as_number() * args[1].as_number()))
    }
}

/// Division. A zero divisor fails instead of producing an infinity.
pub struct Div;

impl BuiltinCommand for Div {
    const ID: CommandId = CommandId::Div;
    const ARITY: Arity = Arity::Fixed(2);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        let divisor = args[1].as_number();
        if divisor == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Outcome::value(args[0].as_number() / divisor))
    }
}

/// Exponentiation.
pub struct Pow;

impl BuiltinCommand for Pow {
    const ID: CommandId = CommandId::Pow;
    const ARITY: Arity = Arity::Fixed(2);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::value(args[0].as_number().powf(args[1].as_number())))
    }
}

/// Strict equality: values of different types are never equal.
pub struct Equals;

impl BuiltinCommand for Equals {
    const ID: CommandId = CommandId::Equals;
    const ARITY: Arity = Arity::Fixed(2);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::value(args[0] == args[1]))
    }
}

pub struct Not;

impl BuiltinCommand for Not {
    const ID: CommandId = CommandId::Not;
    const ARITY: Arity = Arity::Fixed(1);

    fn execute(args: &[Value]) -> Result<Outcome, EvalError> {
        Ok(Outcome::value(!args[0].is_truthy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::LogEntry;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn value_of<T: BuiltinCommand>(args: &[Value]) -> Value {
        Command::builtin::<T>().invoke(args).value_or_default()
    }

    #[test]
    fn test_log_commands_join_with_spaces() {
        let args = [Value::from("x"), num(3.0), Value::Bool(false)];

        let print = Command::builtin::<Print>().invoke(&args);
        assert_eq!(print.log, Some(LogEntry::new(Severity::Info, "x 3 false")));
        assert!(!print.stop);
        assert!(print.value.is_none());

        let warn = Command::builtin::<Warn>().invoke(&args);
        assert_eq!(warn.log, Some(LogEntry::new(Severity::Warning, "x 3 false")));
        assert!(!warn.stop);

        let error = Command::builtin::<Error>().invoke(&args);
        assert_eq!(error.log, Some(LogEntry::new(Severity::Error, "x 3 false")));
        assert!(error.stop);
    }

    #[test]
    fn test_stop_without_arguments() {
        let stop = Command::builtin::<Stop>().invoke(&[]);
        assert_eq!(stop.log, Some(LogEntry::new(Severity::Halt, "")));
        assert!(stop.stop);
    }

    #[test]
    fn test_add_numbers_and_strings() {
        assert_eq!(value_of::<Add>(&[num(1.0), num(2.0)]), num(3.0));
        assert_eq!(value_of::<Add>(&[Value::from("a"), num(1.0)]), Value::from("a1"));
        assert_eq!(value_of::<Add>(&[Value::from("1"), num(1.0)]), Value::from("11"));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(value_of::<Sub>(&[num(5.0), num(7.0)]), num(-2.0));
        assert_eq!(value_of::<Mul>(&[num(4.0), Value::from("2.5")]), num(10.0));
        assert_eq!(value_of::<Div>(&[num(7.0), num(2.0)]), num(3.5));
        assert_eq!(value_of::<Pow>(&[num(2.0), num(10.0)]), num(1024.0));
        assert_eq!(value_of::<Pow>(&[num(2.0), num(-1.0)]), num(0.5));
        // 2 XOR 3 would be 1.
        assert_eq!(value_of::<Pow>(&[num(2.0), num(3.0)]), num(8.0));
    }

    #[test]
    fn test_non_numeric_operand_is_nan() {
        let value = value_of::<Sub>(&[Value::from("abc"), num(1.0)]);
        assert_eq!(value.to_string(), "NaN");
    }

    #[test]
    fn test_division_by_zero_halts() {
        let outcome = Command::builtin::<Div>().invoke(&[num(1.0), num(0.0)]);
        assert!(outcome.stop);
        assert!(outcome.value.is_none());
        assert_eq!(outcome.log, Some(LogEntry::new(Severity::Error, "Division by zero.")));
    }

    #[test]
    fn test_equals_is_strict() {
        assert_eq!(value_of::<Equals>(&[num(1.0), num(1.0)]), Value::Bool(true));
        assert_eq!(value_of::<Equals>(&[num(1.0), Value::from("1")]), Value::Bool(false));
        assert_eq!(value_of::<Equals>(&[Value::Bool(true), num(1.0)]), Value::Bool(false));
        assert_eq!(
            value_of::<Equals>(&[num(f64::NAN), num(f64::NAN)]),
            Value::Bool(false)
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(value_of::<Not>(&[Value::Bool(true)]), Value::Bool(false));
        assert_eq!(value_of::<Not>(&[num(0.0)]), Value::Bool(true));
        assert_eq!(value_of::<Not>(&[Value::from("")]), Value::Bool(true));
        assert_eq!(value_of::<Not>(&[Value::from("0")]), Value::Bool(false));
    }

    #[test]
    fn test_fixed_arity_builtins_reject_missing_operands() {
        let outcome = Command::builtin::<Add>().invoke(&[num(1.0)]);
        assert!(outcome.stop);
        assert_eq!(
            outcome.log.map(|entry| entry.message),
            Some("Command \"add\" expects 2 arguments, got 1.".to_string())
        );
    }
}
