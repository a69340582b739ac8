use crate::env::Environment;
use crate::value::Value;

/// An argument after variable substitution, before inline expansion.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Bare token taken literally from the line.
    Word(String),
    /// Double-quoted token. Always a plain string, never a command.
    Quoted(String),
    /// Value substituted from a variable binding.
    Bound(Value),
}

impl Arg {
    /// Name this argument would invoke if it sits in a command position.
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Arg::Word(word) => Some(word),
            Arg::Bound(Value::Str(s)) => Some(s),
            Arg::Quoted(_) | Arg::Bound(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Arg::Word(word) => Value::from_literal(&word),
            Arg::Quoted(s) => Value::Str(s),
            Arg::Bound(value) => value,
        }
    }
}

/// Substitute bound variables in a raw argument list.
///
/// A token is replaced only when it matches a variable name exactly.
/// Everything else is kept literally, with surrounding double quotes marking
/// a string.
pub fn resolve(tokens: &[&str], env: &Environment) -> Vec<Arg> {
    tokens
        .iter()
        .map(|token| {
            if let Some(value) = env.get_var(token) {
                Arg::Bound(value.clone())
            } else if let Some(inner) = unquote(token) {
                Arg::Quoted(inner.to_string())
            } else {
                Arg::Word(token.to_string())
            }
        })
        .collect()
}

fn unquote(token: &str) -> Option<&str> {
    token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_substitutes_exact_names() {
        let env = Environment::new();
        let args = resolve(&["_LANG", "_LANG!", "x"], &env);
        assert_eq!(
            args,
            vec![
                Arg::Bound(Value::from("rust")),
                Arg::Word("_LANG!".to_string()),
                Arg::Word("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_quoted_tokens() {
        let env = Environment::new();
        let args = resolve(&["\"1\"", "\"\"", "\"open", "\"_LANG\""], &env);
        assert_eq!(
            args,
            vec![
                Arg::Quoted("1".to_string()),
                Arg::Quoted(String::new()),
                Arg::Word("\"open".to_string()),
                Arg::Quoted("_LANG".to_string()),
            ]
        );
    }

    #[test]
    fn test_command_position() {
        assert_eq!(Arg::Word("add".to_string()).command_name(), Some("add"));
        assert_eq!(Arg::Bound(Value::from("add")).command_name(), Some("add"));
        assert_eq!(Arg::Quoted("add".to_string()).command_name(), None);
        assert_eq!(Arg::Bound(Value::Number(1.0)).command_name(), None);
    }

    #[test]
    fn test_into_value() {
        assert_eq!(Arg::Word("2".to_string()).into_value(), Value::Number(2.0));
        assert_eq!(Arg::Quoted("2".to_string()).into_value(), Value::from("2"));
        assert_eq!(Arg::Bound(Value::from("0.7.3")).into_value(), Value::from("0.7.3"));
    }
}
