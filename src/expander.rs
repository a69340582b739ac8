//! Inline expansion of nested commands.
//!
//! Arguments carry no grouping syntax: any argument naming a registered
//! command is a nested invocation head, and the arguments after it feed that
//! command first. For `print add mul 2 3 4`, `mul 2 3` is evaluated, then
//! `add 6 4`, and `print` finally receives `[10]`.
//!
//! A fixed-arity head takes exactly that many expanded values. A variadic
//! head takes everything left in the list. Consumed arguments never reach the
//! enclosing command.

use crate::command::{Arity, Log, Outcome};
use crate::config::Config;
use crate::error::EvalError;
use crate::registry::Registry;
use crate::resolver::Arg;
use crate::value::Value;
use std::vec::IntoIter;
use tracing::trace;

pub(crate) struct Expander<'a> {
    registry: &'a Registry,
    max_depth: usize,
    log: &'a mut Log,
}

impl<'a> Expander<'a> {
    /// Log entries of nested commands are appended to `log` as they run.
    pub fn new(registry: &'a Registry, config: &Config, log: &'a mut Log) -> Self {
        Self {
            registry,
            max_depth: config.max_depth,
            log,
        }
    }

    /// Expand a resolved argument list into the values the enclosing command
    /// receives, left to right and depth first.
    ///
    /// Returns `Err` with the outcome of the first nested command that asked
    /// to stop. Its log entry has not been recorded yet.
    pub fn expand(&mut self, args: Vec<Arg>) -> Result<Vec<Value>, Outcome> {
        let mut args = args.into_iter();
        self.expand_rest(&mut args, 1)
    }

    fn expand_rest(
        &mut self,
        args: &mut IntoIter<Arg>,
        depth: usize,
    ) -> Result<Vec<Value>, Outcome> {
        let mut values = Vec::with_capacity(args.len());
        while let Some(arg) = args.next() {
            values.push(self.expand_arg(arg, args, depth)?);
        }
        Ok(values)
    }

    fn expand_arg(
        &mut self,
        arg: Arg,
        rest: &mut IntoIter<Arg>,
        depth: usize,
    ) -> Result<Value, Outcome> {
        let command = arg
            .command_name()
            .and_then(|name| self.registry.lookup(name))
            .copied();
        let Some(command) = command else {
            return Ok(arg.into_value());
        };

        if depth > self.max_depth {
            return Err(Outcome::failure(&EvalError::DepthExceeded(self.max_depth)));
        }

        let nested = match command.arity {
            Arity::Fixed(count) => {
                let mut values = Vec::with_capacity(count);
                while values.len() < count {
                    let Some(next) = rest.next() else { break };
                    values.push(self.expand_arg(next, rest, depth + 1)?);
                }
                values
            }
            Arity::Variadic => self.expand_rest(rest, depth + 1)?,
        };

        trace!(command = command.name(), depth, args = nested.len(), "expanding nested command");
        let outcome = command.invoke(&nested);
        if outcome.stop {
            return Err(outcome);
        }
        if let Some(entry) = outcome.log {
            self.log.push(entry);
        }
        Ok(outcome.value.unwrap_or_default())
    }
}
