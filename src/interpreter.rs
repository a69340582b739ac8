use crate::command::{Log, LogEntry, Outcome, Severity};
use crate::config::Config;
use crate::env::{self, Environment};
use crate::error::EvalError;
use crate::expander::Expander;
use crate::preprocess;
use crate::program::Program;
use crate::registry::Registry;
use crate::render;
use crate::resolver;
use crate::value::Value;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use tracing::{debug, info};

/// Evaluates programs against a command registry.
///
/// The interpreter itself holds no per-program state: every call to
/// [`Interpreter::evaluate`] starts from fresh variable bindings and an empty
/// log, so one interpreter can run any number of programs.
///
/// Example
/// ```
/// use eel::Interpreter;
/// let eel = Interpreter::default();
/// assert_eq!(eel.parse("print add 1 2 is 3!!!"), vec!["0,3 is 3!!!"]);
/// assert_eq!(eel.parse(""), vec!["0,no output"]);
/// ```
pub struct Interpreter {
    registry: Registry,
    config: Config,
}

impl Interpreter {
    /// Create an interpreter with a custom command set.
    pub fn new(registry: Registry, config: Config) -> Self {
        Self { registry, config }
    }

    /// All builtins, with custom limits.
    pub fn with_config(config: Config) -> Self {
        Self::new(Registry::default(), config)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Invoke a command by name on fully resolved arguments.
    ///
    /// Unknown names are fatal: the outcome is an error entry with `stop` set.
    pub fn dispatch(&self, name: &str, args: &[Value]) -> Outcome {
        match self.registry.lookup(name) {
            Some(command) => {
                debug!(command = name, args = args.len(), "dispatching");
                command.invoke(args)
            }
            None => Outcome::failure(&EvalError::UnknownCommand(name.to_string())),
        }
    }

    /// Run one line: resolve variables, expand nested commands, dispatch.
    ///
    /// Log entries of nested commands go straight into `log`. The entry of
    /// the line's own command comes back in the returned outcome.
    fn run_line(&self, line: &str, env: &Environment, log: &mut Log) -> Outcome {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Outcome::default();
        };
        if self.registry.lookup(name).is_none() {
            return self.dispatch(name, &[]);
        }

        let raw: Vec<&str> = tokens.collect();
        let args = resolver::resolve(&raw, env);
        match Expander::new(&self.registry, &self.config, log).expand(args) {
            Ok(values) => self.dispatch(name, &values),
            Err(stopped) => stopped,
        }
    }

    /// Evaluate a whole program and return its log.
    ///
    /// Lines run in order until one of them produces a stop signal. A program
    /// that logs nothing yields a single info entry saying so, never an empty
    /// log.
    pub fn evaluate(&self, program: &Program) -> Log {
        let env = Environment::new();
        let mut log = Log::new();

        for (number, line) in preprocess::clean_numbered(program.lines()) {
            let outcome = self.run_line(line, &env, &mut log);
            if let Some(entry) = outcome.log {
                log.push(entry);
            }
            if outcome.stop {
                info!(line = number, "program halted");
                break;
            }
        }

        if log.is_empty() {
            log.push(LogEntry::new(
                Severity::Info,
                self.config.no_output_message.clone(),
            ));
        }
        log
    }

    /// Evaluate a program and return its log in wire form,
    /// one `"<severity code>,<message>"` string per entry.
    pub fn parse(&self, program: impl Into<Program>) -> Vec<String> {
        self.evaluate(&program.into())
            .iter()
            .map(LogEntry::encode)
            .collect()
    }

    /// One-line summary shown when the interactive loop starts.
    pub fn banner(&self) -> String {
        format!(
            "eel {} ({} commands, nesting limit {}); :quit to exit",
            env::VERSION,
            self.registry().len(),
            self.config().max_depth,
        )
    }

    /// Interactive loop. Every entered line runs as a program of its own.
    pub fn repl(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("{}", self.banner());

        loop {
            match rl.readline("eel> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line == ":quit" {
                        break;
                    }
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;
                    for entry in self.evaluate(&Program::from(line)) {
                        println!("{}", render::render(&entry));
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// All builtins with the default limits.
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}
