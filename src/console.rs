use crate::command::{self, Handler};
use crate::config::PromptConfig;
use crate::error::DuplicateCommandError;
use crate::io_adapters::{InputSource, OutputSink, ReadOutcome, StdoutOutput, TerminalInput};
use crate::registry::CommandRegistry;
use anyhow::Result;
use std::collections::BTreeSet;

/// A read-dispatch loop over a registry of named commands.
///
/// The console owns its [`CommandRegistry`], the input and output functions and
/// a `terminated` flag. Each [`step`](Self::step) clears the flag, reads a line,
/// splits it into a command and its argument string and dispatches it.
/// [`run`](Self::run) repeats steps until a handler sets the flag during the step
/// it was called in.
///
/// `logout` is registered at construction; it terminates the loop and is also
/// what end-of-input maps to by default.
///
/// Example
/// ```
/// use concap::{Console, MemOutput, PromptConfig, ScriptedInput};
///
/// let (out, lines) = MemOutput::with_handle();
/// let mut console = Console::with_io(ScriptedInput::new(["hello world", "nope"]), out);
/// console
///     .register("hello", |c: &mut Console, _name: &str, arg: &str| -> anyhow::Result<()> {
///         c.print(&format!("hello, {}", arg));
///         Ok(())
///     })
///     .unwrap();
/// console.run(&PromptConfig::default()).unwrap();
/// assert_eq!(*lines.borrow(), vec!["hello, world", "nope: command not found"]);
/// ```
pub struct Console {
    registry: CommandRegistry,
    input: Box<dyn InputSource>,
    output: Box<dyn OutputSink>,
    terminated: bool,
}

impl Console {
    /// A console reading from the terminal and printing to standard output.
    pub fn new() -> Self {
        Self::with_io(TerminalInput::new(), StdoutOutput)
    }

    /// A console driven by the given input and output functions.
    pub fn with_io(input: impl InputSource + 'static, output: impl OutputSink + 'static) -> Self {
        let mut registry = CommandRegistry::new();
        registry.register_override("logout", command::logout);
        Self {
            registry,
            input: Box::new(input),
            output: Box::new(output),
            terminated: false,
        }
    }

    /// Register `handler` under `name`. Fails if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<&mut Self, DuplicateCommandError> {
        self.registry.register(name, handler)?;
        Ok(self)
    }

    /// Register `handler` under `name`, replacing whatever was there (including `logout`).
    pub fn register_override(
        &mut self,
        name: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        self.registry.register_override(name, handler);
        self
    }

    pub fn list(&self) -> BTreeSet<String> {
        self.registry.list()
    }

    /// Command names starting with `prefix`; all of them when `prefix` is `None`.
    pub fn find(&self, prefix: Option<&str>) -> BTreeSet<String> {
        self.registry.find(prefix)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Write a message to the console output.
    pub fn print(&mut self, message: &str) {
        self.output.write_line(message);
    }

    /// Ask the loop to stop after the current step.
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Read one line, substituting `interrupt` for a cancelled read and `eof` for
    /// end-of-input.
    ///
    /// This is the read performed by [`step`](Self::step); handlers may call it
    /// directly to implement a nested prompt.
    pub fn input(&mut self, prompt: &str, interrupt: &str, eof: &str) -> Result<String> {
        Ok(match self.input.read(prompt)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Cancelled => interrupt.to_string(),
            ReadOutcome::EndOfInput => eof.to_string(),
        })
    }

    /// Run the handler registered under `name` with `arg`.
    ///
    /// Unknown names print `"<name>: command not found"` and succeed. Errors
    /// returned by the handler are passed through untouched.
    pub fn dispatch(&mut self, name: &str, arg: &str) -> Result<()> {
        match self.registry.get(name) {
            Some(handler) => {
                log::debug!("dispatching '{}' with argument {:?}", name, arg);
                handler.call(self, name, arg)
            }
            None => command::command_not_found(self, name, arg),
        }
    }

    /// Clear the termination flag, read one line and dispatch it.
    ///
    /// A line whose command token is empty (blank, whitespace-only or starting
    /// with whitespace) is ignored.
    pub fn step(&mut self, config: &PromptConfig) -> Result<()> {
        self.terminated = false;
        let line = self.input(&config.prompt, &config.interrupt, &config.eof)?;
        log::trace!("read line {:?}", line);
        match command::split_command_line(&line) {
            Some((name, arg)) => self.dispatch(name, arg),
            None => {
                log::debug!("no command on line, skipping");
                Ok(())
            }
        }
    }

    /// Run steps until one of them terminates the console.
    ///
    /// At least one step is always taken. The first error from a step (an input
    /// failure or a failing handler) ends the loop and is returned.
    pub fn run(&mut self, config: &PromptConfig) -> Result<()> {
        log::info!("console started with {} command(s)", self.registry.list().len());
        loop {
            self.step(config)?;
            if self.terminated {
                break;
            }
        }
        log::info!("console terminated");
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
