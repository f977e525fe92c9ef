use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// What a single read from an [`InputSource`] produced.
///
/// Cancel and end-of-input are ordinary outcomes rather than errors: the console
/// turns them into the configured fallback strings and dispatches those like any
/// other typed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of text, without its trailing newline.
    Line(String),
    /// The user cancelled the read (Ctrl-C).
    Cancelled,
    /// The input is exhausted (Ctrl-D, closed pipe, end of script).
    EndOfInput,
}

/// Where the console gets its lines from.
///
/// Implementations block until a line, a cancel or an end-of-input is
/// available. Any other failure is reported as an error and ends the loop.
pub trait InputSource {
    /// Show `prompt` (if the source has somewhere to show it) and read one line.
    fn read(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

impl<F> InputSource for F
where
    F: FnMut(&str) -> Result<ReadOutcome>,
{
    fn read(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self(prompt)
    }
}

/// Where the console writes command output, not-found notices and usage text.
///
/// Each call carries one message; the sink decides how to terminate it, the same
/// way a line printer would.
pub trait OutputSink {
    fn write_line(&mut self, message: &str);
}

impl<F> OutputSink for F
where
    F: FnMut(&str),
{
    fn write_line(&mut self, message: &str) {
        self(message)
    }
}

/// Interactive line editor on the controlling terminal.
///
/// The editor is created on first use, so building a console with terminal
/// defaults never touches the terminal by itself. Lines are not added to any
/// history.
#[derive(Default)]
pub struct TerminalInput {
    editor: Option<DefaultEditor>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn editor(&mut self) -> Result<&mut DefaultEditor> {
        if self.editor.is_none() {
            let editor = DefaultEditor::new().context("failed to initialise line editor")?;
            self.editor = Some(editor);
        }
        self.editor
            .as_mut()
            .context("line editor is not initialised")
    }
}

impl InputSource for TerminalInput {
    fn read(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor()?.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            // Keep the next prompt on a fresh line.
            Err(ReadlineError::Interrupted) => {
                println!();
                Ok(ReadOutcome::Cancelled)
            }
            Err(ReadlineError::Eof) => {
                println!();
                Ok(ReadOutcome::EndOfInput)
            }
            Err(err) => Err(err).context("failed to read from terminal"),
        }
    }
}

/// Writes every message to standard output followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl OutputSink for StdoutOutput {
    fn write_line(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Memory-backed input that replays a fixed script of outcomes.
///
/// Once the script runs out every further read reports end-of-input. Prompts
/// passed to [`read`](InputSource::read) are recorded and can be inspected through
/// the handle returned by [`prompts`](Self::prompts).
pub struct ScriptedInput {
    script: VecDeque<ReadOutcome>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedInput {
    /// A script where each item is a typed line.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_outcomes(lines.into_iter().map(|l| ReadOutcome::Line(l.into())))
    }

    /// A script mixing lines, cancels and end-of-input.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = ReadOutcome>) -> Self {
        Self {
            script: outcomes.into_iter().collect(),
            prompts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the prompts seen so far.
    pub fn prompts(&self) -> Rc<RefCell<Vec<String>>> {
        self.prompts.clone()
    }
}

impl InputSource for ScriptedInput {
    fn read(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(ReadOutcome::EndOfInput))
    }
}

/// Memory-backed output capturing one entry per message.
#[derive(Default)]
pub struct MemOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: create the sink and return `(sink, handle)` so the caller can
    /// read the collected messages after handing the sink to a console.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<String>>>) {
        let out = MemOutput::new();
        let rc = out.lines.clone();
        (out, rc)
    }
}

impl OutputSink for MemOutput {
    fn write_line(&mut self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_then_reports_eof() -> Result<()> {
        let mut input = ScriptedInput::from_outcomes(vec![
            ReadOutcome::Line("hello".into()),
            ReadOutcome::Cancelled,
        ]);
        assert_eq!(input.read("a> ")?, ReadOutcome::Line("hello".into()));
        assert_eq!(input.read("b> ")?, ReadOutcome::Cancelled);
        assert_eq!(input.read("c> ")?, ReadOutcome::EndOfInput);
        assert_eq!(input.read("d> ")?, ReadOutcome::EndOfInput);
        assert_eq!(*input.prompts().borrow(), vec!["a> ", "b> ", "c> ", "d> "]);
        Ok(())
    }

    #[test]
    fn test_mem_output_collects_messages() {
        let (mut out, handle) = MemOutput::with_handle();
        out.write_line("one");
        out.write_line("two\nlines");
        assert_eq!(*handle.borrow(), vec!["one", "two\nlines"]);
    }

    #[test]
    fn test_closures_are_io_functions() -> Result<()> {
        let mut seen = Vec::new();
        {
            let mut sink = |m: &str| seen.push(m.to_string());
            sink.write_line("hi");
        }
        assert_eq!(seen, vec!["hi"]);

        let mut source = |p: &str| -> Result<ReadOutcome> { Ok(ReadOutcome::Line(p.to_uppercase())) };
        assert_eq!(source.read("x")?, ReadOutcome::Line("X".into()));
        Ok(())
    }
}
