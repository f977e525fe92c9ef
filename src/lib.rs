//! A tiny, embeddable console: named commands, a line reader and a dispatch loop.
//!
//! Register handlers on a [`Console`] under command names, then call
//! [`Console::run`]. Every line read is split at its first whitespace into a
//! command name and a raw argument string, and the matching handler is called.
//! Unknown commands are reported on the console output, and the built-in
//! `logout` command (which end-of-input maps to by default) ends the loop.
//!
//! Handlers that prefer typed flags over raw strings can be wrapped with
//! [`adapter::wrap`]; parse errors and `--help` are printed on the console
//! output instead of exiting the process.
//!
//! Input and output are injectable (see [`io_adapters`]), so a console can be
//! driven by a script or any non-terminal transport as easily as by a user.

pub mod adapter;
pub mod command;
mod config;
mod console;
mod error;
pub mod io_adapters;
mod registry;

pub use adapter::{ArgParser, ArghParser, argh_parser, wrap};
pub use command::Handler;
pub use config::PromptConfig;
pub use console::Console;
pub use error::{DuplicateCommandError, ParseFailure};
pub use io_adapters::{
    InputSource, MemOutput, OutputSink, ReadOutcome, ScriptedInput, StdoutOutput, TerminalInput,
};
pub use registry::CommandRegistry;

/// Crate version, as reported by the demo binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
