//! Structured arguments for console commands.
//!
//! A plain [`Handler`] receives the raw argument string. [`wrap`] turns a handler
//! that wants a typed value into a plain one: the argument string is split on
//! whitespace, handed to an [`ArgParser`], and the result is passed on. Help
//! requests and usage errors never leave the adapter. Their text is printed on
//! the console output and the loop carries on, so a bad flag can't take down
//! a long-running session.
//!
//! Any [`argh::FromArgs`] type can be used as a parser through [`ArghParser`].

use crate::command::Handler;
use crate::console::Console;
use crate::error::ParseFailure;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::marker::PhantomData;

/// Something that turns a command's tokens into a structured value.
pub trait ArgParser {
    type Output;

    /// Parse `tokens` given to `command`. `command` is only used for usage text.
    fn parse(&self, command: &str, tokens: &[&str]) -> Result<Self::Output, ParseFailure>;
}

/// [`ArgParser`] backed by an [`argh::FromArgs`] type.
///
/// argh rejects unknown flags and leftover positional tokens on its own, and
/// reports `--help` as an early exit with a success status.
pub struct ArghParser<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for ArghParser<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: FromArgs> ArgParser for ArghParser<T> {
    type Output = T;

    fn parse(&self, command: &str, tokens: &[&str]) -> Result<T, ParseFailure> {
        T::from_args(&[command], tokens).map_err(|EarlyExit { output, status }| match status {
            Ok(()) => ParseFailure::HelpRequested(output),
            Err(()) => ParseFailure::Usage(output),
        })
    }
}

/// Shorthand for `ArghParser::<T>::default()`.
pub fn argh_parser<T: FromArgs>() -> ArghParser<T> {
    ArghParser::default()
}

/// A handler taking parsed arguments, adapted to the plain [`Handler`] signature.
///
/// Built by [`wrap`].
pub struct Wrapped<P, F> {
    parser: P,
    handler: F,
}

/// Adapt `handler`, which expects `P::Output`, into a [`Handler`] that parses the
/// raw argument string with `parser` first.
///
/// On a parse failure the diagnostic is printed through [`Console::print`] and the
/// wrapped handler is not called.
pub fn wrap<P, F>(parser: P, handler: F) -> Wrapped<P, F>
where
    P: ArgParser,
    F: Fn(&mut Console, &str, P::Output) -> Result<()>,
{
    Wrapped { parser, handler }
}

impl<P, F> Handler for Wrapped<P, F>
where
    P: ArgParser,
    F: Fn(&mut Console, &str, P::Output) -> Result<()>,
{
    fn call(&self, console: &mut Console, name: &str, arg: &str) -> Result<()> {
        let tokens: Vec<&str> = arg.split_whitespace().collect();
        match self.parser.parse(name, &tokens) {
            Ok(parsed) => (self.handler)(console, name, parsed),
            Err(failure) => {
                if failure.is_help() {
                    log::debug!("{}: help requested", name);
                } else {
                    log::debug!("{}: rejected arguments {:?}", name, tokens);
                }
                console.print(failure.message());
                Ok(())
            }
        }
    }
}
