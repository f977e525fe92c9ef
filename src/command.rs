use crate::console::Console;
use anyhow::Result;

/// Object-safe trait for anything the console can dispatch a command to.
///
/// A handler receives the console itself (so it can print, terminate the loop or
/// even register more commands), the command name as typed, and the raw argument
/// string that followed it. Returning an error aborts the current step; the console
/// does not swallow it.
///
/// A blanket implementation exists for closures and functions with the matching
/// signature, so most callers never implement this trait by hand.
pub trait Handler {
    /// Run the command.
    fn call(&self, console: &mut Console, name: &str, arg: &str) -> Result<()>;
}

impl<F> Handler for F
where
    F: Fn(&mut Console, &str, &str) -> Result<()>,
{
    fn call(&self, console: &mut Console, name: &str, arg: &str) -> Result<()> {
        self(console, name, arg)
    }
}

/// Fallback used when no handler is registered under the requested name.
pub(crate) fn command_not_found(console: &mut Console, name: &str, _arg: &str) -> Result<()> {
    log::debug!("{}: no handler registered", name);
    console.print(&format!("{}: command not found", name));
    Ok(())
}

/// The built-in `logout` command: ends the interactive loop.
pub(crate) fn logout(console: &mut Console, _name: &str, _arg: &str) -> Result<()> {
    console.terminate();
    Ok(())
}

/// Splits an input line into the command token and its raw argument string.
///
/// The split happens at the first whitespace character; everything after it is
/// handed over verbatim. Returns `None` when the command token is empty, which is
/// the case for blank lines and lines starting with whitespace.
pub(crate) fn split_command_line(line: &str) -> Option<(&str, &str)> {
    let (name, arg) = match line.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((idx, c)) => (&line[..idx], &line[idx + c.len_utf8()..]),
        None => (line, ""),
    };
    if name.is_empty() { None } else { Some((name, arg)) }
}

#[cfg(test)]
mod tests {
    use super::split_command_line;

    #[test]
    fn test_split_at_first_space() {
        assert_eq!(split_command_line("hello world"), Some(("hello", "world")));
        assert_eq!(split_command_line("hello  a b"), Some(("hello", " a b")));
    }

    #[test]
    fn test_split_without_argument() {
        assert_eq!(split_command_line("logout"), Some(("logout", "")));
    }

    #[test]
    fn test_split_on_tab() {
        assert_eq!(split_command_line("set\tx=1"), Some(("set", "x=1")));
    }

    #[test]
    fn test_blank_lines_have_no_command() {
        assert_eq!(split_command_line(""), None);
        assert_eq!(split_command_line("   "), None);
        assert_eq!(split_command_line("\t"), None);
        assert_eq!(split_command_line(" hello"), None);
    }

    #[test]
    fn test_punctuation_is_a_command() {
        assert_eq!(split_command_line("?!"), Some(("?!", "")));
    }
}
