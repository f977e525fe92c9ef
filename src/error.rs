use thiserror::Error;

/// Returned when a command name is registered twice without asking for an override.
///
/// This is a configuration mistake rather than a runtime condition; callers that
/// really want to replace a handler should use `register_override`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("command '{name}' already exists")]
pub struct DuplicateCommandError {
    pub name: String,
}

/// Outcome of an argument parser that did not produce a value.
///
/// Both variants carry the text the parser wants shown to the user. The
/// adapter prints it on the console output and keeps the loop going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The user asked for help (e.g. `--help`); the payload is the usage text.
    #[error("{0}")]
    HelpRequested(String),
    /// Unknown flags, missing values or leftover tokens.
    #[error("{0}")]
    Usage(String),
}

impl ParseFailure {
    /// The diagnostic text without trailing newlines.
    pub fn message(&self) -> &str {
        match self {
            ParseFailure::HelpRequested(s) | ParseFailure::Usage(s) => s.trim_end(),
        }
    }

    pub fn is_help(&self) -> bool {
        matches!(self, ParseFailure::HelpRequested(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_command_message() {
        let err = DuplicateCommandError {
            name: "hello".to_string(),
        };
        assert_eq!(err.to_string(), "command 'hello' already exists");
    }

    #[test]
    fn test_parse_failure_message_trims_trailing_newlines() {
        let f = ParseFailure::Usage("Unrecognized argument: --bogus\n\n".to_string());
        assert_eq!(f.message(), "Unrecognized argument: --bogus");
        assert!(!f.is_help());
        assert!(ParseFailure::HelpRequested("Usage: x".into()).is_help());
    }
}
