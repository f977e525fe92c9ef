/// Prompt text and the strings substituted for cancelled or exhausted input.
///
/// `interrupt` is used as the typed line when the user cancels a read and `eof`
/// when the input runs out. The default `eof` is `"logout"`, so an unattended
/// end-of-input ends the loop through the built-in `logout` command; the default
/// `interrupt` is empty, which simply shows the prompt again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub prompt: String,
    pub interrupt: String,
    pub eof: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            interrupt: String::new(),
            eof: "logout".to_string(),
        }
    }
}

impl PromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_interrupt(mut self, interrupt: impl Into<String>) -> Self {
        self.interrupt = interrupt.into();
        self
    }

    pub fn with_eof(mut self, eof: impl Into<String>) -> Self {
        self.eof = eof.into();
        self
    }
}
