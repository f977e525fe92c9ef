use crate::command::Handler;
use crate::error::DuplicateCommandError;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Mapping from command name to handler.
///
/// Names are matched exactly and case-sensitively. Listing order is the sorted
/// order of the names, so it is stable for the lifetime of the registry.
/// There is intentionally no way to remove a command.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Rc<dyn Handler>>,
}

impl CommandRegistry {
    /// An empty registry. Note that [`Console`](crate::Console) pre-registers `logout`,
    /// a bare registry does not.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under `name`.
    ///
    /// Fails if the name is already taken; use [`register_override`](Self::register_override)
    /// to replace an existing handler.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<&mut Self, DuplicateCommandError> {
        let name = name.into();
        if self.commands.contains_key(&name) {
            return Err(DuplicateCommandError { name });
        }
        log::debug!("registering command '{}'", name);
        self.commands.insert(name, Rc::new(handler));
        Ok(self)
    }

    /// Add a handler under `name`, replacing any previous one.
    pub fn register_override(
        &mut self,
        name: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        let name = name.into();
        if self.commands.insert(name.clone(), Rc::new(handler)).is_some() {
            log::debug!("command '{}' overridden", name);
        } else {
            log::debug!("registering command '{}'", name);
        }
        self
    }

    /// All registered command names.
    pub fn list(&self) -> BTreeSet<String> {
        self.commands.keys().cloned().collect()
    }

    /// Registered names starting with `prefix`, or every name when `prefix` is `None`.
    pub fn find(&self, prefix: Option<&str>) -> BTreeSet<String> {
        match prefix {
            None => self.list(),
            Some(prefix) => self
                .commands
                .keys()
                .filter(|name| name.starts_with(prefix))
                .cloned()
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Shared handle to the handler for `name`.
    ///
    /// The handle is cloned out so the caller can run it while lending the
    /// owning console mutably.
    pub(crate) fn get(&self, name: &str) -> Option<Rc<dyn Handler>> {
        self.commands.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;

    fn noop(_: &mut Console, _: &str, _: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        for name in ["help", "hello", "history", "logout", "Hello"] {
            reg.register(name, noop).unwrap();
        }
        reg
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut reg = CommandRegistry::new();
        reg.register("hello", noop).unwrap();
        let err = reg.register("hello", noop).err().unwrap();
        assert_eq!(err.name, "hello");
    }

    #[test]
    fn test_register_override_replaces() {
        let mut reg = CommandRegistry::new();
        reg.register("hello", noop).unwrap();
        reg.register_override("hello", noop);
        reg.register_override("fresh", noop);
        assert_eq!(reg.list(), names(&["fresh", "hello"]));
    }

    #[test]
    fn test_register_chains() {
        let mut reg = CommandRegistry::new();
        reg.register("a", noop).unwrap().register("b", noop).unwrap();
        assert!(reg.contains("a"));
        assert!(reg.contains("b"));
        assert!(!reg.contains("A"));
    }

    #[test]
    fn test_find_by_prefix() {
        let reg = sample();
        assert_eq!(reg.find(Some("he")), names(&["hello", "help"]));
        assert_eq!(reg.find(Some("H")), names(&["Hello"]));
        assert_eq!(reg.find(Some("hello")), names(&["hello"]));
    }

    #[test]
    fn test_find_empty_prefix_and_none_are_list() {
        let reg = sample();
        assert_eq!(reg.find(Some("")), reg.list());
        assert_eq!(reg.find(None), reg.list());
        assert_eq!(reg.list().len(), 5);
    }

    #[test]
    fn test_find_nothing_matches() {
        let reg = sample();
        assert!(reg.find(Some("zzz")).is_empty());
        assert!(reg.find(Some("hello!")).is_empty());
    }

    #[test]
    fn test_find_is_subset_of_list() {
        let reg = sample();
        let all = reg.list();
        for prefix in ["", "h", "he", "hel", "x", "logout"] {
            let found = reg.find(Some(prefix));
            assert!(found.is_subset(&all));
            let expected: BTreeSet<String> = all
                .iter()
                .filter(|n| n.starts_with(prefix))
                .cloned()
                .collect();
            assert_eq!(found, expected, "prefix {:?}", prefix);
        }
    }
}
