//! Liveness token for async work started by the shell.
//!
//! Fetch completions run after an arbitrary delay. They check the token before
//! touching the store so a torn-down shell is never written to.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that stays `true` until the owning shell is torn down.
#[derive(Clone, Debug)]
pub struct ShellLifetime {
    alive: Rc<Cell<bool>>,
}

impl ShellLifetime {
    /// Start a new lifetime in the alive state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    /// Whether the shell that issued this token is still mounted.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Mark the shell as torn down. Every clone observes the change.
    pub fn end(&self) {
        self.alive.set(false);
    }

    /// Run `apply` only while the shell is alive. Returns whether it ran.
    pub fn if_alive<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}

impl Default for ShellLifetime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_teardown() {
        let lifetime = ShellLifetime::new();
        let task_copy = lifetime.clone();
        assert!(task_copy.is_alive());
        lifetime.end();
        assert!(!task_copy.is_alive());
    }

    #[test]
    fn completions_after_teardown_are_skipped() {
        let lifetime = ShellLifetime::default();
        let mut applied = 0;
        assert!(lifetime.if_alive(|| applied += 1));
        lifetime.end();
        assert!(!lifetime.if_alive(|| applied += 1));
        assert_eq!(applied, 1);
    }

    #[test]
    fn fetched_payload_moves_into_store_while_alive() {
        let lifetime = ShellLifetime::new();
        let fetched = Some(vec!["scan-0".to_string(), "scan-1".to_string()]);
        let mut stored = None;
        assert!(lifetime.if_alive(|| stored = fetched));
        assert_eq!(
            stored,
            Some(vec!["scan-0".to_string(), "scan-1".to_string()])
        );
    }
}
