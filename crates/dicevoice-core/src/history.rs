//! Snapshot-based undo/redo.

use std::mem;

/// A live value plus the stacks of values it replaced (`past`) and values
/// that were undone (`future`).
///
/// Every stored snapshot is an owned `T`; nothing here hands out mutable
/// access to a stored snapshot, so a snapshot is never modified after it is
/// pushed.
#[derive(Debug, Clone, Default)]
pub struct History<T> {
    current: T,
    past: Vec<T>,
    future: Vec<T>,
}

impl<T> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// Replace the live value, keeping the old one as the undo target.
    /// Clears anything that could have been redone.
    pub fn commit(&mut self, next: T) {
        let previous = mem::replace(&mut self.current, next);
        self.past.push(previous);
        self.future.clear();
    }

    /// Step back one commit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let undone = mem::replace(&mut self.current, previous);
                self.future.push(undone);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone commit. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let replaced = mem::replace(&mut self.current, next);
                self.past.push(replaced);
                true
            }
            None => false,
        }
    }

    /// Replace the live value and forget all history.
    pub fn reset(&mut self, value: T) {
        self.current = value;
        self.past.clear();
        self.future.clear();
    }

    /// Drop both stacks, keeping the live value.
    pub fn forget(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_and_undo() {
        let mut history = History::new(vec![1]);
        history.commit(vec![1, 2]);
        history.commit(vec![1, 2, 3]);
        assert_eq!(history.undo_depth(), 2);

        assert!(history.undo());
        assert_eq!(history.current(), &vec![1, 2]);
        assert_eq!(history.redo_depth(), 1);

        assert!(history.undo());
        assert_eq!(history.current(), &vec![1]);
        assert!(!history.undo());
        assert_eq!(history.current(), &vec![1]);
    }

    #[test]
    fn test_redo_restores_undone_values() {
        let mut history = History::new(0);
        history.commit(1);
        history.commit(2);
        history.undo();
        history.undo();

        assert!(history.redo());
        assert_eq!(*history.current(), 1);
        assert!(history.redo());
        assert_eq!(*history.current(), 2);
        assert!(!history.redo());
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_commit_clears_future() {
        let mut history = History::new("a");
        history.commit("b");
        history.undo();
        assert_eq!(history.redo_depth(), 1);

        history.commit("c");
        assert_eq!(history.redo_depth(), 0);
        assert!(!history.redo());
        assert_eq!(*history.current(), "c");
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut history = History::new(5);
        history.commit(6);
        history.commit(7);
        history.undo();
        history.reset(0);
        assert_eq!(*history.current(), 0);
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_forget_keeps_current() {
        let mut history = History::new(1);
        history.commit(2);
        history.forget();
        assert_eq!(*history.current(), 2);
        assert!(!history.undo());
    }
}
