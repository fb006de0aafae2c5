//! Evaluation stack
//!
//! This module provides [`Stack`], the LIFO container used for evaluation
//! values and, during infix conversion, for pending operator tokens.
//!
//! The stack is backed by a growable array rather than a linked node chain:
//! push and pop are amortized O(1) and the live size is simply the length of
//! the backing storage.  `pop` and `peek` on an empty stack return `None`
//! rather than failing; callers must check before relying on a value.

use std::fmt::Display;

/// A generic last-in-first-out stack.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Push a value onto the top of the stack
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Pop the most recently pushed value, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Look at the top value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Display> Stack<T> {
    /// Render the stack contents bottom-to-top, oldest first, with an
    /// explicit `(top)` marker next to the most recently pushed element.
    pub fn render_string(&self) -> String {
        if self.items.is_empty() {
            return String::from("(empty)");
        }
        let mut out = self
            .items
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(" (top)");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_peek_sees_last_pushed() {
        let mut stack = Stack::new();
        for n in 1..=5 {
            stack.push(n);
            assert_eq!(stack.peek(), Some(&n));
            assert_eq!(stack.len(), n as usize);
        }
    }

    #[test]
    fn pop_returns_lifo_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn pop_on_empty_stack_returns_none() {
        let mut stack: Stack<i64> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_is_nondestructive() {
        let mut stack = Stack::new();
        stack.push(42);
        assert_eq!(stack.peek(), Some(&42));
        assert_eq!(stack.peek(), Some(&42));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn render_string_marks_top_element() {
        let mut stack = Stack::new();
        stack.push(5);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.render_string(), "5 1 2 (top)");
    }

    #[test]
    fn render_string_on_empty_stack() {
        let stack: Stack<i64> = Stack::new();
        assert_eq!(stack.render_string(), "(empty)");
    }
}
