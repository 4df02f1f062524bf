//! LIFO stack
//!
//! Items are stored bottom to top; snapshots list them in the same order.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T: Clone> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Push onto the top and return the new contents
    pub fn push(&mut self, item: T) -> Vec<T> {
        self.items.push(item);
        self.items()
    }

    /// Remove the top item; `None` when the stack is already empty
    pub fn pop(&mut self) -> Option<Vec<T>> {
        self.items.pop()?;
        Some(self.items())
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) -> Vec<T> {
        self.items.clear();
        self.items()
    }

    pub fn reverse(&mut self) -> Vec<T> {
        self.items.reverse();
        self.items()
    }

    pub fn sort_by<F>(&mut self, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
        self.items()
    }

    pub fn items(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone + Ord> Stack<T> {
    /// Sort ascending, bottom to top
    pub fn sort(&mut self) -> Vec<T> {
        self.sort_by(T::cmp)
    }
}

impl<T: Clone> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_peek() {
        let mut stack = Stack::new();
        assert_eq!(stack.push(1), vec![1]);
        assert_eq!(stack.push(2), vec![1, 2]);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(vec![1]));
        assert_eq!(stack.size(), 1);
        assert_eq!(stack.pop(), Some(vec![]));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_reverse_and_sort() {
        let mut stack = Stack::new();
        for v in [3, 1, 2] {
            stack.push(v);
        }
        assert_eq!(stack.reverse(), vec![2, 1, 3]);
        assert_eq!(stack.sort(), vec![1, 2, 3]);
        assert_eq!(stack.sort_by(|a, b| b.cmp(a)), vec![3, 2, 1]);
        assert_eq!(stack.clear(), Vec::<i32>::new());
    }
}
