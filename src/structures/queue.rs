//! FIFO queue
//!
//! Enqueue at the back, dequeue from the front. Snapshots list items front
//! to back.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T: Clone> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) -> Vec<T> {
        self.items.push_back(item);
        self.items()
    }

    /// Remove the front item; `None` when the queue is already empty
    pub fn dequeue(&mut self) -> Option<Vec<T>> {
        self.items.pop_front()?;
        Some(self.items())
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
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
        self.items.make_contiguous().reverse();
        self.items()
    }

    pub fn items(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Clone> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.enqueue('c'), vec!['a', 'b', 'c']);
        assert_eq!(queue.front(), Some(&'a'));
        assert_eq!(queue.dequeue(), Some(vec!['b', 'c']));
        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn test_empty_dequeue_is_sentinel() {
        let mut queue: Queue<i32> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.front(), None);
    }

    #[test]
    fn test_reverse() {
        let mut queue = Queue::new();
        for v in 1..=4 {
            queue.enqueue(v);
        }
        queue.dequeue();
        queue.enqueue(5);
        assert_eq!(queue.reverse(), vec![5, 4, 3, 2]);
        assert_eq!(queue.clear(), Vec::<i32>::new());
    }
}
