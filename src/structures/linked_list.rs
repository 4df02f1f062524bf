//! Singly linked list with a simulated tail cycle
//!
//! Nodes live in an [`Arena`] and link forward by [`NodeId`]. The real chain
//! is always acyclic, so `to_vec`, `reverse` and friends terminate.
//!
//! A cycle is modelled by `cycle_to_index` alone: only [`LinkedList::next_index`]
//! (and Floyd's detection built on it) treats the tail as pointing back to
//! that index.
//!
//! # Cycle invariant
//!
//! A cycle index is kept only while `len >= 2` and `index < len`. Any
//! structural change that breaks this drops the cycle.

use super::{Arena, NodeId};
use crate::frame::{FloydEvent, FloydFrame};

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<NodeId>,
    len: usize,
    cycle_to_index: Option<usize>,
}

impl<T: Clone + PartialEq> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            len: 0,
            cycle_to_index: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Ids are only ever taken from links inside this list
    fn node(&self, id: NodeId) -> &ListNode<T> {
        &self.nodes[id]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut ListNode<T> {
        &mut self.nodes[id]
    }

    fn ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.node(id).next;
        }
        ids
    }

    fn tail(&self) -> Option<NodeId> {
        self.ids().last().copied()
    }

    pub fn append(&mut self, value: T) -> Vec<T> {
        let id = self.nodes.alloc(ListNode { value, next: None });
        match self.tail() {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.len += 1;
        self.to_vec()
    }

    pub fn prepend(&mut self, value: T) -> Vec<T> {
        let id = self.nodes.alloc(ListNode {
            value,
            next: self.head,
        });
        self.head = Some(id);
        self.len += 1;
        self.to_vec()
    }

    /// Unlink the first node holding `value`; absent values are a no-op
    pub fn delete(&mut self, value: &T) -> Vec<T> {
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;

        while let Some(id) = current {
            let next = self.node(id).next;
            if self.node(id).value == *value {
                match prev {
                    Some(p) => self.node_mut(p).next = next,
                    None => self.head = next,
                }
                self.nodes.release(id);
                self.len -= 1;
                self.revalidate_cycle();
                break;
            }
            prev = Some(id);
            current = next;
        }

        self.to_vec()
    }

    /// Index of the first node holding `value`
    pub fn search(&self, value: &T) -> Option<usize> {
        self.ids()
            .into_iter()
            .position(|id| self.node(id).value == *value)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.ids()
            .into_iter()
            .map(|id| self.node(id).value.clone())
            .collect()
    }

    pub fn reverse(&mut self) -> Vec<T> {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.node_mut(id);
            current = node.next;
            node.next = prev;
            prev = Some(id);
        }
        self.head = prev;
        self.to_vec()
    }

    /// Middle value via slow/fast pointers; the second middle for even lengths
    pub fn find_middle(&self) -> Option<T> {
        let mut slow = self.head?;
        let mut fast = self.head;

        while let Some(f) = fast {
            let Some(after) = self.node(f).next else {
                break;
            };
            fast = self.node(after).next;
            slow = self.node(slow).next?;
        }

        Some(self.node(slow).value.clone())
    }

    pub fn clear(&mut self) -> Vec<T> {
        self.nodes.clear();
        self.head = None;
        self.len = 0;
        self.cycle_to_index = None;
        Vec::new()
    }

    /// Simulate the tail linking back to `index`.
    ///
    /// Returns the accepted index, or `None` when the request is rejected (in
    /// which case any previous cycle is dropped as well).
    pub fn create_tail_cycle_to_index(&mut self, index: usize) -> Option<usize> {
        if self.len < 2 || index >= self.len {
            tracing::warn!(index, len = self.len, "rejected tail cycle request");
            self.cycle_to_index = None;
            return None;
        }
        self.cycle_to_index = Some(index);
        self.cycle_to_index
    }

    pub fn remove_cycle(&mut self) {
        self.cycle_to_index = None;
    }

    pub fn cycle_to_index(&self) -> Option<usize> {
        self.cycle_to_index
    }

    fn revalidate_cycle(&mut self) {
        if let Some(index) = self.cycle_to_index {
            if self.len < 2 || index >= self.len {
                self.cycle_to_index = None;
            }
        }
    }

    /// Simulated next pointer: `i + 1`, or the cycle target for the tail
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.cycle_to_index;
        }
        Some(index + 1)
    }

    /// Floyd's tortoise and hare over the simulated next pointer.
    ///
    /// Stops with a `done` frame after `max_steps` moves even if the pointers
    /// never meet. An empty list records nothing.
    pub fn detect_cycle_floyd_steps(&self, max_steps: usize) -> Vec<FloydFrame> {
        let mut steps = Vec::new();
        if self.is_empty() {
            return steps;
        }

        let push = |steps: &mut Vec<FloydFrame>, slow, fast, kind, description: String| {
            steps.push(FloydFrame {
                slow,
                fast,
                kind,
                description,
            });
        };

        let mut slow = Some(0);
        let mut fast = Some(0);
        push(
            &mut steps,
            slow,
            fast,
            FloydEvent::Init,
            "Start Floyd cycle detection".to_string(),
        );

        for _ in 0..max_steps {
            slow = slow.and_then(|i| self.next_index(i));
            fast = fast
                .and_then(|i| self.next_index(i))
                .and_then(|i| self.next_index(i));

            push(
                &mut steps,
                slow,
                fast,
                FloydEvent::Move,
                format!("Move slow to {}, fast to {}", describe(slow), describe(fast)),
            );

            let (Some(s), Some(f)) = (slow, fast) else {
                push(&mut steps, slow, fast, FloydEvent::Done, "No cycle detected".to_string());
                return steps;
            };

            if s == f {
                push(
                    &mut steps,
                    slow,
                    fast,
                    FloydEvent::Meet,
                    format!("Pointers meet at index {} (cycle detected)", s),
                );
                push(&mut steps, slow, fast, FloydEvent::Done, "Cycle detected".to_string());
                return steps;
            }
        }

        push(
            &mut steps,
            slow,
            fast,
            FloydEvent::Done,
            "Stopped early (max steps reached)".to_string(),
        );
        steps
    }
}

fn describe(pointer: Option<usize>) -> String {
    pointer.map_or_else(|| "null".to_string(), |i| i.to_string())
}

impl<T: Clone + PartialEq> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i64]) -> LinkedList<i64> {
        let mut list = LinkedList::new();
        for &v in values {
            list.append(v);
        }
        list
    }

    #[test]
    fn test_append_prepend_delete() {
        let mut list = list_of(&[2, 3]);
        assert_eq!(list.prepend(1), vec![1, 2, 3]);
        assert_eq!(list.delete(&2), vec![1, 3]);
        assert_eq!(list.delete(&9), vec![1, 3]);
        assert_eq!(list.delete(&1), vec![3]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.append(4), vec![3, 4]);
    }

    #[test]
    fn test_search_reverse_middle() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.search(&3), Some(2));
        assert_eq!(list.search(&7), None);
        assert_eq!(list.find_middle(), Some(3));
        assert_eq!(list.reverse(), vec![4, 3, 2, 1]);
        list.append(0);
        assert_eq!(list.find_middle(), Some(2));
        assert_eq!(LinkedList::<i64>::new().find_middle(), None);
    }

    #[test]
    fn test_cycle_request_validation() {
        let mut list = list_of(&[1]);
        assert_eq!(list.create_tail_cycle_to_index(0), None);
        list.append(2);
        assert_eq!(list.create_tail_cycle_to_index(2), None);
        assert_eq!(list.create_tail_cycle_to_index(1), Some(1));
        assert_eq!(list.next_index(1), Some(1));
        list.delete(&2);
        assert_eq!(list.cycle_to_index(), None);
    }

    #[test]
    fn test_floyd_meets_on_cycle() {
        let mut list = list_of(&[10, 20, 30, 40]);
        list.create_tail_cycle_to_index(1);
        let steps = list.detect_cycle_floyd_steps(50);
        let moves = steps.iter().filter(|s| s.kind == FloydEvent::Move).count();
        assert!(moves <= 8);
        assert_eq!(steps[steps.len() - 2].kind, FloydEvent::Meet);
        assert_eq!(steps.last().unwrap().description, "Cycle detected");
    }

    #[test]
    fn test_floyd_without_cycle() {
        let list = list_of(&[1, 2, 3]);
        let steps = list.detect_cycle_floyd_steps(50);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, FloydEvent::Done);
        assert_eq!(last.description, "No cycle detected");
        assert!(steps.iter().all(|s| s.kind != FloydEvent::Meet));
    }

    #[test]
    fn test_floyd_step_cap() {
        let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
        list.create_tail_cycle_to_index(0);
        let steps = list.detect_cycle_floyd_steps(1);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].description, "Stopped early (max steps reached)");
    }

    #[test]
    fn test_floyd_empty_list() {
        assert!(LinkedList::<i64>::new().detect_cycle_floyd_steps(10).is_empty());
    }
}
