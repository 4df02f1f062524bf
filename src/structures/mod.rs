//! Containers driven by the data-structure visualizers
//!
//! - [`stack`]: LIFO stack
//! - [`queue`]: FIFO queue
//! - [`linked_list`]: singly linked list with a simulated tail cycle
//! - [`binary_tree`]: binary tree with level-order, BST and AVL insertion
//!
//! Mutators return the externally visible representation of the container
//! after the change (a `Vec` copy, or the level-order serialization for
//! trees), which is what a renderer consumes. Linked nodes live in an arena
//! and refer to each other by [`NodeId`], so removal and rotation never
//! leave a dangling link.
//!
//! Containers are single-writer: one session owns one instance and passes
//! it explicitly to whatever mutates it.

pub mod binary_tree;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use binary_tree::BinaryTree;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;

use std::ops::{Index, IndexMut};

/// Handle to a node stored in a container's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Slot storage with free-list recycling, shared by the linked containers
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn alloc(&mut self, node: N) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn release(&mut self, id: NodeId) -> Option<N> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id.0),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id {}", id.0),
        }
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}
