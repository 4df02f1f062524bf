//! Binary tree with three insertion disciplines over one node shape
//!
//! - [`BinaryTree::insert`] fills the first free child slot in level order
//! - [`BinaryTree::insert_bst`] descends by value, equal values to the right
//! - [`BinaryTree::insert_avl`] is BST insertion plus rotations
//!
//! Every node caches its height; all mutators keep the cache exact, so
//! [`BinaryTree::height`] and the AVL balance checks are O(1) per node.
//!
//! [`BinaryTree::serialize`] uses the implicit heap layout: the root sits at
//! index 0 and the children of index `i` at `2i + 1` and `2i + 2`. Missing
//! nodes are `None` and trailing `None`s are trimmed.

use super::{Arena, NodeId};
use std::cmp::Ordering;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    height: usize,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Arena<TreeNode<T>>,
    root: Option<NodeId>,
    len: usize,
}

impl<T: Clone + Ord> BinaryTree<T> {
    pub fn new() -> Self {
        BinaryTree {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.nodes[id].height)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[id].height = height;
    }

    fn balance_factor(&self, id: NodeId) -> isize {
        let node = &self.nodes[id];
        self.height_of(node.left) as isize - self.height_of(node.right) as isize
    }

    fn alloc_leaf(&mut self, value: T) -> NodeId {
        self.len += 1;
        self.nodes.alloc(TreeNode::leaf(value))
    }

    // Level order

    /// Attach `value` at the first free child slot, scanning level by level
    pub fn insert(&mut self, value: T) -> Vec<Option<T>> {
        let Some(root) = self.root else {
            self.root = Some(self.alloc_leaf(value));
            return self.serialize();
        };

        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let (left, right) = (self.nodes[id].left, self.nodes[id].right);
            match left {
                Some(left) => queue.push_back(left),
                None => {
                    let leaf = self.alloc_leaf(value);
                    self.nodes[id].left = Some(leaf);
                    break;
                }
            }
            match right {
                Some(right) => queue.push_back(right),
                None => {
                    let leaf = self.alloc_leaf(value);
                    self.nodes[id].right = Some(leaf);
                    break;
                }
            }
        }

        self.refresh_heights(Some(root));
        self.serialize()
    }

    fn refresh_heights(&mut self, id: Option<NodeId>) -> usize {
        let Some(id) = id else {
            return 0;
        };
        let (left, right) = (self.nodes[id].left, self.nodes[id].right);
        let height = 1 + self.refresh_heights(left).max(self.refresh_heights(right));
        self.nodes[id].height = height;
        height
    }

    // BST

    pub fn insert_bst(&mut self, value: T) -> Vec<Option<T>> {
        let root = self.insert_bst_at(self.root, value);
        self.root = Some(root);
        self.serialize()
    }

    fn insert_bst_at(&mut self, node: Option<NodeId>, value: T) -> NodeId {
        let Some(id) = node else {
            return self.alloc_leaf(value);
        };
        if value < self.nodes[id].value {
            let child = self.insert_bst_at(self.nodes[id].left, value);
            self.nodes[id].left = Some(child);
        } else {
            let child = self.insert_bst_at(self.nodes[id].right, value);
            self.nodes[id].right = Some(child);
        }
        self.update_height(id);
        id
    }

    /// Remove one node holding `value`, replacing a two-child node by its
    /// in-order successor. Absent values are a no-op.
    pub fn delete_bst(&mut self, value: &T) -> Vec<Option<T>> {
        self.root = self.delete_at(self.root, value);
        self.serialize()
    }

    fn delete_at(&mut self, node: Option<NodeId>, value: &T) -> Option<NodeId> {
        let id = node?;
        match value.cmp(&self.nodes[id].value) {
            Ordering::Less => {
                let child = self.delete_at(self.nodes[id].left, value);
                self.nodes[id].left = child;
            }
            Ordering::Greater => {
                let child = self.delete_at(self.nodes[id].right, value);
                self.nodes[id].right = child;
            }
            Ordering::Equal => {
                let (left, right) = (self.nodes[id].left, self.nodes[id].right);
                match (left, right) {
                    (None, _) | (_, None) => {
                        self.nodes.release(id);
                        self.len -= 1;
                        return left.or(right);
                    }
                    (Some(_), Some(right)) => {
                        let (rest, successor) = self.detach_min(right);
                        self.nodes[id].value = successor;
                        self.nodes[id].right = rest;
                    }
                }
            }
        }
        self.update_height(id);
        Some(id)
    }

    /// Unlink the leftmost node under `id`, returning the new subtree root
    /// and the removed value
    fn detach_min(&mut self, id: NodeId) -> (Option<NodeId>, T) {
        let left = self.nodes[id].left;
        match left {
            Some(left) => {
                let (rest, min) = self.detach_min(left);
                self.nodes[id].left = rest;
                self.update_height(id);
                (Some(id), min)
            }
            None => {
                let right = self.nodes[id].right;
                let value = self.nodes[id].value.clone();
                self.nodes.release(id);
                self.len -= 1;
                (right, value)
            }
        }
    }

    /// BST search
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn find_min_bst(&self) -> Option<T> {
        let mut id = self.root?;
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        Some(self.nodes[id].value.clone())
    }

    pub fn find_max_bst(&self) -> Option<T> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        Some(self.nodes[id].value.clone())
    }

    // AVL

    pub fn insert_avl(&mut self, value: T) -> Vec<Option<T>> {
        let root = self.insert_avl_at(self.root, value);
        self.root = Some(root);
        self.serialize()
    }

    fn insert_avl_at(&mut self, node: Option<NodeId>, value: T) -> NodeId {
        let Some(id) = node else {
            return self.alloc_leaf(value);
        };
        if value < self.nodes[id].value {
            let child = self.insert_avl_at(self.nodes[id].left, value);
            self.nodes[id].left = Some(child);
        } else {
            let child = self.insert_avl_at(self.nodes[id].right, value);
            self.nodes[id].right = Some(child);
        }
        self.update_height(id);
        self.rebalance(id)
    }

    // Case selection by the child's balance factor also covers duplicates,
    // which descend right and would slip past a value comparison.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        let balance = self.balance_factor(id);

        if balance > 1 {
            if let Some(left) = self.nodes[id].left {
                if self.balance_factor(left) < 0 {
                    let rotated = self.rotate_left(left);
                    self.nodes[id].left = Some(rotated);
                }
            }
            return self.rotate_right(id);
        }

        if balance < -1 {
            if let Some(right) = self.nodes[id].right {
                if self.balance_factor(right) > 0 {
                    let rotated = self.rotate_right(right);
                    self.nodes[id].right = Some(rotated);
                }
            }
            return self.rotate_left(id);
        }

        id
    }

    fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let Some(x) = self.nodes[y].left else {
            return y;
        };
        self.nodes[y].left = self.nodes[x].right;
        self.nodes[x].right = Some(y);
        self.update_height(y);
        self.update_height(x);
        x
    }

    fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let Some(y) = self.nodes[x].right else {
            return x;
        };
        self.nodes[x].right = self.nodes[y].left;
        self.nodes[y].left = Some(x);
        self.update_height(x);
        self.update_height(y);
        y
    }

    // Traversals

    pub fn inorder(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.walk_inorder(self.root, &mut out);
        out
    }

    fn walk_inorder(&self, id: Option<NodeId>, out: &mut Vec<T>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            self.walk_inorder(node.left, out);
            out.push(node.value.clone());
            self.walk_inorder(node.right, out);
        }
    }

    pub fn preorder(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.walk_preorder(self.root, &mut out);
        out
    }

    fn walk_preorder(&self, id: Option<NodeId>, out: &mut Vec<T>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            out.push(node.value.clone());
            self.walk_preorder(node.left, out);
            self.walk_preorder(node.right, out);
        }
    }

    pub fn postorder(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        self.walk_postorder(self.root, &mut out);
        out
    }

    fn walk_postorder(&self, id: Option<NodeId>, out: &mut Vec<T>) {
        if let Some(id) = id {
            let node = &self.nodes[id];
            self.walk_postorder(node.left, out);
            self.walk_postorder(node.right, out);
            out.push(node.value.clone());
        }
    }

    pub fn level_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            out.push(node.value.clone());
            queue.extend(node.left);
            queue.extend(node.right);
        }
        out
    }

    /// Heap-indexed snapshot: children of `i` at `2i + 1` and `2i + 2`.
    ///
    /// The output length grows as `2^height - 1`, so a degenerate (list
    /// shaped) BST of height `h` costs `2^h` slots. Nodes whose slot index
    /// would overflow `usize` are left out of the snapshot.
    pub fn serialize(&self) -> Vec<Option<T>> {
        let mut out: Vec<Option<T>> = Vec::new();
        let mut queue: VecDeque<(NodeId, usize)> =
            self.root.map(|id| (id, 0)).into_iter().collect();

        while let Some((id, index)) = queue.pop_front() {
            if out.len() <= index {
                out.resize(index + 1, None);
            }
            let node = &self.nodes[id];
            out[index] = Some(node.value.clone());
            let left_slot = index.checked_mul(2).and_then(|i| i.checked_add(1));
            if let (Some(left), Some(slot)) = (node.left, left_slot) {
                queue.push_back((left, slot));
            }
            let right_slot = left_slot.and_then(|i| i.checked_add(1));
            if let (Some(right), Some(slot)) = (node.right, right_slot) {
                queue.push_back((right, slot));
            }
        }

        while matches!(out.last(), Some(None)) {
            out.pop();
        }
        out
    }

    pub fn clear(&mut self) -> Vec<Option<T>> {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        Vec::new()
    }

    /// Whether every node's subtrees differ in height by at most one
    pub fn is_balanced(&self) -> bool {
        self.balanced_from(self.root)
    }

    fn balanced_from(&self, id: Option<NodeId>) -> bool {
        let Some(id) = id else {
            return true;
        };
        let node = &self.nodes[id];
        self.balance_factor(id).abs() <= 1
            && self.balanced_from(node.left)
            && self.balanced_from(node.right)
    }
}

impl<T: Clone + Ord> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
