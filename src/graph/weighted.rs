// Weighted recorders: Dijkstra, Prim and Kruskal

use super::traversal::walk_back;
use super::{Graph, Steps, VertexId};
use crate::frame::{GraphEvent, GraphFrame};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Min-heap entry: smallest distance first, then earliest push
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    dist: f64,
    seq: usize,
    node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Disjoint sets with path compression and union by rank
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; false when they were already joined
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

impl<V: VertexId> Graph<V> {
    /// Dijkstra from `start`, stopping once `target` is settled.
    ///
    /// Distances are only reported relaxed when strictly shorter. Negative
    /// weights are accepted but give no optimality guarantee.
    pub fn dijkstra_steps(&self, start: &V, target: &V) -> Vec<GraphFrame<V>> {
        let (Some(s), Some(t)) = (self.index_of(start), self.index_of(target)) else {
            return Vec::new();
        };

        let n = self.vertex_count();
        let mut steps = Steps::new(self);
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();
        let mut seq = 0;

        dist[s] = 0.0;
        heap.push(QueueEntry { dist: 0.0, seq, node: s });
        steps.push(&[s], GraphEvent::Init, format!("Dijkstra from {} to {}", start, target));

        while let Some(QueueEntry { dist: d, node: u, .. }) = heap.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;

            let name = self.name(u);
            steps.push(&[u], GraphEvent::Visit, format!("Visit {} with distance {}", name, d));
            if u == t {
                break;
            }

            for edge in &self.adjacency[u] {
                let (v, w) = (edge.to, edge.weight);
                steps.push(
                    &[u, v],
                    GraphEvent::Inspect,
                    format!("Inspect edge {} → {} (w={})", name, self.name(v), w),
                );
                if settled[v] {
                    continue;
                }

                let alt = dist[u] + w;
                if alt < dist[v] {
                    dist[v] = alt;
                    prev[v] = Some(u);
                    seq += 1;
                    heap.push(QueueEntry { dist: alt, seq, node: v });
                    steps.push(
                        &[v],
                        GraphEvent::Relax,
                        format!("Relax {}: dist = {} via {}", self.name(v), alt, name),
                    );
                }
            }
        }

        if !dist[t].is_finite() {
            return steps.finish("No path found");
        }

        let path = walk_back(&prev, t);
        steps.push(
            &path,
            GraphEvent::Path,
            format!(
                "Shortest weighted path: {} (dist={})",
                self.join_path(&path),
                dist[t]
            ),
        );
        steps.finish("Dijkstra complete")
    }

    /// Prim from `start`. Each round scans the tree in join order and takes
    /// the first strictly cheapest edge leaving it.
    pub fn prim_mst_steps(&self, start: &V) -> Vec<GraphFrame<V>> {
        let Some(s) = self.index_of(start) else {
            return Vec::new();
        };

        let mut steps = Steps::new(self);
        let mut in_tree = vec![false; self.vertex_count()];
        let mut tree = vec![s];
        let mut total = 0.0;
        in_tree[s] = true;
        steps.push(&[s], GraphEvent::Init, format!("Prim MST starting at {}", start));

        while tree.len() < self.vertex_count() {
            let mut best: Option<(usize, usize, f64)> = None;

            for &u in &tree {
                for edge in &self.adjacency[u] {
                    let (v, w) = (edge.to, edge.weight);
                    if in_tree[v] {
                        continue;
                    }
                    steps.push(
                        &[u, v],
                        GraphEvent::Inspect,
                        format!("Consider edge {} → {} (w={})", self.name(u), self.name(v), w),
                    );
                    if best.map_or(true, |(_, _, best_w)| w < best_w) {
                        best = Some((u, v, w));
                    }
                }
            }

            let Some((u, v, w)) = best else {
                return steps.finish("Graph is disconnected; MST not possible from this start");
            };

            in_tree[v] = true;
            tree.push(v);
            total += w;
            steps.push(
                &[u, v],
                GraphEvent::Add,
                format!(
                    "Add edge {} — {} (w={}), total={}",
                    self.name(u),
                    self.name(v),
                    w,
                    total
                ),
            );
        }

        steps.finish(format!("Prim MST complete (total={})", total))
    }

    /// Kruskal over the serialized edge list, stably sorted by weight
    pub fn kruskal_mst_steps(&self) -> Vec<GraphFrame<V>> {
        if self.is_empty() {
            return Vec::new();
        }

        let n = self.vertex_count();
        let mut steps = Steps::new(self);
        steps.push(&[], GraphEvent::Init, "Kruskal MST");

        let mut edges: Vec<(usize, usize, f64)> = Vec::new();
        for (u, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                if self.directed || self.name(u) < self.name(edge.to) {
                    edges.push((u, edge.to, edge.weight));
                }
            }
        }
        edges.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut sets = UnionFind::new(n);
        let mut total = 0.0;
        let mut used = 0;

        for (u, v, w) in edges {
            let (from, to) = (self.name(u), self.name(v));
            steps.push(
                &[u, v],
                GraphEvent::Inspect,
                format!("Inspect edge {} — {} (w={})", from, to, w),
            );
            if sets.union(u, v) {
                total += w;
                used += 1;
                steps.push(
                    &[u, v],
                    GraphEvent::Add,
                    format!("Add edge {} — {} (w={}), total={}", from, to, w, total),
                );
                if used + 1 >= n {
                    break;
                }
            } else {
                steps.push(
                    &[u, v],
                    GraphEvent::Skip,
                    format!("Skip edge {} — {} (would form cycle)", from, to),
                );
            }
        }

        if used + 1 != n {
            return steps.finish("Graph is disconnected; MST not possible");
        }
        steps.finish(format!("Kruskal MST complete (total={})", total))
    }
}
