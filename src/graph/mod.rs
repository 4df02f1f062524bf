//! Weighted adjacency-list graph and its step recorders
//!
//! Vertices are kept in insertion order and addressed internally by their
//! position; every edge record is an explicit `{ to, weight }` pair. An
//! undirected graph stores each edge in both endpoint lists.
//!
//! The recorders live in submodules as further `impl` blocks:
//! - [`traversal`]: BFS, DFS, unweighted shortest path, components, cycle and
//!   bipartite checks
//! - [`weighted`]: Dijkstra, Prim and Kruskal
//!
//! A recorder whose required vertex is missing returns an empty frame list,
//! which callers must read as "cannot run" rather than "nothing happened".

pub mod traversal;
pub mod weighted;

use crate::errors::StepvizError;
use crate::frame::{GraphEvent, GraphFrame};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Requirements on a vertex identifier
pub trait VertexId: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T: Clone + Eq + Hash + Ord + fmt::Display> VertexId for T {}

pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    to: usize,
    weight: f64,
}

/// An edge as reported to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

/// Externally visible state of a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot<V> {
    pub nodes: Vec<V>,
    pub edges: Vec<EdgeView<V>>,
}

impl<V> Default for GraphSnapshot<V> {
    fn default() -> Self {
        GraphSnapshot {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    vertices: Vec<V>,
    index: FxHashMap<V, usize>,
    adjacency: Vec<Vec<Edge>>,
}

impl<V: VertexId> Graph<V> {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            vertices: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Outgoing edges of `vertex` in storage order
    pub fn neighbors(&self, vertex: &V) -> Vec<(V, f64)> {
        self.index_of(vertex)
            .map(|u| {
                self.adjacency[u]
                    .iter()
                    .map(|edge| (self.vertices[edge.to].clone(), edge.weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    fn ensure_vertex(&mut self, vertex: V) -> usize {
        if let Some(&i) = self.index.get(&vertex) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(vertex.clone(), i);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        i
    }

    pub fn add_vertex(&mut self, vertex: V) -> GraphSnapshot<V> {
        self.ensure_vertex(vertex);
        self.serialize()
    }

    /// Add `from → to`, creating either endpoint if needed.
    ///
    /// A non-finite weight is replaced by [`DEFAULT_WEIGHT`].
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> GraphSnapshot<V> {
        let weight = if weight.is_finite() {
            weight
        } else {
            DEFAULT_WEIGHT
        };
        let u = self.ensure_vertex(from);
        let v = self.ensure_vertex(to);

        self.adjacency[u].push(Edge { to: v, weight });
        if !self.directed {
            self.adjacency[v].push(Edge { to: u, weight });
        }
        self.serialize()
    }

    /// Drop every `from → to` record, and `to → from` when undirected
    pub fn remove_edge(&mut self, from: &V, to: &V) -> GraphSnapshot<V> {
        if let (Some(u), Some(v)) = (self.index_of(from), self.index_of(to)) {
            self.adjacency[u].retain(|edge| edge.to != v);
            if !self.directed {
                self.adjacency[v].retain(|edge| edge.to != u);
            }
        }
        self.serialize()
    }

    /// Remove `vertex` together with every edge touching it
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphSnapshot<V> {
        let Some(removed) = self.index_of(vertex) else {
            return self.serialize();
        };

        self.vertices.remove(removed);
        self.adjacency.remove(removed);
        for edges in &mut self.adjacency {
            edges.retain(|edge| edge.to != removed);
            for edge in edges.iter_mut() {
                if edge.to > removed {
                    edge.to -= 1;
                }
            }
        }

        self.index = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        self.serialize()
    }

    pub fn clear(&mut self) -> GraphSnapshot<V> {
        self.vertices.clear();
        self.index.clear();
        self.adjacency.clear();
        self.serialize()
    }

    /// Vertices plus edges; undirected edges are reported once, from the
    /// smaller endpoint
    pub fn serialize(&self) -> GraphSnapshot<V> {
        let mut edges = Vec::new();
        for (u, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                let (from, to) = (&self.vertices[u], &self.vertices[edge.to]);
                if self.directed || from < to {
                    edges.push(EdgeView {
                        from: from.clone(),
                        to: to.clone(),
                        weight: edge.weight,
                    });
                }
            }
        }

        GraphSnapshot {
            nodes: self.vertices.clone(),
            edges,
        }
    }

    /// Breadth-first visit order from `start`; empty when `start` is absent
    pub fn bfs(&self, start: &V) -> Vec<V> {
        let Some(s) = self.index_of(start) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.vertices.len()];
        let mut queue = std::collections::VecDeque::from([s]);
        let mut order = Vec::new();
        visited[s] = true;

        while let Some(u) = queue.pop_front() {
            order.push(self.vertices[u].clone());
            for edge in &self.adjacency[u] {
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }
        order
    }

    /// Depth-first (preorder) visit order from `start`
    pub fn dfs(&self, start: &V) -> Vec<V> {
        let Some(s) = self.index_of(start) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.vertices.len()];
        let mut order = Vec::new();
        self.dfs_from(s, &mut visited, &mut order);
        order
    }

    fn dfs_from(&self, u: usize, visited: &mut [bool], order: &mut Vec<V>) {
        visited[u] = true;
        order.push(self.vertices[u].clone());
        for edge in &self.adjacency[u] {
            if !visited[edge.to] {
                self.dfs_from(edge.to, visited, order);
            }
        }
    }

    fn name(&self, i: usize) -> &V {
        &self.vertices[i]
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new(false)
    }
}

/// The graph recorders that can be selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphAlgorithm {
    Bfs,
    Dfs,
    ShortestPath,
    Components,
    Cycle,
    Bipartite,
    Dijkstra,
    Prim,
    Kruskal,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 9] = [
        GraphAlgorithm::Bfs,
        GraphAlgorithm::Dfs,
        GraphAlgorithm::ShortestPath,
        GraphAlgorithm::Components,
        GraphAlgorithm::Cycle,
        GraphAlgorithm::Bipartite,
        GraphAlgorithm::Dijkstra,
        GraphAlgorithm::Prim,
        GraphAlgorithm::Kruskal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "bfs",
            GraphAlgorithm::Dfs => "dfs",
            GraphAlgorithm::ShortestPath => "shortest-path",
            GraphAlgorithm::Components => "components",
            GraphAlgorithm::Cycle => "cycle",
            GraphAlgorithm::Bipartite => "bipartite",
            GraphAlgorithm::Dijkstra => "dijkstra",
            GraphAlgorithm::Prim => "prim",
            GraphAlgorithm::Kruskal => "kruskal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "Breadth-First Search",
            GraphAlgorithm::Dfs => "Depth-First Search",
            GraphAlgorithm::ShortestPath => "Shortest Path (unweighted)",
            GraphAlgorithm::Components => "Connected Components",
            GraphAlgorithm::Cycle => "Cycle Detection",
            GraphAlgorithm::Bipartite => "Bipartite Check",
            GraphAlgorithm::Dijkstra => "Dijkstra",
            GraphAlgorithm::Prim => "Prim MST",
            GraphAlgorithm::Kruskal => "Kruskal MST",
        }
    }

    pub fn needs_start(self) -> bool {
        matches!(
            self,
            GraphAlgorithm::Bfs
                | GraphAlgorithm::Dfs
                | GraphAlgorithm::ShortestPath
                | GraphAlgorithm::Dijkstra
                | GraphAlgorithm::Prim
        )
    }

    pub fn needs_target(self) -> bool {
        matches!(self, GraphAlgorithm::ShortestPath | GraphAlgorithm::Dijkstra)
    }

    /// Run the recorder; `start` and `target` are ignored by the recorders
    /// that take no endpoints
    pub fn record<V: VertexId>(self, graph: &Graph<V>, start: &V, target: &V) -> Vec<GraphFrame<V>> {
        match self {
            GraphAlgorithm::Bfs => graph.bfs_steps(start),
            GraphAlgorithm::Dfs => graph.dfs_steps(start),
            GraphAlgorithm::ShortestPath => graph.shortest_path_steps(start, target),
            GraphAlgorithm::Components => graph.connected_components_steps(),
            GraphAlgorithm::Cycle => graph.has_cycle_undirected_steps(),
            GraphAlgorithm::Bipartite => graph.is_bipartite_steps(),
            GraphAlgorithm::Dijkstra => graph.dijkstra_steps(start, target),
            GraphAlgorithm::Prim => graph.prim_mst_steps(start),
            GraphAlgorithm::Kruskal => graph.kruskal_mst_steps(),
        }
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GraphAlgorithm {
    type Err = StepvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        let algorithm = match normalized.as_str() {
            "bfs" | "breadthfirst" => GraphAlgorithm::Bfs,
            "dfs" | "depthfirst" => GraphAlgorithm::Dfs,
            "shortestpath" | "path" => GraphAlgorithm::ShortestPath,
            "components" | "connectedcomponents" => GraphAlgorithm::Components,
            "cycle" | "hascycle" => GraphAlgorithm::Cycle,
            "bipartite" | "isbipartite" => GraphAlgorithm::Bipartite,
            "dijkstra" => GraphAlgorithm::Dijkstra,
            "prim" | "primmst" => GraphAlgorithm::Prim,
            "kruskal" | "kruskalmst" => GraphAlgorithm::Kruskal,
            _ => return Err(StepvizError::UnknownTraversal(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Frame accumulator shared by the graph recorders
struct Steps<'g, V> {
    graph: &'g Graph<V>,
    frames: Vec<GraphFrame<V>>,
}

impl<'g, V: VertexId> Steps<'g, V> {
    fn new(graph: &'g Graph<V>) -> Self {
        Steps {
            graph,
            frames: Vec::new(),
        }
    }

    fn push(&mut self, nodes: &[usize], kind: GraphEvent, description: impl Into<String>) {
        let highlighted = nodes.iter().map(|&i| self.graph.name(i).clone()).collect();
        self.frames
            .push(GraphFrame::new(highlighted, kind, description));
    }

    fn finish(mut self, description: impl Into<String>) -> Vec<GraphFrame<V>> {
        self.push(&[], GraphEvent::Done, description);
        tracing::debug!(frames = self.frames.len(), "graph trace recorded");
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut g = Graph::new(false);
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 4.0);
        g.add_edge("B", "C", 2.0);
        g
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let g = triangle();
        assert_eq!(g.neighbors(&"B"), vec![("A", 1.0), ("C", 2.0)]);
        let snapshot = g.serialize();
        assert_eq!(snapshot.nodes, vec!["A", "B", "C"]);
        assert_eq!(snapshot.edges.len(), 3);
        assert!(snapshot.edges.iter().all(|e| e.from < e.to));
    }

    #[test]
    fn test_non_finite_weight_defaults() {
        let mut g = Graph::new(true);
        g.add_edge("A", "B", f64::NAN);
        assert_eq!(g.neighbors(&"A"), vec![("B", DEFAULT_WEIGHT)]);
        assert!(g.neighbors(&"B").is_empty());
    }

    #[test]
    fn test_remove_edge_and_vertex() {
        let mut g = triangle();
        g.remove_edge(&"A", &"C");
        assert_eq!(g.neighbors(&"C"), vec![("B", 2.0)]);

        let snapshot = g.remove_vertex(&"B");
        assert_eq!(snapshot.nodes, vec!["A", "C"]);
        assert!(snapshot.edges.is_empty());
        assert!(!g.contains_vertex(&"B"));
        g.add_edge("C", "A", 3.0);
        assert_eq!(g.neighbors(&"A"), vec![("C", 3.0)]);
    }

    #[test]
    fn test_remove_vertex_drops_inbound_directed_edges() {
        let mut g = Graph::new(true);
        g.add_edge(1, 2, 1.0);
        g.add_edge(3, 2, 1.0);
        g.add_edge(3, 1, 1.0);
        g.remove_vertex(&2);
        assert_eq!(g.neighbors(&3), vec![(1, 1.0)]);
        assert!(g.neighbors(&1).is_empty());
    }

    #[test]
    fn test_plain_traversals() {
        let mut g = Graph::new(false);
        for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
            g.add_edge(u, v, 1.0);
        }
        assert_eq!(g.bfs(&"A"), vec!["A", "B", "C", "D"]);
        assert_eq!(g.dfs(&"A"), vec!["A", "B", "D", "C"]);
        assert!(g.bfs(&"Z").is_empty());
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("shortest-path".parse::<GraphAlgorithm>().unwrap(), GraphAlgorithm::ShortestPath);
        assert_eq!("Kruskal MST".parse::<GraphAlgorithm>().unwrap(), GraphAlgorithm::Kruskal);
        assert!("astar".parse::<GraphAlgorithm>().is_err());
        for algorithm in GraphAlgorithm::ALL {
            assert_eq!(algorithm.key().parse::<GraphAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_registry_dispatch() {
        let g = triangle();
        let frames = GraphAlgorithm::Dijkstra.record(&g, &"A", &"C");
        assert_eq!(frames[0].description, "Dijkstra from A to C");
        assert!(GraphAlgorithm::Kruskal.record(&g, &"Z", &"Z").len() > 2);
    }

    #[test]
    fn test_clear() {
        let mut g = triangle();
        assert_eq!(g.clear(), GraphSnapshot::default());
        assert_eq!(g.vertex_count(), 0);
    }
}
