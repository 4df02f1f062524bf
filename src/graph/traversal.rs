// Unweighted recorders: BFS, DFS, shortest path, components, cycle and bipartite checks

use super::{Graph, Steps, VertexId};
use crate::frame::{GraphEvent, GraphFrame};
use std::collections::VecDeque;

impl<V: VertexId> Graph<V> {
    pub fn bfs_steps(&self, start: &V) -> Vec<GraphFrame<V>> {
        let Some(s) = self.index_of(start) else {
            return Vec::new();
        };

        let mut steps = Steps::new(self);
        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::from([s]);
        visited[s] = true;

        steps.push(&[s], GraphEvent::Init, format!("Starting BFS from {}", start));
        steps.push(&[s], GraphEvent::Enqueue, format!("Enqueue {}", start));

        while let Some(u) = queue.pop_front() {
            let name = self.name(u);
            steps.push(&[u], GraphEvent::Dequeue, format!("Dequeue {}", name));
            steps.push(&[u], GraphEvent::Visit, format!("Visit {}", name));

            for edge in &self.adjacency[u] {
                let v = edge.to;
                steps.push(
                    &[u, v],
                    GraphEvent::Inspect,
                    format!("Inspect edge {} → {}", name, self.name(v)),
                );
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                    steps.push(&[v], GraphEvent::Enqueue, format!("Enqueue {}", self.name(v)));
                }
            }
        }

        steps.finish("BFS complete")
    }

    /// Recursive DFS; every return from a child records a `backtrack`
    pub fn dfs_steps(&self, start: &V) -> Vec<GraphFrame<V>> {
        let Some(s) = self.index_of(start) else {
            return Vec::new();
        };

        let mut steps = Steps::new(self);
        let mut visited = vec![false; self.vertex_count()];
        steps.push(&[s], GraphEvent::Init, format!("Starting DFS from {}", start));
        self.dfs_visit(s, &mut visited, &mut steps);
        steps.finish("DFS complete")
    }

    fn dfs_visit(&self, u: usize, visited: &mut [bool], steps: &mut Steps<'_, V>) {
        let name = self.name(u);
        visited[u] = true;
        steps.push(&[u], GraphEvent::Visit, format!("Visit {}", name));

        for edge in &self.adjacency[u] {
            let v = edge.to;
            steps.push(
                &[u, v],
                GraphEvent::Inspect,
                format!("Inspect edge {} → {}", name, self.name(v)),
            );
            if !visited[v] {
                steps.push(&[v], GraphEvent::Push, format!("Traverse to {}", self.name(v)));
                self.dfs_visit(v, visited, steps);
                steps.push(&[u], GraphEvent::Backtrack, format!("Backtrack to {}", name));
            }
        }
    }

    /// BFS with parent links; a `path` frame carries the route when `target`
    /// is reached
    pub fn shortest_path_steps(&self, start: &V, target: &V) -> Vec<GraphFrame<V>> {
        let (Some(s), Some(t)) = (self.index_of(start), self.index_of(target)) else {
            return Vec::new();
        };

        let mut steps = Steps::new(self);
        let mut visited = vec![false; self.vertex_count()];
        let mut parent: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut queue = VecDeque::from([s]);
        visited[s] = true;

        steps.push(
            &[s],
            GraphEvent::Init,
            format!("Find shortest path from {} to {}", start, target),
        );
        steps.push(&[s], GraphEvent::Enqueue, format!("Enqueue {}", start));

        let mut found = false;
        while let Some(u) = queue.pop_front() {
            let name = self.name(u);
            steps.push(&[u], GraphEvent::Dequeue, format!("Dequeue {}", name));
            steps.push(&[u], GraphEvent::Visit, format!("Visit {}", name));

            if u == t {
                found = true;
                break;
            }

            for edge in &self.adjacency[u] {
                let v = edge.to;
                steps.push(
                    &[u, v],
                    GraphEvent::Inspect,
                    format!("Inspect edge {} → {}", name, self.name(v)),
                );
                if !visited[v] {
                    visited[v] = true;
                    parent[v] = Some(u);
                    queue.push_back(v);
                    steps.push(&[v], GraphEvent::Enqueue, format!("Enqueue {}", self.name(v)));
                }
            }
        }

        if !found {
            return steps.finish(format!("No path found from {} to {}", start, target));
        }

        let path = walk_back(&parent, t);
        steps.push(
            &path,
            GraphEvent::Path,
            format!("Shortest path: {}", self.join_path(&path)),
        );
        steps.finish("Shortest path complete")
    }

    /// One stack-based DFS per unvisited vertex, in insertion order
    pub fn connected_components_steps(&self) -> Vec<GraphFrame<V>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut steps = Steps::new(self);
        let mut visited = vec![false; self.vertex_count()];
        let mut components = 0;
        steps.push(&[], GraphEvent::Init, "Finding connected components");

        for root in 0..self.vertex_count() {
            if visited[root] {
                continue;
            }

            visited[root] = true;
            steps.push(
                &[root],
                GraphEvent::Visit,
                format!("Start component {} at {}", components + 1, self.name(root)),
            );

            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                let name = self.name(u);
                steps.push(&[u], GraphEvent::Visit, format!("Visit {}", name));
                for edge in &self.adjacency[u] {
                    let v = edge.to;
                    steps.push(
                        &[u, v],
                        GraphEvent::Inspect,
                        format!("Inspect edge {} → {}", name, self.name(v)),
                    );
                    if !visited[v] {
                        visited[v] = true;
                        stack.push(v);
                        steps.push(&[v], GraphEvent::Push, format!("Add {} to stack", self.name(v)));
                    }
                }
            }

            components += 1;
            steps.push(&[], GraphEvent::Component, format!("Component {} complete", components));
        }

        steps.finish(format!("Found {} component(s)", components))
    }

    /// Stack-based DFS with parent tracking; stops at the first edge to a
    /// visited vertex other than the parent
    pub fn has_cycle_undirected_steps(&self) -> Vec<GraphFrame<V>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut steps = Steps::new(self);
        let mut visited = vec![false; self.vertex_count()];
        steps.push(&[], GraphEvent::Init, "Cycle detection (undirected)");

        let mut cycle_found = false;
        'roots: for root in 0..self.vertex_count() {
            if visited[root] {
                continue;
            }

            visited[root] = true;
            steps.push(&[root], GraphEvent::Visit, format!("Start DFS at {}", self.name(root)));

            let mut stack: Vec<(usize, Option<usize>)> = vec![(root, None)];
            while let Some((u, parent)) = stack.pop() {
                let name = self.name(u);
                steps.push(&[u], GraphEvent::Visit, format!("Visit {}", name));
                for edge in &self.adjacency[u] {
                    let v = edge.to;
                    steps.push(
                        &[u, v],
                        GraphEvent::Inspect,
                        format!("Inspect edge {} → {}", name, self.name(v)),
                    );
                    if !visited[v] {
                        visited[v] = true;
                        stack.push((v, Some(u)));
                        steps.push(&[v], GraphEvent::Push, format!("Traverse to {}", self.name(v)));
                    } else if Some(v) != parent {
                        steps.push(
                            &[u, v],
                            GraphEvent::Cycle,
                            format!("Cycle found via {} ↔ {}", name, self.name(v)),
                        );
                        cycle_found = true;
                        break 'roots;
                    }
                }
            }
        }

        steps.finish(if cycle_found {
            "Graph has a cycle"
        } else {
            "No cycle detected"
        })
    }

    /// BFS two-coloring; aborts at the first same-colored edge
    pub fn is_bipartite_steps(&self) -> Vec<GraphFrame<V>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut steps = Steps::new(self);
        let mut color: Vec<Option<u8>> = vec![None; self.vertex_count()];
        steps.push(&[], GraphEvent::Init, "Bipartite check (2-coloring)");

        let mut bipartite = true;
        'roots: for root in 0..self.vertex_count() {
            if color[root].is_some() {
                continue;
            }

            color[root] = Some(0);
            steps.push(&[root], GraphEvent::Visit, format!("Color {} = 0", self.name(root)));

            let mut queue = VecDeque::from([root]);
            while let Some(u) = queue.pop_front() {
                let name = self.name(u);
                let own = color[u].unwrap_or(0);
                steps.push(&[u], GraphEvent::Dequeue, format!("Dequeue {}", name));

                for edge in &self.adjacency[u] {
                    let v = edge.to;
                    steps.push(
                        &[u, v],
                        GraphEvent::Inspect,
                        format!("Inspect edge {} → {}", name, self.name(v)),
                    );
                    match color[v] {
                        None => {
                            color[v] = Some(1 - own);
                            queue.push_back(v);
                            steps.push(
                                &[v],
                                GraphEvent::Enqueue,
                                format!("Color {} = {} and enqueue", self.name(v), 1 - own),
                            );
                        }
                        Some(other) if other == own => {
                            steps.push(
                                &[u, v],
                                GraphEvent::Conflict,
                                format!("Conflict: {} and {} have same color", name, self.name(v)),
                            );
                            bipartite = false;
                            break 'roots;
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        steps.finish(if bipartite {
            "Graph is bipartite"
        } else {
            "Graph is not bipartite"
        })
    }

    pub(crate) fn join_path(&self, path: &[usize]) -> String {
        path.iter()
            .map(|&i| self.name(i).to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Follow parent links from `target` back to the root, returned root first
pub(crate) fn walk_back(parent: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    path
}
