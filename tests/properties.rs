// Property tests for the recorders and containers

use proptest::prelude::*;
use stepviz::frame::timeline::Seekable;
use stepviz::frame::{GraphEvent, Timeline};
use stepviz::graph::Graph;
use stepviz::sorting::SortAlgorithm;
use stepviz::structures::BinaryTree;

/// Algorithms whose every frame only exchanges positions
const EXCHANGE_SORTS: [SortAlgorithm; 7] = [
    SortAlgorithm::Bubble,
    SortAlgorithm::Selection,
    SortAlgorithm::Cocktail,
    SortAlgorithm::Gnome,
    SortAlgorithm::Comb,
    SortAlgorithm::Heap,
    SortAlgorithm::Quick,
];

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    out.sort();
    out
}

fn graph_from(n: u32, edges: &[(u32, u32, u32)], directed: bool) -> Graph<u32> {
    let mut graph = Graph::new(directed);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(u, v, w) in edges {
        if u < n && v < n && u != v {
            graph.add_edge(u, v, f64::from(w));
        }
    }
    graph
}

/// All-pairs distances by Floyd-Warshall
fn reference_distances(graph: &Graph<u32>) -> Vec<Vec<Option<f64>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![None; n]; n];
    for u in 0..n {
        dist[u][u] = Some(0.0);
        for (v, w) in graph.neighbors(&(u as u32)) {
            let v = v as usize;
            if dist[u][v].map_or(true, |d| w < d) {
                dist[u][v] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

fn total_of(description: &str) -> Option<&str> {
    description
        .rsplit_once("total=")
        .map(|(_, rest)| rest.trim_end_matches(')'))
}

fn edge_list() -> impl Strategy<Value = Vec<(u32, u32, u32)>> {
    prop::collection::vec((0u32..8, 0u32..8, 1u32..10), 0..20)
}

proptest! {
    #[test]
    fn prop_every_sort_ends_sorted(input in prop::collection::vec(-50i64..50, 0..16)) {
        let expected = sorted(&input);
        for algorithm in SortAlgorithm::ALL {
            let frames = algorithm.record(&input);
            prop_assert_eq!(&frames[0].array, &input, "{}", algorithm);
            prop_assert_eq!(&frames[frames.len() - 1].array, &expected, "{}", algorithm);
        }
    }

    #[test]
    fn prop_radix_passes_are_stable(input in prop::collection::vec(0i64..1000, 2..16)) {
        let frames = SortAlgorithm::Radix.record(&input);
        for frame in &frames {
            let Some(exp) = frame
                .description
                .strip_prefix("Sorting by digit place exp=")
                .and_then(|e| e.parse::<i64>().ok())
            else {
                continue;
            };
            // Entering the pass for `exp`, the lower digits are stably ordered
            let mut expected = input.clone();
            expected.sort_by_key(|v| v % exp);
            prop_assert_eq!(&frame.array, &expected, "exp={}", exp);
        }
        prop_assert_eq!(&frames[frames.len() - 1].array, &sorted(&input));
    }

    #[test]
    fn prop_exchange_sorts_only_permute(input in prop::collection::vec(0i64..20, 0..12)) {
        let expected = sorted(&input);
        for algorithm in EXCHANGE_SORTS {
            for frame in algorithm.record(&input) {
                prop_assert_eq!(sorted(&frame.array), expected.clone(), "{}", algorithm);
            }
        }
    }

    #[test]
    fn prop_timeline_position_bounded(
        input in prop::collection::vec(0i64..100, 0..10),
        moves in prop::collection::vec(0u8..5, 0..40),
    ) {
        let mut timeline = Timeline::new(SortAlgorithm::Insertion.record(&input));
        let len = timeline.len();
        for m in moves {
            let _ = match m {
                0 => timeline.step_forward(),
                1 => timeline.step_backward(),
                2 => timeline.rewind().map(|_| ()),
                3 => timeline.jump_to_end().map(|_| ()),
                _ => timeline.seek(len * 2).map(|_| ()),
            };
            prop_assert!(timeline.position() < len);
        }
    }

    #[test]
    fn prop_bst_inorder_is_sorted(
        values in prop::collection::vec(0i32..50, 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree = BinaryTree::new();
        for &v in &values {
            tree.insert_bst(v);
        }
        let mut expected: Vec<i32> = values.clone();
        expected.sort();
        prop_assert_eq!(tree.inorder(), expected.clone());

        let victim = values[pick.index(values.len())];
        tree.delete_bst(&victim);
        let position = expected.iter().position(|&v| v == victim);
        if let Some(i) = position {
            expected.remove(i);
        }
        prop_assert_eq!(tree.len(), expected.len());
        prop_assert_eq!(tree.inorder(), expected);
    }

    #[test]
    fn prop_avl_stays_balanced(values in prop::collection::vec(-100i32..100, 0..40)) {
        let mut tree = BinaryTree::new();
        for &v in &values {
            tree.insert_avl(v);
            prop_assert!(tree.is_balanced());
        }
        prop_assert_eq!(tree.inorder(), {
            let mut expected = values.clone();
            expected.sort();
            expected
        });
    }

    #[test]
    fn prop_bfs_and_dfs_reach_the_same_vertices(
        edges in edge_list(),
        directed in any::<bool>(),
    ) {
        let graph = graph_from(8, &edges, directed);
        let reference = reference_distances(&graph);

        let mut reachable: Vec<u32> = (0..8u32).filter(|&v| reference[0][v as usize].is_some()).collect();
        let mut bfs = graph.bfs(&0);
        let mut dfs = graph.dfs(&0);
        reachable.sort();
        bfs.sort();
        dfs.sort();
        prop_assert_eq!(&bfs, &reachable);
        prop_assert_eq!(&dfs, &reachable);
    }

    #[test]
    fn prop_recorders_visit_each_reachable_vertex_once(
        edges in edge_list(),
        directed in any::<bool>(),
    ) {
        let graph = graph_from(8, &edges, directed);
        let reference = reference_distances(&graph);
        let reachable: Vec<u32> = (0..8u32).filter(|&v| reference[0][v as usize].is_some()).collect();

        for frames in [graph.bfs_steps(&0), graph.dfs_steps(&0)] {
            let visits: Vec<u32> = frames
                .iter()
                .filter(|f| f.kind == GraphEvent::Visit)
                .flat_map(|f| f.highlighted_nodes.iter().copied())
                .collect();
            let mut unique = visits.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), visits.len(), "revisited a vertex: {:?}", visits);
            prop_assert_eq!(&unique, &reachable);
        }
    }

    #[test]
    fn prop_dijkstra_matches_reference(
        edges in edge_list(),
        directed in any::<bool>(),
        target in 0u32..8,
    ) {
        let graph = graph_from(8, &edges, directed);
        let reference = reference_distances(&graph);
        let frames = graph.dijkstra_steps(&0, &target);

        match reference[0][target as usize] {
            Some(d) => {
                let path = frames
                    .iter()
                    .find(|f| f.kind == GraphEvent::Path)
                    .expect("reachable target should record a path");
                prop_assert_eq!(path.highlighted_nodes.first(), Some(&0));
                prop_assert_eq!(path.highlighted_nodes.last(), Some(&target));
                let suffix = format!("(dist={})", d);
                prop_assert!(path.description.ends_with(&suffix), "{}", path.description);
            }
            None => {
                prop_assert_eq!(frames.last().map(|f| f.description.as_str()), Some("No path found"));
            }
        }
    }

    #[test]
    fn prop_prim_and_kruskal_agree(
        chain in prop::collection::vec(1u32..10, 7),
        extra in edge_list(),
    ) {
        let mut edges: Vec<(u32, u32, u32)> = chain
            .iter()
            .enumerate()
            .map(|(i, &w)| (i as u32, i as u32 + 1, w))
            .collect();
        edges.extend(extra);
        let graph = graph_from(8, &edges, false);

        let prim = graph.prim_mst_steps(&0);
        let kruskal = graph.kruskal_mst_steps();
        let prim_total = prim.last().and_then(|f| total_of(&f.description)).map(str::to_string);
        let kruskal_total = kruskal.last().and_then(|f| total_of(&f.description)).map(str::to_string);

        prop_assert!(prim_total.is_some());
        prop_assert_eq!(prim_total, kruskal_total);
    }

    #[test]
    fn prop_prim_and_kruskal_agree_on_connectivity(edges in edge_list()) {
        let graph = graph_from(8, &edges, false);
        let reference = reference_distances(&graph);
        let connected = reference[0].iter().all(Option::is_some);

        let prim = graph.prim_mst_steps(&0);
        let kruskal = graph.kruskal_mst_steps();
        let prim_last = prim.last().map(|f| f.description.clone()).unwrap_or_default();
        let kruskal_last = kruskal.last().map(|f| f.description.clone()).unwrap_or_default();

        if connected {
            prop_assert!(total_of(&prim_last).is_some(), "{}", prim_last);
            prop_assert_eq!(total_of(&prim_last), total_of(&kruskal_last));
        } else {
            prop_assert!(prim_last.starts_with("Graph is disconnected"), "{}", prim_last);
            prop_assert!(kruskal_last.starts_with("Graph is disconnected"), "{}", kruskal_last);
        }
    }
}
