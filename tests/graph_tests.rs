// Integration tests for the graph recorders

use stepviz::frame::GraphEvent;
use stepviz::graph::{Graph, GraphAlgorithm};
use stepviz::input::parse_edges;

fn build(edges: &str, directed: bool) -> Graph<String> {
    let mut graph = Graph::new(directed);
    for edge in parse_edges(edges).expect("edge list should parse") {
        graph.add_edge(edge.from, edge.to, edge.weight);
    }
    graph
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn test_dijkstra_weighted_path() {
    let graph = build("A-B:1,A-C:4,B-C:2", false);
    let frames = graph.dijkstra_steps(&s("A"), &s("C"));

    let path = frames
        .iter()
        .find(|f| f.kind == GraphEvent::Path)
        .expect("a path frame");
    assert_eq!(path.highlighted_nodes, vec![s("A"), s("B"), s("C")]);
    assert_eq!(path.description, "Shortest weighted path: A → B → C (dist=3)");
    assert_eq!(frames.last().map(|f| f.kind), Some(GraphEvent::Done));
}

#[test]
fn test_default_graph_spanning_trees_agree() {
    let graph = build("A-B:4,A-C:2,B-C:5,B-D:10,C-E:3,E-D:4,D-F:11", false);

    let prim = graph.prim_mst_steps(&s("A"));
    let kruskal = graph.kruskal_mst_steps();

    let prim_done = prim.last().expect("prim frames");
    let kruskal_done = kruskal.last().expect("kruskal frames");
    assert_eq!(prim_done.description, "Prim MST complete (total=24)");
    assert_eq!(kruskal_done.description, "Kruskal MST complete (total=24)");

    let added = |frames: &[stepviz::frame::GraphFrame<String>]| {
        frames.iter().filter(|f| f.kind == GraphEvent::Add).count()
    };
    assert_eq!(added(&prim), 5);
    assert_eq!(added(&kruskal), 5);
}

#[test]
fn test_disconnected_spanning_tree() {
    let mut graph = build("A-B:1", false);
    graph.add_vertex(s("C"));

    let prim = graph.prim_mst_steps(&s("A"));
    assert_eq!(
        prim.last().map(|f| f.description.as_str()),
        Some("Graph is disconnected; MST not possible from this start")
    );
    let kruskal = graph.kruskal_mst_steps();
    assert_eq!(
        kruskal.last().map(|f| f.description.as_str()),
        Some("Graph is disconnected; MST not possible")
    );
}

#[test]
fn test_bfs_and_dfs_orders() {
    let graph = build("A-B,A-C,B-D,C-D,D-E", false);
    assert_eq!(graph.bfs(&s("A")), vec![s("A"), s("B"), s("C"), s("D"), s("E")]);
    assert_eq!(graph.dfs(&s("A")), vec![s("A"), s("B"), s("D"), s("C"), s("E")]);

    // The recorded visit frames follow the same order
    let visits: Vec<String> = graph
        .bfs_steps(&s("A"))
        .into_iter()
        .filter(|f| f.kind == GraphEvent::Visit)
        .flat_map(|f| f.highlighted_nodes)
        .collect();
    assert_eq!(visits, graph.bfs(&s("A")));
}

#[test]
fn test_directed_graph_respects_edge_direction() {
    let graph = build("A-B,B-C", true);
    assert_eq!(graph.bfs(&s("C")), vec![s("C")]);
    assert_eq!(graph.bfs(&s("A")).len(), 3);
}

#[test]
fn test_missing_start_records_nothing() {
    let graph = build("A-B", false);
    for algorithm in GraphAlgorithm::ALL {
        if algorithm.needs_start() {
            assert!(
                algorithm.record(&graph, &s("Z"), &s("B")).is_empty(),
                "{}",
                algorithm
            );
        }
    }
}

#[test]
fn test_every_algorithm_finishes_with_done() {
    let graph = build("A-B:4,A-C:2,B-C:5,B-D:10,C-E:3,E-D:4,D-F:11", false);
    for algorithm in GraphAlgorithm::ALL {
        let frames = algorithm.record(&graph, &s("A"), &s("F"));
        assert_eq!(
            frames.last().map(|f| f.kind),
            Some(GraphEvent::Done),
            "{}",
            algorithm
        );
        assert!(frames
            .iter()
            .flat_map(|f| &f.highlighted_nodes)
            .all(|v| graph.contains_vertex(v)));
    }
}

#[test]
fn test_remove_vertex_drops_touching_edges() {
    let mut graph = build("A-B,B-C,C-A", true);
    let snapshot = graph.remove_vertex(&s("B"));
    assert_eq!(snapshot.nodes, vec![s("A"), s("C")]);
    assert_eq!(snapshot.edges.len(), 1);
    assert_eq!(snapshot.edges[0].from, s("C"));
    assert_eq!(snapshot.edges[0].to, s("A"));
}
