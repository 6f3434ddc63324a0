use std::fs;
use std::path::PathBuf;

use sssp_lab::graph::{DirectedGraph, Graph, MutableGraph};
use sssp_lab::Error;
use uuid::Uuid;

// Unique path in the system temp directory
fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sssp_lab_{}_{}.txt", name, Uuid::new_v4()))
}

fn sample_graph() -> DirectedGraph<i32> {
    let mut graph = DirectedGraph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_vertex(label);
    }
    graph.add_edge(0, 1, 4);
    graph.add_edge(0, 2, -2);
    graph.add_edge(2, 3, 7);
    graph.add_edge(3, 0, 1);
    graph
}

#[test]
fn test_save_then_read_round_trip() {
    let path = temp_file("round_trip");
    let saved = sample_graph();
    saved.save_to_file(&path).unwrap();

    let mut loaded: DirectedGraph<i32> = DirectedGraph::with_vertices(9);
    loaded.read_from_file(&path).unwrap();

    assert_eq!(loaded.labels(), saved.labels());
    assert_eq!(loaded.vertex_count(), saved.vertex_count());
    assert_eq!(loaded.edge_count(), saved.edge_count());
    for u in 0..saved.vertex_count() {
        let expected: Vec<_> = saved.outgoing_edges(u).collect();
        let actual: Vec<_> = loaded.outgoing_edges(u).collect();
        assert_eq!(actual, expected);
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_saved_layout_is_one_based() {
    let path = temp_file("layout");
    sample_graph().save_to_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "4\nA B C D\n4\n1 2 4\n1 3 -2\n3 4 7\n4 1 1\n");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_asks_for_creation() {
    let path = temp_file("missing");
    let mut graph = sample_graph();

    match graph.read_from_file(&path) {
        Err(Error::GraphFileMissing(p)) => assert_eq!(p, path),
        other => panic!("Expected GraphFileMissing, got {:?}", other),
    }
    assert_eq!(graph.vertex_count(), 4, "Graph should be untouched");
}

#[test]
fn test_bad_vertex_count_is_rejected() {
    let path = temp_file("bad_count");
    fs::write(&path, "many\nA B\n0\n").unwrap();

    let mut graph = sample_graph();
    let outcome = graph.read_from_file(&path);

    assert!(matches!(outcome, Err(Error::MalformedGraphFile(_))));
    assert_eq!(graph.edge_count(), 4, "Graph should be untouched");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_skips_invalid_edges_and_merges_duplicates() {
    let path = temp_file("lenient");
    fs::write(&path, "3\nX Y Z\n5\n1 2 5\n1 2 2\n2 7 1\n1 x 2\n3 1 -4\n").unwrap();

    let mut graph: DirectedGraph<i32> = DirectedGraph::new();
    graph.read_from_file(&path).unwrap();

    assert_eq!(graph.labels(), &["X", "Y", "Z"]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_edge_weight(0, 1), Some(2));
    assert_eq!(graph.get_edge_weight(2, 0), Some(-4));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_with_path_appends_marker() {
    let path = temp_file("export_path");
    sample_graph().export_with_path(&path, &[0, 2, 3]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "4\nA B C D\n1 2 4\n1 3 -2\n3 4 7\n4 1 1\n\nPATH:\n1 3 4\n"
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_with_empty_path() {
    let path = temp_file("export_empty");
    let mut graph: DirectedGraph<i32> = DirectedGraph::with_vertices(2);
    graph.add_edge(0, 1, 3);
    graph.export_with_path(&path, &[]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("1 2 3\n\nPATH:\n\n"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_export_for_visualizer_has_no_edge_count() {
    let path = temp_file("export");
    sample_graph().export_for_visualizer(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "4\nA B C D\n1 2 4\n1 3 -2\n3 4 7\n4 1 1\n");

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = temp_file("no_such_dir");
    let outcome = sample_graph().save_to_file(dir.join("graph.txt"));
    assert!(matches!(outcome, Err(Error::Io(_))));
}

#[test]
fn test_read_labels_on_separate_lines() {
    let path = temp_file("stacked_labels");
    fs::write(&path, "3\nA\nB\nC\n2\n1 2 5\n2 3 1\n").unwrap();

    let mut graph: DirectedGraph<i32> = DirectedGraph::new();
    graph.read_from_file(&path).unwrap();

    assert_eq!(graph.labels(), &["A", "B", "C"]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_edge_weight(1, 2), Some(1));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_whole_graph_on_one_line() {
    let path = temp_file("one_line");
    fs::write(&path, "3 A B C 2 1 2 5 2 3 1").unwrap();

    let mut graph: DirectedGraph<i32> = DirectedGraph::new();
    graph.read_from_file(&path).unwrap();

    assert_eq!(graph.labels(), &["A", "B", "C"]);
    assert_eq!(graph.get_edge_weight(0, 1), Some(5));
    assert_eq!(graph.get_edge_weight(1, 2), Some(1));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_with_labels_missing_before_edge_count() {
    let path = temp_file("short_labels");
    fs::write(&path, "4\nNorth\nSouth\n").unwrap();

    let mut graph = sample_graph();
    graph.read_from_file(&path).unwrap();

    assert_eq!(graph.labels(), &["North", "South", "3", "4"]);
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_stops_at_path_section_of_export() {
    let path = temp_file("reload_export");
    let mut graph = sample_graph();
    graph.save_to_file(&path).unwrap();
    let mut text = fs::read_to_string(&path).unwrap();
    text.push_str("\nPATH:\n1 3 4\n");
    fs::write(&path, text).unwrap();

    graph.read_from_file(&path).unwrap();
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.get_edge_weight(3, 0), Some(1));

    fs::remove_file(&path).unwrap();
}
