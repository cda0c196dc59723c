//! Loading canvases and configuration from disk

use axes_artifact::Canvas;
use axes_cli::{filter_canvas, load_canvas, AxesConfig, CliError, SearchPolicy};
use axes_graph::EdgeOrientation;
use axes_test_utils::{access_graph, edge, named};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_canvas_file_round_trip_search() {
    let canvas = access_graph();
    let file = write_temp(&canvas.to_json_pretty().unwrap());

    let loaded = load_canvas(file.path()).unwrap();
    assert_eq!(loaded, canvas);

    let shown: Vec<&str> = filter_canvas(&loaded, "tenant = Fabrikam", &AxesConfig::default())
        .iter()
        .map(|n| n.name())
        .collect();
    assert_eq!(shown, vec!["bob", "billing-app"]);
}

#[test]
fn test_canvas_with_dangling_edge_still_loads() {
    let canvas = Canvas::new()
        .with_node(named("a"))
        .with_node(named("b"))
        .with_edge(edge("a", "b"))
        .with_edge(edge("b", "gone"));
    let file = write_temp(&canvas.to_json_pretty().unwrap());

    let loaded = load_canvas(file.path()).unwrap();
    assert_eq!(loaded.dangling_edges().len(), 1);
    assert_eq!(SearchPolicy::default().filter(&loaded, "name=b").len(), 2);
}

#[test]
fn test_missing_canvas_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_canvas(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_canvas_is_canvas_error() {
    let file = write_temp("{ not json");
    let err = load_canvas(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Canvas(_)));
}

#[test]
fn test_config_file_loads() {
    let file = write_temp("[search]\nmin_query_len = 4\norientation = \"directed\"\n");
    let config = AxesConfig::load(file.path()).unwrap();
    assert_eq!(
        config,
        AxesConfig::new()
            .with_min_query_len(4)
            .with_orientation(EdgeOrientation::Directed)
    );
}

#[test]
fn test_bad_config_file_is_config_error() {
    let file = write_temp("[search]\nmin_query_len = \"three\"\n");
    assert!(matches!(
        AxesConfig::load(file.path()).unwrap_err(),
        CliError::Config(_)
    ));
}
