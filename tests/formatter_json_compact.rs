use modgraph::core::{DependencyGraph, LibraryId, ModuleId};
use modgraph::formatters::JsonCompactFormatter;
use serde_json::Value;

#[test]
fn json_compact_formatter_outputs_both_mappings() {
    let mut graph = DependencyGraph::new();
    graph.record(
        ModuleId::new(":app"),
        vec![ModuleId::new(":core"), ModuleId::new(":account:account-domain")],
        vec![LibraryId::new("libs.kotlinCoroutines")],
    );
    graph.record(
        ModuleId::new(":core"),
        vec![],
        vec![LibraryId::new("deliverooLibs.retrofit")],
    );

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("json");

    JsonCompactFormatter::new()
        .format_to_file(&graph, &ModuleId::new(":app"), &path)
        .unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let v: Value = serde_json::from_str(&data).unwrap();

    assert_eq!(v["meta"]["root"], ":app");
    assert_eq!(v["meta"]["modules"].as_u64().unwrap(), 2);
    assert_eq!(v["meta"]["project_edges"].as_u64().unwrap(), 2);
    assert_eq!(v["meta"]["library_edges"].as_u64().unwrap(), 2);

    assert_eq!(v["projects"][":app"][1], ":account:account-domain");
    assert!(v["projects"][":core"].as_array().unwrap().is_empty());
    assert_eq!(v["libraries"][":core"][0], "deliverooLibs.retrofit");

    std::fs::remove_file(&path).ok();
}

#[test]
fn pretty_output_is_multiline() {
    let mut graph = DependencyGraph::new();
    graph.record(ModuleId::new(":app"), vec![ModuleId::new(":core")], vec![]);

    let compact = JsonCompactFormatter::new()
        .format_graph(&graph, &ModuleId::new(":app"))
        .unwrap();
    let pretty = JsonCompactFormatter::new()
        .with_pretty(true)
        .format_graph(&graph, &ModuleId::new(":app"))
        .unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert_eq!(
        serde_json::from_str::<Value>(&compact).unwrap(),
        serde_json::from_str::<Value>(&pretty).unwrap()
    );
}
