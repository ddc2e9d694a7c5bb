use modgraph::core::{DependencyGraph, DependencyKind, LibraryId, ModuleId};

#[test]
fn record_skips_modules_without_dependencies() {
    let mut graph = DependencyGraph::new();
    assert!(!graph.record(ModuleId::new(":empty"), vec![], vec![]));
    assert!(graph.is_empty());

    assert!(graph.record(
        ModuleId::new(":libs-only"),
        vec![],
        vec![LibraryId::new("libs.okhttp")]
    ));
    assert!(graph.contains(":libs-only"));
    assert!(graph.project_deps(":libs-only").is_empty());
    assert_eq!(graph.libraries().count(), graph.projects().count());
}

#[test]
fn deps_of_kind_and_counts() {
    let mut graph = DependencyGraph::new();
    graph.record(
        ModuleId::new(":app"),
        vec![ModuleId::new(":core"), ModuleId::new(":core")],
        vec![LibraryId::new("libs.a")],
    );

    assert_eq!(
        graph.deps_of_kind(":app", DependencyKind::Project),
        vec![":core", ":core"]
    );
    assert_eq!(graph.deps_of_kind(":app", DependencyKind::Library), vec!["libs.a"]);
    assert!(graph.deps_of_kind(":unknown", DependencyKind::Project).is_empty());

    assert_eq!(graph.module_count(), 1);
    assert_eq!(graph.project_edge_count(), 2);
    assert_eq!(graph.library_edge_count(), 1);
}
