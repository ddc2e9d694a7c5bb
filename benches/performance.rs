use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modgraph::core::{AnalyzerConfig, DependencyAnalyzer, DependencyGraph, ModuleId};
use modgraph::formatters::DotFormatter;
use tempfile::TempDir;

const LAYERS: usize = 4;
const WIDTH: usize = 4;

fn module_name(layer: usize, index: usize) -> String {
    format!("layer{}:module{}", layer, index)
}

/// Every module depends on all modules of the next layer plus a few libraries.
fn create_layered_project() -> TempDir {
    let dir = TempDir::new().unwrap();

    let root = dir.path().join("app");
    std::fs::create_dir_all(&root).unwrap();
    let mut body = String::new();
    for index in 0..WIDTH {
        body.push_str(&format!("    implementation(projects.layer0.module{})\n", index));
    }
    std::fs::write(
        root.join("build.gradle.kts"),
        format!("dependencies {{\n{}}}\n", body),
    )
    .unwrap();

    for layer in 0..LAYERS {
        for index in 0..WIDTH {
            let module = ModuleId::new(module_name(layer, index));
            let module_dir = dir.path().join(module.to_path());
            std::fs::create_dir_all(&module_dir).unwrap();

            let mut body = String::new();
            if layer + 1 < LAYERS {
                for next in 0..WIDTH {
                    body.push_str(&format!(
                        "    api(projects.layer{}.module{})\n",
                        layer + 1,
                        next
                    ));
                }
            }
            body.push_str(&format!("    implementation(libs.library{})\n", index));
            body.push_str("    implementation(deliverooLibs.retrofit) {\n        isTransitive = false\n    }\n");

            std::fs::write(
                module_dir.join("build.gradle.kts"),
                format!(
                    r#"
plugins {{
    id("com.android.library")
}}

dependencies {{
{}}}
"#,
                    body
                ),
            )
            .unwrap();
        }
    }

    dir
}

fn analyze(dir: &TempDir) -> DependencyGraph {
    DependencyAnalyzer::new(AnalyzerConfig::new(dir.path())).analyze(&ModuleId::new(":app"), 0)
}

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_analysis");
    let project = create_layered_project();

    group.bench_function("layered_project", |b| {
        b.iter(|| black_box(analyze(black_box(&project))));
    });

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram_rendering");
    let project = create_layered_project();
    let graph = analyze(&project);
    let root = ModuleId::new(":app");

    group.bench_function("shared_nodes", |b| {
        let formatter = DotFormatter::new();
        b.iter(|| black_box(formatter.render(black_box(&graph), &root).unwrap()));
    });

    group.bench_function("duplicated_tree", |b| {
        let formatter = DotFormatter::new().with_duplicate_nodes(true);
        b.iter(|| black_box(formatter.render(black_box(&graph), &root).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_analysis, benchmark_rendering);
criterion_main!(benches);
