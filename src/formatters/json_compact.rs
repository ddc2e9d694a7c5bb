use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

use crate::core::{DependencyGraph, ModuleId};
use crate::error::Result;

/// JSON export of the resolved mappings, keyed by module.
pub struct JsonCompactFormatter {
    /// Pretty-print instead of a single line
    pretty: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_file(
        &self,
        graph: &DependencyGraph,
        root: &ModuleId,
        output_path: &Path,
    ) -> Result<()> {
        let json_content = self.format_graph(graph, root)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &DependencyGraph, root: &ModuleId) -> Result<String> {
        let projects: Map<String, Value> = graph
            .projects()
            .map(|(module, deps)| (module.to_string(), json!(deps)))
            .collect();
        let libraries: Map<String, Value> = graph
            .libraries()
            .map(|(module, deps)| (module.to_string(), json!(deps)))
            .collect();

        let output = json!({
            "meta": {
                "root": root,
                "modules": graph.module_count(),
                "project_edges": graph.project_edge_count(),
                "library_edges": graph.library_edge_count()
            },
            "projects": projects,
            "libraries": libraries
        });

        let content = if self.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        Ok(content)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
