use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, warn};

use super::{AnalyzerConfig, DependencyGraph, DescriptorLocator, ModuleId};
use crate::parsers::{DeclarationParser, Declarations, GradleKtsParser};

/// Breadth-first walk over the module graph, starting from one root module.
pub struct DependencyAnalyzer {
    locator: DescriptorLocator,
    parser: Box<dyn DeclarationParser + Send + Sync>,
}

impl DependencyAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let parser = GradleKtsParser::with_syntax(config.syntax.clone());
        Self::with_parser(config, parser)
    }

    pub fn with_parser(
        config: AnalyzerConfig,
        parser: impl DeclarationParser + Send + Sync + 'static,
    ) -> Self {
        Self {
            locator: DescriptorLocator::new(config.project_root, config.descriptor_name),
            parser: Box::new(parser),
        }
    }

    pub fn locator(&self) -> &DescriptorLocator {
        &self.locator
    }

    /// Resolves the dependencies of `root` and everything it reaches.
    ///
    /// With `max_depth > 0`, modules at depth `max_depth` or deeper are neither
    /// scanned nor recorded; `max_depth == 1` therefore yields the root alone.
    /// Each module is enqueued once, at the depth it was first discovered, so
    /// dependency cycles terminate even without a depth limit.
    pub fn analyze(&self, root: &ModuleId, max_depth: usize) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let mut queue = VecDeque::new();
        let mut depths: HashMap<ModuleId, usize> = HashMap::new();

        queue.push_back(root.clone());
        depths.insert(root.clone(), 0);

        info!(root = %root, max_depth, "analyzing module dependencies");

        while let Some(module) = queue.pop_front() {
            let depth = depths.get(&module).copied().unwrap_or_default();
            if max_depth > 0 && depth >= max_depth {
                debug!(module = %module, depth, "depth limit reached, skipping");
                continue;
            }

            let Some(descriptor) = self.locator.locate(&module) else {
                let expected = self.locator.descriptor_path(&module);
                debug!(module = %module, path = %expected.display(), "no descriptor found");
                continue;
            };

            let declarations = match self.parser.parse_file(&descriptor) {
                Ok(declarations) => declarations,
                Err(err) => {
                    warn!(
                        "Failed to read {} {}: {}",
                        self.parser.descriptor_kind(),
                        descriptor.display(),
                        err
                    );
                    Declarations::default()
                }
            };

            debug!(
                module = %module,
                depth,
                projects = declarations.projects.len(),
                libraries = declarations.libraries.len(),
                "scanned descriptor"
            );

            for dependency in &declarations.projects {
                if !depths.contains_key(dependency) {
                    depths.insert(dependency.clone(), depth + 1);
                    queue.push_back(dependency.clone());
                }
            }

            graph.record(module, declarations.projects, declarations.libraries);
        }

        info!(
            modules = graph.module_count(),
            project_edges = graph.project_edge_count(),
            library_edges = graph.library_edge_count(),
            "analysis finished"
        );

        graph
    }
}

impl Default for DependencyAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
