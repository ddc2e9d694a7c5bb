use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::naming::{LibraryId, ModuleId};

/// Whether an edge points at another module of the build or at an external library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Project,
    Library,
}

/// Direct dependencies of every module reached from the root.
///
/// Both maps always share the same key set: a module is recorded in both or in
/// neither. Modules without a descriptor, or whose descriptor declares nothing,
/// are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    projects: BTreeMap<ModuleId, Vec<ModuleId>>,
    libraries: BTreeMap<ModuleId, Vec<LibraryId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a module's declarations. Returns false, and records nothing,
    /// when both lists are empty.
    pub fn record(
        &mut self,
        module: ModuleId,
        projects: Vec<ModuleId>,
        libraries: Vec<LibraryId>,
    ) -> bool {
        if projects.is_empty() && libraries.is_empty() {
            return false;
        }
        self.projects.insert(module.clone(), projects);
        self.libraries.insert(module, libraries);
        true
    }

    pub fn contains(&self, module: &str) -> bool {
        self.projects.contains_key(module)
    }

    pub fn project_deps(&self, module: &str) -> &[ModuleId] {
        self.projects.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn library_deps(&self, module: &str) -> &[LibraryId] {
        self.libraries.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dependencies of one kind as plain strings, for renderers that mix both.
    pub fn deps_of_kind(&self, module: &str, kind: DependencyKind) -> Vec<&str> {
        match kind {
            DependencyKind::Project => self
                .project_deps(module)
                .iter()
                .map(ModuleId::as_str)
                .collect(),
            DependencyKind::Library => self
                .library_deps(module)
                .iter()
                .map(LibraryId::as_str)
                .collect(),
        }
    }

    pub fn projects(&self) -> impl Iterator<Item = (&ModuleId, &[ModuleId])> {
        self.projects.iter().map(|(m, deps)| (m, deps.as_slice()))
    }

    pub fn libraries(&self) -> impl Iterator<Item = (&ModuleId, &[LibraryId])> {
        self.libraries.iter().map(|(m, deps)| (m, deps.as_slice()))
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleId> {
        self.projects.keys()
    }

    pub fn module_count(&self) -> usize {
        self.projects.len()
    }

    pub fn project_edge_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }

    pub fn library_edge_count(&self) -> usize {
        self.libraries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
