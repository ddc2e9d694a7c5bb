use std::path::PathBuf;

use crate::parsers::DeclarationSyntax;

pub const DEFAULT_DESCRIPTOR_NAME: &str = "build.gradle.kts";

/// Where to look for modules and how to read their descriptors.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory that module paths are resolved against
    pub project_root: PathBuf,
    /// File name of the per-module build descriptor
    pub descriptor_name: String,
    pub syntax: DeclarationSyntax,
}

impl AnalyzerConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            descriptor_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
            syntax: DeclarationSyntax::default(),
        }
    }

    pub fn with_descriptor_name(mut self, name: impl Into<String>) -> Self {
        self.descriptor_name = name.into();
        self
    }

    pub fn with_syntax(mut self, syntax: DeclarationSyntax) -> Self {
        self.syntax = syntax;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
