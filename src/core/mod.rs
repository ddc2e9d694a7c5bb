pub mod analyzer;
pub mod config;
pub mod graph;
pub mod locator;
pub mod naming;

pub use analyzer::DependencyAnalyzer;
pub use config::AnalyzerConfig;
pub use graph::{DependencyGraph, DependencyKind};
pub use locator::DescriptorLocator;
pub use naming::{LibraryId, ModuleId};
