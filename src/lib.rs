//! # MODGRAPH
//!
//! Module dependency discovery and visualization for multi-module Gradle builds.
//!
//! Starting from a root module such as `:account:account-domain`, MODGRAPH reads each
//! module's `build.gradle.kts`, collects the `projects.*` and version-catalog library
//! declarations inside its `dependencies { }` block, and walks the module graph breadth
//! first. The result can be rendered as a Graphviz diagram or exported as JSON.
//!
//! ## Output Formats
//!
//! - **SVG / PNG**: Graphviz `dot` rendering of the diagram
//! - **DOT**: the raw diagram description
//! - **JSON**: the resolved project and library mappings
//!
//! ## Diagram Modes
//!
//! - **Shared**: one node per module, shared dependencies fan in
//! - **Duplicated tree**: shared dependencies are cloned so every node has one parent

pub mod core;
pub mod error;
pub mod formatters;
pub mod parsers;

pub use error::{Error, Result};
