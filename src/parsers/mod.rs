pub mod gradle_kts;

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::{LibraryId, ModuleId};

pub use gradle_kts::{DeclarationSyntax, GradleKtsParser};

/// Direct dependencies declared by one build descriptor, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub projects: Vec<ModuleId>,
    pub libraries: Vec<LibraryId>,
}

impl Declarations {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.libraries.is_empty()
    }
}

/// Extracts dependency declarations from a build descriptor.
pub trait DeclarationParser {
    fn parse_source(&self, source: &str) -> Declarations;

    fn parse_file(&self, file_path: &Path) -> Result<Declarations> {
        let bytes = fs::read(file_path)?;
        Ok(self.parse_source(&String::from_utf8_lossy(&bytes)))
    }

    fn descriptor_kind(&self) -> &str;
}
