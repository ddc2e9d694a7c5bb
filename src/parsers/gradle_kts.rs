use tracing::debug;

use super::{DeclarationParser, Declarations};
use crate::core::naming::PROJECT_ACCESSOR_PREFIX;
use crate::core::{LibraryId, ModuleId};

/// The narrow declaration idiom the line scanner understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSyntax {
    /// Text that opens the dependency block, e.g. `dependencies {`
    pub block_opener: String,
    /// Configuration keywords, each expected directly before `(`
    pub configurations: Vec<String>,
    pub project_prefix: String,
    /// Version-catalog accessors, tried in order
    pub library_prefixes: Vec<String>,
}

impl Default for DeclarationSyntax {
    fn default() -> Self {
        Self {
            block_opener: "dependencies {".to_string(),
            configurations: vec![
                "implementation".to_string(),
                "api".to_string(),
                "compileOnly".to_string(),
            ],
            project_prefix: PROJECT_ACCESSOR_PREFIX.to_string(),
            library_prefixes: vec!["libs.".to_string(), "deliverooLibs.".to_string()],
        }
    }
}

impl DeclarationSyntax {
    pub fn with_library_prefix(mut self, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with('.') {
            prefix.push('.');
        }
        if !self.library_prefixes.contains(&prefix) {
            self.library_prefixes.push(prefix);
        }
        self
    }
}

/// Line and brace-depth scanner for `build.gradle.kts` files.
///
/// This is not a Kotlin parser: it expects one declaration per line inside the
/// `dependencies { }` block and only picks up the first project and the first
/// library reference on a line.
#[derive(Debug, Clone, Default)]
pub struct GradleKtsParser {
    syntax: DeclarationSyntax,
}

impl GradleKtsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_syntax(syntax: DeclarationSyntax) -> Self {
        Self { syntax }
    }

    fn parse_project_dependency(&self, line: &str) -> Option<ModuleId> {
        let prefix = self.syntax.project_prefix.as_str();
        let declared = self
            .syntax
            .configurations
            .iter()
            .any(|keyword| line.contains(&format!("{keyword}({prefix}")));
        if !declared {
            return None;
        }

        let token = token_from(line, prefix)?;
        debug!(project = token, line, "found project dependency");
        Some(ModuleId::from_dot_notation(token))
    }

    fn parse_library_dependency(&self, line: &str) -> Option<LibraryId> {
        let prefix = self
            .syntax
            .library_prefixes
            .iter()
            .find(|prefix| line.contains(prefix.as_str()))?;

        let declared = self
            .syntax
            .configurations
            .iter()
            .any(|keyword| line.contains(&format!("{keyword}(")));
        if !declared {
            return None;
        }

        let token = token_from(line, prefix)?;
        debug!(library = token, line, "found library dependency");
        Some(LibraryId::new(token))
    }
}

/// Text from the first `prefix` up to (not including) the next `)`.
fn token_from<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let start = line.find(prefix)?;
    let rest = &line[start..];
    let end = rest.find(')')?;
    Some(&rest[..end])
}

impl DeclarationParser for GradleKtsParser {
    fn parse_source(&self, source: &str) -> Declarations {
        let mut declarations = Declarations::default();
        let mut in_block = false;
        let mut brace_depth = 0usize;

        for line in source.lines().map(str::trim) {
            if line.contains(self.syntax.block_opener.as_str()) {
                in_block = true;
                brace_depth = 1;
                continue;
            }

            if !in_block {
                continue;
            }

            if line.contains('{') {
                brace_depth += 1;
            }
            if line.contains('}') {
                brace_depth = brace_depth.saturating_sub(1);
                if brace_depth == 0 {
                    in_block = false;
                }
            }

            if let Some(module) = self.parse_project_dependency(line) {
                declarations.projects.push(module);
            }
            if let Some(library) = self.parse_library_dependency(line) {
                declarations.libraries.push(library);
            }
        }

        declarations
    }

    fn descriptor_kind(&self) -> &str {
        "build.gradle.kts"
    }
}
