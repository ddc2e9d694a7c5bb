use anyhow::Result;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

use super::naming::ModuleId;

/// Maps module identifiers to their build descriptors on disk.
#[derive(Debug, Clone)]
pub struct DescriptorLocator {
    project_root: PathBuf,
    descriptor_name: String,
}

impl DescriptorLocator {
    pub fn new(project_root: impl Into<PathBuf>, descriptor_name: impl Into<String>) -> Self {
        Self {
            project_root: project_root.into(),
            descriptor_name: descriptor_name.into(),
        }
    }

    /// Expected descriptor path for `module`, whether or not it exists.
    pub fn descriptor_path(&self, module: &ModuleId) -> PathBuf {
        self.project_root
            .join(module.to_path())
            .join(&self.descriptor_name)
    }

    /// Returns the descriptor path only when a file is present there.
    pub fn locate(&self, module: &ModuleId) -> Option<PathBuf> {
        let path = self.descriptor_path(module);
        path.is_file().then_some(path)
    }

    /// Lists every module under the project root that has a descriptor, sorted.
    ///
    /// The root project's own descriptor is not a module and is skipped, as are
    /// hidden directories and Gradle `build/` output.
    pub fn discover_modules(&self) -> Result<Vec<ModuleId>> {
        let mut modules = Vec::new();

        for entry in WalkDir::new(&self.project_root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry))
        {
            let entry = entry?;
            if !entry.file_type().is_file() || entry.file_name() != self.descriptor_name.as_str() {
                continue;
            }

            let Some(module_dir) = entry.path().parent() else {
                continue;
            };
            let Ok(relative) = module_dir.strip_prefix(&self.project_root) else {
                continue;
            };

            let segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            if segments.is_empty() {
                continue;
            }
            modules.push(ModuleId::new(segments.join(":")));
        }

        modules.sort();
        Ok(modules)
    }
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "build"
}
