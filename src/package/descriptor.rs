use std::path::PathBuf;
use std::sync::Arc;

use super::hook::InstallHook;

/// A validated package: non-empty name and description, plus its install hook if any.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Entry name in the source directory
    pub identifier: String,
    pub name: String,
    pub description: String,
    /// Directory the package's own files are resolved against
    pub package_dir: PathBuf,
    pub install: Option<Arc<dyn InstallHook>>,
}

impl Descriptor {
    pub fn is_installable(&self) -> bool {
        self.install.is_some()
    }
}
