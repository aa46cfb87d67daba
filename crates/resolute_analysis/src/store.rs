//! Template store implementations.

use resolute_error::{ResoluteResult, TemplateError, TemplateErrorKind};
use resolute_interface::TemplateStore;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

/// Template store reading `{dir}/{name}.txt` assets.
///
/// Assets are read on every lookup; the store itself caches nothing.
#[derive(Debug, Clone)]
pub struct FileTemplateStore {
    dir: PathBuf,
}

impl FileTemplateStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for FileTemplateStore {
    fn load(&self, name: &str) -> ResoluteResult<String> {
        let path = self.dir.join(format!("{name}.txt"));

        debug!(template = name, path = %path.display(), "Loading template");

        std::fs::read_to_string(&path).map_err(|e| {
            let kind = match e.kind() {
                std::io::ErrorKind::NotFound => TemplateErrorKind::NotFound(name.to_string()),
                std::io::ErrorKind::InvalidData => TemplateErrorKind::InvalidUtf8(name.to_string()),
                _ => TemplateErrorKind::Io(format!("{}: {}", path.display(), e)),
            };
            TemplateError::new(kind).into()
        })
    }
}

/// In-memory template store for tests and embedded defaults.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: RwLock<HashMap<String, String>>,
}

impl InMemoryTemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a template.
    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) {
        self.templates
            .write()
            .expect("template lock")
            .insert(name.into(), text.into());
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn load(&self, name: &str) -> ResoluteResult<String> {
        self.templates
            .read()
            .expect("template lock")
            .get(name)
            .cloned()
            .ok_or_else(|| TemplateError::new(TemplateErrorKind::NotFound(name.to_string())).into())
    }
}
