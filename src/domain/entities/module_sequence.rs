//! Ordered module list of a build

/// One module of the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub id: String,
    /// Whether this module runs the staging coordination logic
    pub runs_staging: bool,
}

impl ModuleEntry {
    pub fn new(id: impl Into<String>, runs_staging: bool) -> Self {
        Self {
            id: id.into(),
            runs_staging,
        }
    }
}

/// Modules in build order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSequence {
    modules: Vec<ModuleEntry>,
}

impl ModuleSequence {
    pub fn new(modules: Vec<ModuleEntry>) -> Self {
        Self { modules }
    }

    /// All modules run the staging logic
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: ids
                .into_iter()
                .map(|id| ModuleEntry::new(id, true))
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModuleEntry> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ModuleEntry> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
