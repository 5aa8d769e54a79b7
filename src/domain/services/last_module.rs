//! Last-module detection
//!
//! A positional computation over the build's module list: the current module
//! is "last" when no later module runs the staging logic.

use crate::domain::entities::ModuleSequence;
use crate::error::{StagingError, StagingResult};

pub struct LastModuleDetector<'a> {
    modules: &'a ModuleSequence,
}

impl<'a> LastModuleDetector<'a> {
    pub fn new(modules: &'a ModuleSequence) -> Self {
        Self { modules }
    }

    /// Id of the last module in build order that runs the staging logic
    pub fn last_participant(&self) -> Option<&'a str> {
        self.modules
            .iter()
            .rev()
            .find(|m| m.runs_staging)
            .map(|m| m.id.as_str())
    }

    /// Id of the first module in build order that runs the staging logic
    pub fn first_participant(&self) -> Option<&'a str> {
        self.modules
            .iter()
            .find(|m| m.runs_staging)
            .map(|m| m.id.as_str())
    }

    /// Whether `current` runs the staging logic at all
    pub fn participates(&self, current: &str) -> StagingResult<bool> {
        self.modules
            .get(current)
            .map(|m| m.runs_staging)
            .ok_or_else(|| StagingError::UnknownModule {
                module: current.to_string(),
            })
    }

    /// Whether `current` is the last module that runs the staging logic
    pub fn is_last(&self, current: &str) -> StagingResult<bool> {
        self.participates(current)?;
        Ok(self.last_participant() == Some(current))
    }

    /// Whether `current` is the first module that runs the staging logic
    pub fn is_first(&self, current: &str) -> StagingResult<bool> {
        self.participates(current)?;
        Ok(self.first_participant() == Some(current))
    }
}
