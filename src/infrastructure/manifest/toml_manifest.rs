//! TOML Build Manifest
//!
//! ```toml
//! [[modules]]
//! id = "core"
//! group_id = "com.example"
//! artifact_id = "core"
//! version = "1.0.0"
//! packaging = "jar"
//! descriptor = "core/pom.xml"
//! file = "core/target/core-1.0.0.jar"
//!
//! [[modules.attached]]
//! classifier = "sources"
//! file = "core/target/core-1.0.0-sources.jar"
//! ```
//!
//! Relative paths resolve against the manifest's directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Artifact, ModuleEntry, ModuleSequence, ProjectDeployUnit};
use crate::domain::value_objects::{Coordinates, Packaging};
use crate::error::{StagingError, StagingResult};

/// An attached artifact as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedDecl {
    #[serde(default)]
    pub classifier: Option<String>,

    #[serde(default = "default_extension")]
    pub extension: String,

    /// Missing files are reported when the module is deployed
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// One module as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    #[serde(default)]
    pub packaging: Packaging,

    /// Primary file extension; the packaging tag when omitted
    #[serde(default)]
    pub extension: Option<String>,

    pub descriptor: PathBuf,

    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Whether this module runs the staging coordination logic
    #[serde(default = "default_staging")]
    pub staging: bool,

    #[serde(default)]
    pub attached: Vec<AttachedDecl>,
}

fn default_extension() -> String {
    "jar".to_string()
}

fn default_staging() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    modules: Vec<ModuleDecl>,
}

/// Modules of one build, in build order
#[derive(Debug, Clone)]
pub struct BuildManifest {
    path: PathBuf,
    modules: Vec<ModuleDecl>,
}

impl BuildManifest {
    pub fn load(path: &Path) -> StagingResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| invalid(path, e.to_string()))?;
        Self::parse(path, &content)
    }

    /// Parse manifest text; `path` anchors relative file paths
    pub fn parse(path: &Path, content: &str) -> StagingResult<Self> {
        let file: ManifestFile =
            toml::from_str(content).map_err(|e| invalid(path, e.to_string()))?;

        if file.modules.is_empty() {
            return Err(invalid(path, "no modules declared".to_string()));
        }

        let mut seen = BTreeSet::new();
        for module in &file.modules {
            if module.id.trim().is_empty() {
                return Err(invalid(path, "module id must not be empty".to_string()));
            }
            if !seen.insert(module.id.as_str()) {
                return Err(invalid(
                    path,
                    format!("module '{}' is declared more than once", module.id),
                ));
            }
        }

        let base = path.parent().unwrap_or(Path::new("")).to_path_buf();
        let modules = file
            .modules
            .into_iter()
            .map(|module| module.anchored(&base))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            modules,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the manifest
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    pub fn modules(&self) -> &[ModuleDecl] {
        &self.modules
    }

    pub fn sequence(&self) -> ModuleSequence {
        ModuleSequence::new(
            self.modules
                .iter()
                .map(|m| ModuleEntry::new(m.id.clone(), m.staging))
                .collect(),
        )
    }

    pub fn unit(&self, id: &str) -> StagingResult<ProjectDeployUnit> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .map(ModuleDecl::unit)
            .ok_or_else(|| StagingError::UnknownModule {
                module: id.to_string(),
            })
    }

    /// Units of the modules that run the staging logic, in build order
    pub fn units(&self) -> Vec<ProjectDeployUnit> {
        self.modules
            .iter()
            .filter(|m| m.staging)
            .map(ModuleDecl::unit)
            .collect()
    }
}

impl ModuleDecl {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(&self.group_id, &self.artifact_id, &self.version)
    }

    pub fn unit(&self) -> ProjectDeployUnit {
        let coordinates = self.coordinates();
        let extension = self
            .extension
            .clone()
            .unwrap_or_else(|| self.packaging.as_str().to_string());

        let mut primary = Artifact::new(coordinates.clone(), extension);
        if let Some(file) = &self.file {
            primary = primary.with_file(file);
        }

        let attached = self
            .attached
            .iter()
            .map(|decl| {
                let mut artifact = Artifact::new(coordinates.clone(), &decl.extension)
                    .with_classifier(decl.classifier.clone().unwrap_or_default());
                if let Some(file) = &decl.file {
                    artifact = artifact.with_file(file);
                }
                artifact
            })
            .collect();

        ProjectDeployUnit::new(
            self.id.clone(),
            primary,
            self.packaging.clone(),
            &self.descriptor,
        )
        .with_attached(attached)
    }

    fn anchored(mut self, base: &Path) -> Self {
        self.descriptor = base.join(&self.descriptor);
        self.file = self.file.map(|f| base.join(f));
        for attached in &mut self.attached {
            attached.file = attached.file.take().map(|f| base.join(f));
        }
        self
    }
}

fn invalid(path: &Path, message: String) -> StagingError {
    StagingError::InvalidManifest {
        file: path.to_path_buf(),
        message,
    }
}
