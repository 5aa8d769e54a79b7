//! Test environment builder for isolated stagedeploy testing.
//!
//! Provides `TestEnv` - an isolated build directory holding a manifest, the
//! module outputs, a direct-deploy repository and a repository manager
//! directory, plus helpers to run the stagedeploy CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{ModuleFixture, RELEASE_PROFILE_CONFIG};

/// Local staging root relative to the project
pub const STAGING_ROOT: &str = "target/staging";
/// Direct-deploy repository relative to the project
pub const REPOSITORY: &str = "target/repository";
/// Repository manager directory relative to the project
pub const MANAGER: &str = "target/staging-manager";

/// Result of running a stagedeploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the build
    pub project_root: TempDir,
    /// Temporary directory for HOME (isolates the user config)
    pub home_dir: TempDir,
    pub modules: Vec<ModuleFixture>,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path inside the local staging root
    pub fn staging_path(&self, relative: &str) -> PathBuf {
        self.project_path(STAGING_ROOT).join(relative)
    }

    /// Path inside the direct-deploy repository
    pub fn repository_path(&self, relative: &str) -> PathBuf {
        self.project_path(REPOSITORY).join(relative)
    }

    /// Content directory of a staging repository held by the manager
    pub fn managed_content(&self, repository_id: &str) -> PathBuf {
        self.project_path(MANAGER)
            .join("repositories")
            .join(repository_id)
            .join("content")
    }

    /// State record of a staging repository held by the manager
    pub fn managed_record(&self, repository_id: &str) -> String {
        let path = self
            .project_path(MANAGER)
            .join("repositories")
            .join(repository_id)
            .join("repository.toml");
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Ids of the staging repositories the manager holds
    pub fn managed_repositories(&self) -> Vec<String> {
        let dir = self.project_path(MANAGER).join("repositories");
        let mut ids: Vec<String> = std::fs::read_dir(&dir)
            .map(|entries| {
                entries
                    .flatten()
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        ids.sort();
        ids
    }

    pub fn module(&self, id: &str) -> &ModuleFixture {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .unwrap_or_else(|| panic!("no module '{}' in fixture", id))
    }

    /// Run stagedeploy in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run stagedeploy from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("STAGEDEPLOY_OFFLINE")
            .env_remove("STAGEDEPLOY_PROFILE")
            .env_remove("STAGEDEPLOY_STAGING_ROOT")
            .env_remove("STAGEDEPLOY_REPOSITORY_ID");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute stagedeploy");
        output_to_result(output)
    }

    /// `deploy --build build.toml` plus extra arguments
    pub fn deploy(&self, extra: &[&str]) -> TestResult {
        let mut args = vec!["deploy", "--build", "build.toml"];
        args.extend_from_slice(extra);
        self.run(&args)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    modules: Vec<ModuleFixture>,
    config: Option<String>,
    create_manager: bool,
    create_repository: bool,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            config: Some(RELEASE_PROFILE_CONFIG.to_string()),
            create_manager: true,
            create_repository: true,
        }
    }

    pub fn with_module(mut self, module: ModuleFixture) -> Self {
        self.modules.push(module);
        self
    }

    pub fn with_modules(mut self, modules: Vec<ModuleFixture>) -> Self {
        self.modules.extend(modules);
        self
    }

    /// Replace the project `stagedeploy.toml`
    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }

    /// Leave the repository manager directory missing (unreachable)
    pub fn without_manager(mut self) -> Self {
        self.create_manager = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            modules: self.modules,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stagedeploy")),
        };

        let manifest: Vec<String> = env.modules.iter().map(|m| m.manifest_entry()).collect();
        env.write_project_file("build.toml", &manifest.join("\n"));

        for module in &env.modules {
            env.write_project_file(&module.descriptor_file(), &module.descriptor_content());
            if module.has_file {
                env.write_project_file(&module.primary_file(), &format!("jar:{}\n", module.id));
            }
            for classifier in &module.attached {
                env.write_project_file(
                    &module.attached_file(classifier),
                    &format!("{}:{}\n", classifier, module.id),
                );
            }
        }

        if let Some(config) = &self.config {
            env.write_project_file("stagedeploy.toml", config);
        }
        if self.create_manager {
            std::fs::create_dir_all(env.project_path(MANAGER)).expect("Failed to create manager");
        }
        if self.create_repository {
            std::fs::create_dir_all(env.project_path(REPOSITORY))
                .expect("Failed to create repository");
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
