//! Scenario: snapshots and opted-out modules bypass staging and go straight
//! to the deployment repository.

use crate::common::*;

fn version_dir_files(env: &TestEnv, module: &ModuleFixture) -> Vec<String> {
    let dir = env.repository_path(&module.layout_path(""));
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("missing {}: {}", dir.display(), e))
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn scenario_snapshot_is_deployed_directly() {
    let env = TestEnv::builder()
        .with_module(ModuleFixture::jar("core", "1.0-SNAPSHOT").with_attached("sources"))
        .build();

    let result = env.deploy(&[]);

    assert_success!(result);
    assert_output_contains!(result, "Performing ordinary deploy");
    assert_not_exists!(env, env.staging_path(""));
    assert!(env.managed_repositories().is_empty());

    let files = version_dir_files(&env, env.module("core"));
    let jar = files
        .iter()
        .find(|f| f.ends_with(".jar") && !f.contains("sources"))
        .expect("primary jar deployed");
    let version = jar
        .strip_prefix("core-")
        .and_then(|v| v.strip_suffix(".jar"))
        .unwrap();
    assert!(version.starts_with("1.0-2"), "timestamped version: {version}");
    assert!(version.ends_with("-1"));
    // attached artifact shares the primary's resolved version
    assert!(files.contains(&format!("core-{version}-sources.jar")));
    assert!(files.contains(&format!("core-{version}.pom")));
    assert_exists!(
        env,
        env.repository_path("com/example/core/maven-metadata.xml")
    );
}

#[test]
fn scenario_skip_local_staging_deploys_release_directly() {
    let env = TestEnv::builder()
        .with_module(ModuleFixture::jar("core", "1.0.0"))
        .build();

    let result = env.deploy(&["--skip-local-staging", "--mark-release"]);

    assert_success!(result);
    assert_not_exists!(env, env.staging_path(""));
    let core = env.module("core");
    assert_exists!(env, env.repository_path(&core.layout_path("core-1.0.0.jar")));
    let metadata =
        std::fs::read_to_string(env.repository_path("com/example/core/maven-metadata.xml"))
            .unwrap();
    assert!(metadata.contains("<release>1.0.0</release>"), "{metadata}");
}

#[test]
fn scenario_unknown_module_is_a_configuration_error() {
    let env = TestEnv::builder()
        .with_module(ModuleFixture::jar("core", "1.0.0"))
        .build();

    let result = env.deploy(&["--module", "nope"]);

    assert_eq!(result.exit_code, 2, "stderr: {}", result.stderr);
    assert_output_contains!(result, "'nope'");
}

#[test]
fn scenario_module_without_staging_is_deployed_directly() {
    let env = TestEnv::builder()
        .with_modules(vec![
            ModuleFixture::jar("core", "1.0.0"),
            ModuleFixture::jar("docs", "1.0.0").without_staging(),
        ])
        .build();

    let result = env.deploy(&["--module", "docs"]);

    assert_success!(result);
    assert_output_contains!(result, "Performing ordinary deploy");
    assert_not_exists!(env, env.staging_path(""));
    assert!(env.managed_repositories().is_empty());
    let docs = env.module("docs");
    assert_exists!(env, env.repository_path(&docs.layout_path("docs-1.0.0.jar")));
}
