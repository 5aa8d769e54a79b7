//! Scenario: offline mode fails a staged deploy before anything is written.

use crate::common::*;

#[test]
fn scenario_offline_deploy_fails_without_writes() {
    let env = TestEnv::builder().with_modules(release_build()).build();

    let result = env.deploy(&["--offline"]);

    assert_eq!(result.exit_code, 3, "stderr: {}", result.stderr);
    assert_output_contains!(result, "offline");
    assert_not_exists!(env, env.staging_path(""));
    assert!(list_all_files(&env.repository_path("")).is_empty());
    assert!(env.managed_repositories().is_empty());
}

#[test]
fn scenario_offline_from_environment() {
    let env = TestEnv::builder().with_modules(release_build()).build();

    let result = env.run_with_env(
        &["deploy", "--build", "build.toml"],
        &[("STAGEDEPLOY_OFFLINE", "true")],
    );

    assert_eq!(result.exit_code, 3, "stderr: {}", result.stderr);
    assert_not_exists!(env, env.staging_path(""));
}

#[test]
fn scenario_skip_wins_over_offline() {
    let env = TestEnv::builder().with_modules(release_build()).build();

    let result = env.deploy(&["--offline", "--skip"]);

    assert_success!(result);
    assert_output_contains!(result, "Skipping staged deploy");
    assert_not_exists!(env, env.staging_path(""));
}

#[test]
fn scenario_offline_commit_fails() {
    let env = TestEnv::builder()
        .with_module(ModuleFixture::jar("core", "1.0.0"))
        .build();
    assert_success!(env.deploy(&["--skip-remote-staging"]));

    let result = env.run(&["commit", "--offline"]);

    assert_eq!(result.exit_code, 3, "stderr: {}", result.stderr);
    assert!(env.managed_repositories().is_empty());
}
