//! Scenario: `--skip-remote-staging` keeps a release in the local staging
//! area; a later manual commit pushes it.

use crate::common::*;

fn single_module_env() -> TestEnv {
    TestEnv::builder()
        .with_module(ModuleFixture::jar("core", "1.0.0"))
        .build()
}

#[test]
fn scenario_skip_remote_staging_keeps_content_local() {
    let env = single_module_env();

    let result = env.deploy(&["--skip-remote-staging"]);

    assert_success!(result);
    assert_output_contains!(result, "skipping remote staging at user's demand");
    assert_output_contains!(result, "target/staging");
    assert!(env.managed_repositories().is_empty());

    let core = env.module("core");
    assert_exists!(
        env,
        env.staging_path("release-profile").join(core.layout_path("core-1.0.0.jar"))
    );
    assert_exists!(
        env,
        env.staging_path("release-profile").join(core.layout_path("core-1.0.0.pom"))
    );
}

#[test]
fn scenario_status_lists_pending_profile() {
    let env = single_module_env();
    assert_success!(env.deploy(&["--skip-remote-staging"]));

    let result = env.run(&["status"]);

    assert_success!(result);
    assert_output_contains!(result, "release-profile");
    assert_output_contains!(result, "2 file(s)");
    assert_output_contains!(result, "pending");
}

#[test]
fn scenario_manual_commit_pushes_local_content() {
    let env = single_module_env();
    assert_success!(env.deploy(&["--skip-remote-staging"]));

    let result = env.run(&["commit"]);

    assert_success!(result);
    assert_eq!(env.managed_repositories(), vec!["release-profile-0001"]);
    assert!(env.managed_record("release-profile-0001").contains("closed"));

    let status = env.run(&["status"]);
    assert_output_contains!(status, "committed to release-profile-0001");

    // read once: a second commit finds nothing
    let again = env.run(&["commit"]);
    assert_success!(again);
    assert_output_contains!(again, "Nothing staged locally");
    assert_eq!(env.managed_repositories(), vec!["release-profile-0001"]);
}

#[test]
fn scenario_status_json() {
    let env = single_module_env();
    assert_success!(env.deploy(&["--skip-remote-staging"]));

    let result = env.run(&["--json", "status"]);

    assert_success!(result);
    let value: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(value["profiles"][0]["profile"], "release-profile");
    assert_eq!(value["profiles"][0]["files"], 2);
    assert_eq!(value["profiles"][0]["committed"], false);
}

#[test]
fn scenario_commit_into_unknown_repository_is_a_configuration_error() {
    let env = single_module_env();
    assert_success!(env.deploy(&["--skip-remote-staging"]));

    let result = env.run(&["commit", "--repository-id", "release-profile-0099"]);

    assert_eq!(result.exit_code, 2, "stderr: {}", result.stderr);
    assert_output_contains!(result, "release-profile-0099");
    // content stays for another attempt
    let status = env.run(&["status"]);
    assert_output_contains!(status, "pending");
}

#[test]
fn scenario_commit_with_unreachable_manager_is_a_transport_error() {
    let env = TestEnv::builder()
        .with_module(ModuleFixture::jar("core", "1.0.0"))
        .with_config(&format!(
            "{}\n[manager]\npath = \"missing-manager\"\n",
            RELEASE_PROFILE_CONFIG
        ))
        .build();
    assert_success!(env.deploy(&["--skip-remote-staging", "--profile", "release-profile"]));

    let result = env.run(&["commit"]);

    assert_eq!(result.exit_code, 4, "stderr: {}", result.stderr);
}

#[test]
fn scenario_later_build_without_staging_leaves_kept_content_alone() {
    let env = TestEnv::builder()
        .with_modules(vec![
            ModuleFixture::jar("core", "1.0.0"),
            ModuleFixture::jar("snap", "2.0-SNAPSHOT"),
        ])
        .build();
    assert_success!(env.deploy(&["--skip-remote-staging"]));

    let result = env.deploy(&["--module", "snap"]);

    assert_success!(result);
    assert!(env.managed_repositories().is_empty());
    let status = env.run(&["status"]);
    assert_output_contains!(status, "pending");
}
