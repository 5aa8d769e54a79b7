//! Scenario: a three-module release build is staged locally and committed
//! to the repository manager exactly once, at the last module.

use crate::common::*;

fn release_env() -> TestEnv {
    TestEnv::builder().with_modules(release_build()).build()
}

fn expected_content(env: &TestEnv) -> Vec<String> {
    let core = env.module("core");
    let api = env.module("api");
    let parent = env.module("parent");
    vec![
        api.layout_path("api-1.0.0.jar"),
        api.layout_path("api-1.0.0.pom"),
        core.layout_path("core-1.0.0-sources.jar"),
        core.layout_path("core-1.0.0.jar"),
        core.layout_path("core-1.0.0.pom"),
        parent.layout_path("parent-1.0.0.pom"),
    ]
}

#[test]
fn scenario_release_build_commits_once() {
    let env = release_env();

    let result = env.deploy(&[]);

    assert_success!(result);
    assert_eq!(env.managed_repositories(), vec!["release-profile-0001"]);
    assert!(env.managed_record("release-profile-0001").contains("closed"));

    let content = env.managed_content("release-profile-0001");
    for relative in expected_content(&env) {
        assert_exists!(env, content.join(&relative));
    }
    assert_output_contains!(result, "Opened staging repository release-profile-0001");
    assert_output_contains!(result, "Committed 6 file(s) to 1 staging repository(ies)");

    // nothing went to the direct-deploy repository
    assert!(list_all_files(&env.repository_path("")).is_empty());
    assert_exists!(env, env.staging_path("release-profile/.committed"));
}

#[test]
fn scenario_per_module_invocations_commit_at_the_last_module() {
    let env = release_env();

    for module in ["core", "api"] {
        let result = env.deploy(&["--module", module]);
        assert_success!(result);
        assert_output_contains!(result, "Staging locally");
        assert!(
            env.managed_repositories().is_empty(),
            "commit happened before the last module"
        );
    }

    let result = env.deploy(&["--module", "parent"]);
    assert_success!(result);
    assert_eq!(env.managed_repositories(), vec!["release-profile-0001"]);

    let content = env.managed_content("release-profile-0001");
    for relative in expected_content(&env) {
        assert_exists!(env, content.join(&relative));
    }
}

#[test]
fn scenario_second_build_opens_a_new_repository() {
    let env = release_env();

    assert_success!(env.deploy(&[]));
    let again = env.deploy(&[]);

    assert_success!(again);
    assert_eq!(
        env.managed_repositories(),
        vec!["release-profile-0001", "release-profile-0002"]
    );
}

#[test]
fn scenario_explicit_repository_is_left_open() {
    let env = release_env();
    std::fs::create_dir_all(env.managed_content("release-profile-0042")).unwrap();
    env.write_project_file(
        "target/staging-manager/repositories/release-profile-0042/repository.toml",
        "profile_id = \"release-profile\"\ndescription = \"manual\"\n\
         created_at = \"2026-10-16T10:15:00Z\"\n\n[status]\nstate = \"open\"\n",
    );

    let result = env.deploy(&["--repository-id", "release-profile-0042"]);

    assert_success!(result);
    assert_output_contains!(result, "not managed");
    assert_eq!(env.managed_repositories(), vec!["release-profile-0042"]);
    let record = env.managed_record("release-profile-0042");
    assert!(record.contains("open"), "record: {record}");
    assert_exists!(
        env,
        env.managed_content("release-profile-0042")
            .join(env.module("core").layout_path("core-1.0.0.jar"))
    );
}

#[test]
fn scenario_ambiguous_profiles_fail_with_configuration_error() {
    let env = TestEnv::builder()
        .with_modules(release_build())
        .with_config(AMBIGUOUS_PROFILES_CONFIG)
        .build();

    let result = env.deploy(&[]);

    assert_eq!(result.exit_code, 2, "stderr: {}", result.stderr);
    assert_output_contains!(result, "release-profile");
    assert_output_contains!(result, "oss");
    assert_not_exists!(env, env.staging_path(""));
}

#[test]
fn scenario_json_output_is_ndjson() {
    let env = release_env();

    let result = env.run(&["--json", "deploy", "--build", "build.toml"]);

    assert_success!(result);
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    assert!(events.iter().any(|e| e["event"] == "repository_closed"));
    assert!(events
        .iter()
        .filter(|e| e["event"] == "item_dispatched")
        .all(|e| e["staged"] == true));
}

#[test]
fn scenario_snapshot_last_module_commits_what_earlier_invocations_staged() {
    let env = TestEnv::builder()
        .with_modules(vec![
            ModuleFixture::jar("core", "1.0.0"),
            ModuleFixture::jar("snap", "2.0-SNAPSHOT"),
        ])
        .build();

    assert_success!(env.deploy(&["--module", "core"]));
    assert!(env.managed_repositories().is_empty());
    assert_exists!(env, env.staging_path(".build.toml"));

    let result = env.deploy(&["--module", "snap"]);

    assert_success!(result);
    assert_eq!(env.managed_repositories(), vec!["release-profile-0001"]);
    assert_exists!(
        env,
        env.managed_content("release-profile-0001")
            .join(env.module("core").layout_path("core-1.0.0.jar"))
    );
    assert_not_exists!(env, env.staging_path(".build.toml"));
}
