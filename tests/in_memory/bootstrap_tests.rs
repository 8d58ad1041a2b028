//! Start-up sequence and query-driven preloading.

use super::helpers::{Harness, builtin};
use rstest::rstest;
use toolshed::config::ToolshedSettings;
use toolshed::tool_groups::{
    adapters::{catalog::default_registry, default_resources},
    services::{BootstrapError, PreloadOutcome, bootstrap},
};

async fn started(harness: Harness) -> Harness {
    let settings = ToolshedSettings::default();
    let resources = default_resources().expect("resource table should be valid");
    bootstrap(&harness.manager, &resources, &settings.initial_groups)
        .await
        .expect("bootstrap should succeed");
    harness
}

#[rstest]
#[tokio::test]
async fn default_start_up_activates_projects_then_infrastructure(builtin: Harness) {
    let harness = started(builtin).await;

    assert_eq!(harness.active().await, ["projects", "infrastructure"]);
    let resources = harness
        .host
        .registered_resources()
        .expect("host state should be readable");
    assert_eq!(resources.len(), 22);
    assert!(harness.registrations("list_projects") >= 1);
}

#[rstest]
#[tokio::test]
async fn start_up_with_capacity_one_keeps_only_the_last_initial_group() {
    let harness = started(Harness::new(
        default_registry().expect("built-in groups should be valid"),
        1,
    ))
    .await;

    assert_eq!(harness.active().await, ["infrastructure"]);
}

#[rstest]
#[tokio::test]
async fn registering_resources_twice_fails_start_up(builtin: Harness) {
    let resources = default_resources().expect("resource table should be valid");
    bootstrap(&builtin.manager, &resources, &[])
        .await
        .expect("first start-up should succeed");

    let err = bootstrap(&builtin.manager, &resources, &[])
        .await
        .expect_err("duplicate resources should be rejected");

    assert!(matches!(err, BootstrapError::Resource { ref name, .. } if name == "project"));
}

#[rstest]
#[case("issue a certificate", "domains", ["infrastructure", "domains"])]
#[case("show integration marketplace listing", "integrations", ["infrastructure", "integrations"])]
#[case("who is on my team", "access", ["infrastructure", "access"])]
#[tokio::test]
async fn query_preloads_its_group_and_evicts_the_oldest(
    builtin: Harness,
    #[case] query: &str,
    #[case] expected_group: &str,
    #[case] expected_active: [&str; 2],
) {
    let harness = started(builtin).await;
    harness.clock.advance(chrono::Duration::seconds(1));

    let outcome = harness.manager.suggest_and_load_groups(query).await;

    assert!(matches!(outcome, PreloadOutcome::Loaded(ref loaded) if loaded.as_str() == expected_group));
    assert_eq!(harness.active().await, expected_active);
}

#[rstest]
#[case("list my projects")]
#[case("create a webhook")]
#[tokio::test]
async fn query_for_an_initial_group_only_refreshes_it(builtin: Harness, #[case] query: &str) {
    let harness = started(builtin).await;

    let outcome = harness.manager.suggest_and_load_groups(query).await;

    assert!(matches!(outcome, PreloadOutcome::Refreshed(_)));
    assert_eq!(harness.active().await, ["projects", "infrastructure"]);
}

#[rstest]
#[tokio::test]
async fn refreshed_group_survives_the_next_eviction(builtin: Harness) {
    let harness = started(builtin).await;
    harness.clock.advance(chrono::Duration::seconds(1));
    harness.manager.suggest_and_load_groups("list my projects").await;
    harness.clock.advance(chrono::Duration::seconds(1));

    harness.manager.suggest_and_load_groups("add a dns record").await;

    assert_eq!(harness.active().await, ["projects", "domains"]);
}

#[rstest]
#[tokio::test]
async fn unrelated_query_leaves_start_up_groups_alone(builtin: Harness) {
    let harness = started(builtin).await;

    let outcome = harness
        .manager
        .suggest_and_load_groups("xyz_totally_unrelated")
        .await;

    assert_eq!(outcome, PreloadOutcome::NoMatch);
    assert_eq!(harness.active().await, ["projects", "infrastructure"]);
}
