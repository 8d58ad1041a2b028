//! Capacity, eviction and reload behaviour of the lifecycle manager.

use super::helpers::{GatedLoader, Harness, ScriptedLoader, builtin, group, within_deadline};
use rstest::rstest;
use std::sync::Arc;
use toolshed::tool_groups::{
    ports::GroupLoader,
    services::{GroupLoadError, GroupLoadResult, GroupRegistry, LoadOutcome},
};

fn scripted_registry(loaders: &[(&str, &Arc<ScriptedLoader>)]) -> GroupRegistry {
    loaders
        .iter()
        .fold(GroupRegistry::new(), |registry, &(name, loader)| {
            let shared: Arc<dyn GroupLoader> = Arc::<ScriptedLoader>::clone(loader);
            registry.with_group(group(name), shared)
        })
}

#[rstest]
#[tokio::test]
async fn active_set_never_exceeds_capacity(builtin: Harness) {
    let sequence = [
        "projects",
        "infrastructure",
        "access",
        "projects",
        "domains",
        "integrations",
        "access",
        "integrations",
        "infrastructure",
    ];

    for name in sequence {
        builtin
            .load_next(name)
            .await
            .expect("built-in group should load");
        assert!(builtin.active().await.len() <= 2, "capacity exceeded after {name}");
    }
}

#[rstest]
#[tokio::test]
async fn third_distinct_group_evicts_the_first(builtin: Harness) {
    builtin.load_next("projects").await.expect("projects should load");
    builtin
        .load_next("infrastructure")
        .await
        .expect("infrastructure should load");

    let outcome = builtin.load_next("domains").await.expect("domains should load");

    assert!(matches!(
        outcome,
        LoadOutcome::Loaded { evicted: Some(ref victim), .. } if victim.as_str() == "projects"
    ));
    assert_eq!(builtin.active().await, ["infrastructure", "domains"]);
}

#[rstest]
#[tokio::test]
async fn reloading_an_active_group_keeps_size_and_protects_it(builtin: Harness) {
    builtin.load_next("projects").await.expect("projects should load");
    builtin
        .load_next("infrastructure")
        .await
        .expect("infrastructure should load");

    let refreshed = builtin.load_next("projects").await.expect("refresh should succeed");
    assert_eq!(refreshed, LoadOutcome::Refreshed);
    assert_eq!(builtin.active().await.len(), 2);

    builtin.load_next("access").await.expect("access should load");
    assert_eq!(builtin.active().await, ["projects", "access"]);
}

#[rstest]
#[tokio::test]
async fn refresh_does_not_re_register_operations(builtin: Harness) {
    builtin.load_next("domains").await.expect("domains should load");
    builtin.load_next("domains").await.expect("refresh should succeed");

    assert_eq!(builtin.registrations("add_domain"), 1);
}

#[rstest]
#[tokio::test]
async fn evicted_group_reloads_and_registers_again() {
    let alpha = ScriptedLoader::registering("alpha_op");
    let beta = ScriptedLoader::registering("beta_op");
    let harness = Harness::new(scripted_registry(&[("alpha", &alpha), ("beta", &beta)]), 1);

    harness.load_next("alpha").await.expect("alpha should load");
    harness.load_next("beta").await.expect("beta should load");
    assert_eq!(harness.active().await, ["beta"]);

    harness.load_next("alpha").await.expect("alpha should reload");

    assert_eq!(alpha.calls(), 2);
    assert_eq!(harness.registrations("alpha_op"), 2);
    assert_eq!(harness.active().await, ["alpha"]);
}

#[rstest]
#[tokio::test]
async fn failing_loader_below_capacity_changes_nothing() {
    let alpha = ScriptedLoader::registering("alpha_op");
    let broken = ScriptedLoader::failing();
    let harness = Harness::new(
        scripted_registry(&[("alpha", &alpha), ("broken", &broken)]),
        2,
    );
    harness.load_next("alpha").await.expect("alpha should load");

    let err = harness
        .load_next("broken")
        .await
        .expect_err("broken should fail");

    assert!(matches!(err, GroupLoadError::Loader { group: ref failed, .. } if failed.as_str() == "broken"));
    assert_eq!(broken.calls(), 1);
    assert_eq!(harness.active().await, ["alpha"]);
}

#[rstest]
#[tokio::test]
async fn failing_loader_at_capacity_keeps_the_eviction() {
    let alpha = ScriptedLoader::registering("alpha_op");
    let beta = ScriptedLoader::registering("beta_op");
    let broken = ScriptedLoader::failing();
    let harness = Harness::new(
        scripted_registry(&[("alpha", &alpha), ("beta", &beta), ("broken", &broken)]),
        2,
    );
    harness.load_next("alpha").await.expect("alpha should load");
    harness.load_next("beta").await.expect("beta should load");

    harness
        .load_next("broken")
        .await
        .expect_err("broken should fail");

    assert_eq!(harness.active().await, ["beta"]);
}

#[rstest]
#[tokio::test]
async fn unknown_group_is_reported_and_not_inserted(builtin: Harness) {
    let err = builtin
        .load_next("billing")
        .await
        .expect_err("billing is not registered");

    assert!(matches!(err, GroupLoadError::UnknownGroup(ref name) if name.as_str() == "billing"));
    assert!(builtin.active().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn names_are_normalised_before_lookup(builtin: Harness) {
    builtin.load_next("  Projects ").await.expect("projects should load");

    assert_eq!(builtin.active().await, ["projects"]);
    assert!(builtin.manager.active_operations("PROJECTS").await.is_some());
}

#[rstest]
#[tokio::test]
async fn unloaded_group_keeps_its_host_registrations(builtin: Harness) {
    builtin.load_next("domains").await.expect("domains should load");

    assert!(builtin.manager.unload_group("domains").await);

    assert!(builtin.active().await.is_empty());
    assert_eq!(builtin.registrations("add_domain"), 1);
}

fn gated_registry(
    gated: &Arc<GatedLoader>,
    quick: &[(&str, &Arc<ScriptedLoader>)],
) -> GroupRegistry {
    let shared: Arc<dyn GroupLoader> = Arc::<GatedLoader>::clone(gated);
    scripted_registry(quick).with_group(group("gamma"), shared)
}

fn single_victim(result: GroupLoadResult<LoadOutcome>) -> String {
    match result.expect("load should succeed") {
        LoadOutcome::Loaded {
            evicted: Some(victim),
            ..
        } => victim.as_str().to_owned(),
        other => panic!("expected exactly one eviction, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_loads_are_serialised() {
    let alpha = ScriptedLoader::registering("alpha_op");
    let beta = ScriptedLoader::registering("beta_op");
    let delta = ScriptedLoader::registering("delta_op");
    let gamma = GatedLoader::registering("gamma_op");
    let registry = gated_registry(
        &gamma,
        &[("alpha", &alpha), ("beta", &beta), ("delta", &delta)],
    );
    let harness = Arc::new(Harness::new(registry, 2));
    harness.load_next("alpha").await.expect("alpha should load");
    harness.load_next("beta").await.expect("beta should load");

    harness.clock.advance(chrono::Duration::seconds(1));
    let gamma_load = {
        let shared = Arc::clone(&harness);
        tokio::spawn(async move { shared.manager.load_group("gamma").await })
    };
    gamma.entered().await;
    let delta_load = {
        let shared = Arc::clone(&harness);
        tokio::spawn(async move { shared.load_next("delta").await })
    };
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }

    let in_flight = within_deadline(harness.active()).await;
    assert!(in_flight.len() <= 2);
    assert_eq!(in_flight, ["beta"]);
    assert!(!delta_load.is_finished());
    assert_eq!(delta.calls(), 0);

    gamma.open();
    let gamma_victim = single_victim(gamma_load.await.expect("load task should not panic"));
    let delta_victim = single_victim(delta_load.await.expect("load task should not panic"));

    assert_eq!(gamma_victim, "alpha");
    assert_eq!(delta_victim, "beta");
    assert_eq!(harness.active().await, ["gamma", "delta"]);
    assert_eq!(harness.registrations("gamma_op"), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reads_and_unloads_proceed_while_a_loader_is_parked() {
    let alpha = ScriptedLoader::registering("alpha_op");
    let gamma = GatedLoader::registering("gamma_op");
    let harness = Arc::new(Harness::new(gated_registry(&gamma, &[("alpha", &alpha)]), 2));
    harness.load_next("alpha").await.expect("alpha should load");

    let gamma_load = {
        let shared = Arc::clone(&harness);
        tokio::spawn(async move { shared.load_next("gamma").await })
    };
    gamma.entered().await;

    let operations = within_deadline(harness.manager.active_operations("alpha")).await;
    assert!(operations.is_some());
    assert!(within_deadline(harness.manager.unload_group("alpha")).await);
    assert!(within_deadline(harness.active()).await.is_empty());

    gamma.open();
    let outcome = gamma_load
        .await
        .expect("load task should not panic")
        .expect("gamma should load");

    assert!(matches!(outcome, LoadOutcome::Loaded { evicted: None, .. }));
    assert_eq!(harness.active().await, ["gamma"]);
}
