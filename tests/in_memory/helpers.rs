//! Shared helpers for in-memory tool group integration tests.

use async_trait::async_trait;
use rstest::fixture;
use serde_json::json;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;
use toolshed::tool_groups::{
    adapters::{InMemoryToolHost, ManualClock, catalog::default_registry},
    domain::{GroupCapacity, GroupName, OperationDefinition, OperationId},
    ports::{GroupLoader, GroupLoaderError, GroupLoaderResult, ToolHost},
    services::{GroupLifecycleManager, GroupLoadResult, GroupRegistry, LoadOutcome},
};

/// Manager type used throughout the in-memory tests.
pub type TestManager = GroupLifecycleManager<InMemoryToolHost, ManualClock>;

/// Manager plus handles on its host and clock.
pub struct Harness {
    /// Clock driving usage timestamps.
    pub clock: ManualClock,
    /// Host shared with the manager.
    pub host: Arc<InMemoryToolHost>,
    /// Manager under test.
    pub manager: TestManager,
}

impl Harness {
    /// Builds a harness over `registry` with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(registry: GroupRegistry, capacity: usize) -> Self {
        let clock = ManualClock::from_unix_seconds(1_000);
        let host = Arc::new(InMemoryToolHost::new());
        let manager = GroupLifecycleManager::new(
            Arc::new(registry),
            Arc::clone(&host),
            Arc::new(clock.clone()),
            GroupCapacity::new(capacity).expect("capacity should be non-zero"),
        );
        Self {
            clock,
            host,
            manager,
        }
    }

    /// Advances the clock one second, then loads `name`.
    ///
    /// Spacing loads apart keeps least-recently-used ordering unambiguous.
    ///
    /// # Errors
    ///
    /// Propagates the manager's load error.
    pub async fn load_next(&self, name: &str) -> GroupLoadResult<LoadOutcome> {
        self.clock.advance(chrono::Duration::seconds(1));
        self.manager.load_group(name).await
    }

    /// Returns the active group names as plain strings.
    pub async fn active(&self) -> Vec<String> {
        names(&self.manager.get_active_groups().await)
    }

    /// Counts host registrations of one operation.
    ///
    /// # Panics
    ///
    /// Panics if the host state cannot be read.
    #[must_use]
    pub fn registrations(&self, operation: &str) -> usize {
        self.host
            .registration_count(operation)
            .expect("host state should be readable")
    }
}

/// Harness over the built-in groups with the default capacity.
///
/// # Panics
///
/// Panics if the built-in catalog is invalid.
#[fixture]
pub fn builtin() -> Harness {
    Harness::new(
        default_registry().expect("built-in groups should be valid"),
        GroupCapacity::default().get(),
    )
}

/// Converts group names to strings.
#[must_use]
pub fn names(groups: &[GroupName]) -> Vec<String> {
    groups.iter().map(|name| name.as_str().to_owned()).collect()
}

/// Parses a group name.
///
/// # Panics
///
/// Panics if `value` is not a valid group name.
#[must_use]
pub fn group(value: &str) -> GroupName {
    GroupName::new(value).expect("valid group name")
}

/// Loader registering one operation, or failing, and counting its calls.
pub struct ScriptedLoader {
    operation: &'static str,
    fails: bool,
    calls: AtomicUsize,
}

impl ScriptedLoader {
    /// Loader that registers `operation` on every call.
    #[must_use]
    pub fn registering(operation: &'static str) -> Arc<Self> {
        Arc::new(Self {
            operation,
            fails: false,
            calls: AtomicUsize::new(0),
        })
    }

    /// Loader that fails on every call.
    #[must_use]
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            operation: "unused",
            fails: true,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of times the loader ran.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GroupLoader for ScriptedLoader {
    async fn register(&self, host: &dyn ToolHost) -> GroupLoaderResult<Vec<OperationId>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(GroupLoaderError::runtime(io::Error::other(
                "module failed to resolve",
            )));
        }
        let definition = OperationDefinition::new(
            self.operation,
            "Scripted operation",
            json!({"type": "object"}),
        )?;
        host.register_tool(&definition).await?;
        Ok(vec![definition.id().clone()])
    }
}


/// Loader that parks inside `register` until released.
pub struct GatedLoader {
    inner: Arc<ScriptedLoader>,
    started: Notify,
    release: Notify,
}

impl GatedLoader {
    /// Gated loader registering `operation` once released.
    #[must_use]
    pub fn registering(operation: &'static str) -> Arc<Self> {
        Arc::new(Self {
            inner: ScriptedLoader::registering(operation),
            started: Notify::new(),
            release: Notify::new(),
        })
    }

    /// Resolves once a load has entered the loader.
    pub async fn entered(&self) {
        self.started.notified().await;
    }

    /// Lets the parked load finish.
    pub fn open(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl GroupLoader for GatedLoader {
    async fn register(&self, host: &dyn ToolHost) -> GroupLoaderResult<Vec<OperationId>> {
        self.started.notify_one();
        self.release.notified().await;
        self.inner.register(host).await
    }
}

/// Awaits `future`, failing the test if it takes longer than five seconds.
///
/// # Panics
///
/// Panics when the deadline passes.
pub async fn within_deadline<T>(future: impl Future<Output = T>) -> T {
    tokio::time::timeout(Duration::from_secs(5), future)
        .await
        .expect("call should not wait for an in-flight loader")
}
