//! Catalog accessor
//!
//! Owns the loaded catalog and exposes read accessors for each section and
//! for the derived collections. Loading happens at most once at a time:
//! callers that ask while a fetch is in flight all await that same fetch
//! and observe the same outcome. After success the catalog never changes.
//! After failure nothing is cached, and the next `load()` fetches again.

use super::{CatalogSource, FileSource, StaticSource};
use crate::catalog::{AmdCatalog, AppleCatalog, Catalog, Metadata, NvidiaCatalog};
use crate::error::{CatalogError, Result};
use crate::project::{CompareMap, DeviceRecord, SystemRecord};
use crate::walk::{walk_compare, walk_devices, walk_systems, Walk};
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

type LoadOutcome = std::result::Result<Arc<Catalog>, Arc<CatalogError>>;
type PendingLoad = Shared<BoxFuture<'static, LoadOutcome>>;

/// Shared handle to the hardware catalog
pub struct HardwareCatalog {
    source: Arc<dyn CatalogSource>,
    loaded: OnceLock<Arc<Catalog>>,
    pending: Mutex<Option<PendingLoad>>,
}

impl HardwareCatalog {
    /// Create an unloaded handle over a source
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            loaded: OnceLock::new(),
            pending: Mutex::new(None),
        }
    }

    /// Create an unloaded handle that reads a JSON file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }

    /// Create a handle that is already loaded with `catalog`
    pub fn preloaded(catalog: Catalog) -> Self {
        let handle = Self::new(StaticSource::new(catalog.clone()));
        let _ = handle.loaded.set(Arc::new(catalog));
        handle
    }

    /// Load the catalog, or return the one already loaded.
    ///
    /// Concurrent callers share a single fetch. A failure is returned to
    /// every caller awaiting that fetch and is not cached.
    pub async fn load(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.loaded.get() {
            return Ok(Arc::clone(catalog));
        }

        let pending = self.pending_load();
        let outcome = pending.clone().await;

        if let Ok(catalog) = &outcome {
            let _ = self.loaded.set(Arc::clone(catalog));
        }
        self.clear_pending(&pending);

        outcome.map_err(CatalogError::LoadFailed)
    }

    /// The in-flight load, started if there is none
    fn pending_load(&self) -> PendingLoad {
        let mut slot = self.pending.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(pending) = slot.as_ref() {
            return pending.clone();
        }

        // A load may have finished between the fast-path check and the lock.
        if let Some(catalog) = self.loaded.get() {
            let ready: LoadOutcome = Ok(Arc::clone(catalog));
            return futures::future::ready(ready).boxed().shared();
        }

        let source = Arc::clone(&self.source);
        let pending = async move {
            match source.fetch().await {
                Ok(catalog) => {
                    tracing::info!(
                        "Loaded hardware data from {}. Last updated: {}",
                        source.describe(),
                        catalog
                            .metadata
                            .as_ref()
                            .and_then(|m| m.last_updated.as_deref())
                            .unwrap_or("unknown")
                    );
                    Ok(Arc::new(catalog))
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to load hardware data from {}: {}",
                        source.describe(),
                        e
                    );
                    Err(Arc::new(e))
                }
            }
        }
        .boxed()
        .shared();

        *slot = Some(pending.clone());
        pending
    }

    fn clear_pending(&self, finished: &PendingLoad) {
        let mut slot = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|p| p.ptr_eq(finished)) {
            *slot = None;
        }
    }

    /// Whether a load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// The whole catalog, if loaded
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        self.loaded.get().cloned()
    }

    fn section<T: Clone + Default>(&self, pick: impl FnOnce(&Catalog) -> Option<&T>) -> T {
        self.loaded
            .get()
            .and_then(|c| pick(c))
            .cloned()
            .unwrap_or_default()
    }

    /// Catalog metadata
    pub fn metadata(&self) -> Metadata {
        self.section(|c| c.metadata.as_ref())
    }

    /// Apple section
    pub fn apple(&self) -> AppleCatalog {
        self.section(|c| c.apple.as_ref())
    }

    /// NVIDIA section
    pub fn nvidia(&self) -> NvidiaCatalog {
        self.section(|c| c.nvidia.as_ref())
    }

    /// AMD section
    pub fn amd(&self) -> AmdCatalog {
        self.section(|c| c.amd.as_ref())
    }

    /// GPU rankings, as authored
    pub fn gpu_rankings(&self) -> Value {
        self.section(|c| c.gpu_rankings.as_ref())
    }

    /// Use-case requirement tables, as authored
    pub fn use_cases(&self) -> Value {
        self.section(|c| c.use_cases.as_ref())
    }

    /// DIY build recommendations, as authored
    pub fn diy_recommendations(&self) -> Value {
        self.section(|c| c.diy_recommendations.as_ref())
    }

    /// Prebuilt system recommendations, as authored
    pub fn prebuilt_systems(&self) -> Value {
        self.section(|c| c.prebuilt_systems.as_ref())
    }

    /// Device list with skip report
    pub fn device_walk(&self) -> Walk<Vec<DeviceRecord>> {
        self.loaded.get().map(|c| walk_devices(c)).unwrap_or_default()
    }

    /// System list with skip report
    pub fn system_walk(&self) -> Walk<Vec<SystemRecord>> {
        self.loaded.get().map(|c| walk_systems(c)).unwrap_or_default()
    }

    /// Compare mapping with skip report
    pub fn compare_walk(&self) -> Walk<CompareMap> {
        self.loaded.get().map(|c| walk_compare(c)).unwrap_or_default()
    }

    /// Device list; empty before load
    pub fn devices(&self) -> Vec<DeviceRecord> {
        self.device_walk().into_records()
    }

    /// System list; empty before load
    pub fn systems(&self) -> Vec<SystemRecord> {
        self.system_walk().into_records()
    }

    /// Compare mapping; empty before load
    pub fn compare(&self) -> CompareMap {
        self.compare_walk().into_records()
    }
}

impl std::fmt::Debug for HardwareCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardwareCatalog")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts fetches and fails the first `failures` of them
    struct CountingSource {
        fetches: Arc<AtomicUsize>,
        failures: usize,
        catalog: Catalog,
    }

    impl CountingSource {
        fn new(failures: usize) -> (Self, Arc<AtomicUsize>) {
            let fetches = Arc::new(AtomicUsize::new(0));
            let catalog = Catalog {
                metadata: Some(Metadata {
                    last_updated: Some("2025-06-01".to_string()),
                    ..Default::default()
                }),
                gpu_rankings: Some(serde_json::json!({ "top": ["rtx5090"] })),
                ..Default::default()
            };
            let source = Self {
                fetches: Arc::clone(&fetches),
                failures,
                catalog,
            };
            (source, fetches)
        }
    }

    #[async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch(&self) -> Result<Catalog> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            if n < self.failures {
                Err(CatalogError::fetch_failed("HTTP 503"))
            } else {
                Ok(self.catalog.clone())
            }
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let (source, fetches) = CountingSource::new(0);
        let handle = HardwareCatalog::new(source);

        let results = futures::future::join_all((0..8).map(|_| handle.load())).await;

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        let first = results[0].as_ref().unwrap();
        for result in &results {
            assert!(Arc::ptr_eq(first, result.as_ref().unwrap()));
        }
        assert!(handle.is_loaded());

        handle.load().await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_failure_shared_then_explicit_retry() {
        let (source, fetches) = CountingSource::new(1);
        let handle = HardwareCatalog::new(source);

        let results = futures::future::join_all((0..4).map(|_| handle.load())).await;
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        for result in &results {
            let err = result.as_ref().unwrap_err();
            assert!(matches!(err, CatalogError::LoadFailed(_)));
            assert!(err.is_recoverable());
        }
        assert!(!handle.is_loaded());
        assert!(handle.devices().is_empty());

        let catalog = handle.load().await.unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert_eq!(catalog.metadata.as_ref().unwrap().last_updated.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn test_accessors_default_before_load() {
        let (source, fetches) = CountingSource::new(0);
        let handle = HardwareCatalog::new(source);

        assert!(handle.catalog().is_none());
        assert_eq!(handle.metadata(), Metadata::default());
        assert_eq!(handle.apple(), AppleCatalog::default());
        assert_eq!(handle.gpu_rankings(), Value::Null);
        assert_eq!(handle.use_cases(), Value::Null);
        assert!(handle.devices().is_empty());
        assert!(handle.systems().is_empty());
        assert!(handle.compare().is_empty());
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_pass_through_sections() {
        let (source, _) = CountingSource::new(0);
        let handle = HardwareCatalog::new(source);
        handle.load().await.unwrap();

        assert_eq!(handle.gpu_rankings(), serde_json::json!({ "top": ["rtx5090"] }));
        assert_eq!(handle.diy_recommendations(), Value::Null);
        assert_eq!(handle.metadata().last_updated.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn test_preloaded_never_fetches() {
        let handle = HardwareCatalog::preloaded(Catalog::default());
        assert!(handle.is_loaded());
        let catalog = tokio_test::block_on(handle.load()).unwrap();
        assert_eq!(*catalog, Catalog::default());
    }
}
