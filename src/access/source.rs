//! Catalog sources
//!
//! Where the raw catalog comes from. Fetch and parse live here so the
//! rest of the crate only ever sees an in-memory [`Catalog`].

use crate::catalog::Catalog;
use crate::error::{IoResultExt, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Something that can produce the raw catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the catalog
    async fn fetch(&self) -> Result<Catalog>;

    /// Short description for log lines
    fn describe(&self) -> String;
}

/// Reads the catalog from a JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Catalog> {
        tracing::debug!("Reading hardware data from {:?}", self.path);
        let bytes = tokio::fs::read(&self.path).await.with_path(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves an already-built catalog
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    catalog: Catalog,
}

impl StaticSource {
    /// Wrap an in-memory catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        "in-memory catalog".to_string()
    }
}
