//! Network attachment definition lookup capability.
//!
//! The validator reaches the cluster only through [`NetAttachDefProvider`],
//! which keeps it free of I/O. [`StaticProvider`] is an in-memory catalog,
//! and [`CachingProvider`] memoizes another provider within one validation
//! call.

use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use vmimport_types::NetworkAttachmentDefinition;

use crate::error::{NetmapError, NetmapResult, ProviderError};

/// Result of one attachment definition lookup. `Ok(None)` means not found.
pub type LookupResult = Result<Option<NetworkAttachmentDefinition>, ProviderError>;

/// Looks up network attachment definitions by name and namespace.
pub trait NetAttachDefProvider {
    fn find(&self, name: &str, namespace: &str) -> LookupResult;
}

impl<P: NetAttachDefProvider + ?Sized> NetAttachDefProvider for &P {
    fn find(&self, name: &str, namespace: &str) -> LookupResult {
        (**self).find(name, namespace)
    }
}

impl<P: NetAttachDefProvider + ?Sized> NetAttachDefProvider for Box<P> {
    fn find(&self, name: &str, namespace: &str) -> LookupResult {
        (**self).find(name, namespace)
    }
}

impl<P: NetAttachDefProvider + ?Sized> NetAttachDefProvider for Arc<P> {
    fn find(&self, name: &str, namespace: &str) -> LookupResult {
        (**self).find(name, namespace)
    }
}

/// In-memory catalog keyed by `(namespace, name)`.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    definitions: HashMap<(String, String), NetworkAttachmentDefinition>,
}

/// Accepted layouts of an attachment definition file: a bare sequence of
/// manifests or a Kubernetes `List` with `items`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Sequence(Vec<NetworkAttachmentDefinition>),
    Items { items: Vec<NetworkAttachmentDefinition> },
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a definition.
    pub fn insert(&mut self, nad: NetworkAttachmentDefinition) {
        self.definitions
            .insert((nad.namespace.clone(), nad.name.clone()), nad);
    }

    /// Builder form of [`StaticProvider::insert`].
    pub fn with(mut self, nad: NetworkAttachmentDefinition) -> Self {
        self.insert(nad);
        self
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Parses a YAML (or JSON) document holding attachment definition
    /// manifests.
    pub fn from_yaml_str(source: &str, origin: &Path) -> NetmapResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(source).map_err(|e| NetmapError::Yaml {
            path: origin.to_path_buf(),
            source: e,
        })?;
        let items = match file {
            CatalogFile::Sequence(items) | CatalogFile::Items { items } => items,
        };
        Ok(items.into_iter().fold(Self::new(), Self::with))
    }

    /// Loads a manifest file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> NetmapResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| NetmapError::io(path, e))?;
        let provider = Self::from_yaml_str(&source, path)?;
        debug!(path = %path.display(), count = provider.len(), "Loaded network attachment definitions");
        Ok(provider)
    }
}

impl FromIterator<NetworkAttachmentDefinition> for StaticProvider {
    fn from_iter<I: IntoIterator<Item = NetworkAttachmentDefinition>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl NetAttachDefProvider for StaticProvider {
    fn find(&self, name: &str, namespace: &str) -> LookupResult {
        Ok(self
            .definitions
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }
}

/// Memoizes lookups of an inner provider by `(name, namespace)`.
///
/// Meant to live for a single validation call: it is not `Sync` and never
/// invalidates. Errors are cached too, so a failing target is asked once.
pub struct CachingProvider<P> {
    inner: P,
    enabled: bool,
    cache: RefCell<HashMap<(String, String), LookupResult>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<P: NetAttachDefProvider> CachingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_enabled(inner, true)
    }

    /// When `enabled` is false every lookup goes to the inner provider.
    pub fn with_enabled(inner: P, enabled: bool) -> Self {
        Self {
            inner,
            enabled,
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Lookups forwarded to the inner provider.
    pub fn misses(&self) -> usize {
        self.misses.get()
    }
}

impl<P: NetAttachDefProvider> NetAttachDefProvider for CachingProvider<P> {
    fn find(&self, name: &str, namespace: &str) -> LookupResult {
        let key = (name.to_string(), namespace.to_string());
        if self.enabled {
            if let Some(cached) = self.cache.borrow().get(&key) {
                self.hits.set(self.hits.get() + 1);
                return cached.clone();
            }
        }

        self.misses.set(self.misses.get() + 1);
        let result = self.inner.find(name, namespace);
        if self.enabled {
            self.cache.borrow_mut().insert(key, result.clone());
        }
        result
    }
}
