//! Shared props mapping.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

/// A handle to the props mapping owned by the host.
///
/// Cloning yields another handle to the same storage, so the host mutates
/// through its handle and every helper accessor reads the current state on
/// each call. That shared view is the reactive dependency: replace the bound
/// value here and the next read through any binding sees it.
#[derive(Clone, Default)]
pub struct Props {
    inner: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: Value) {
        self.write().insert(key.into(), value);
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.write().remove(key)
    }

    /// Clone out the current value for `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Copy of the whole mapping as it is right now.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Value>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Value>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<BTreeMap<String, Value>> for Props {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Props {
            inner: Arc::new(RwLock::new(entries)),
        }
    }
}
