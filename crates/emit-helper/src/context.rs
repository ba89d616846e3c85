//! Emission context: named events, ambient listeners, ambient attrs.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

/// Handler invoked with the payload of a named event.
pub type EventHandler = Arc<dyn Fn(Value) + Send + Sync>;

#[derive(Default)]
struct ContextState {
    listeners: BTreeMap<String, EventHandler>,
    attrs: BTreeMap<String, Value>,
}

/// A handle to the host-owned emission context.
///
/// The context carries one handler per event name plus an attribute bag, both
/// mutated by the host through [`on`](EmitContext::on)/
/// [`set_attr`](EmitContext::set_attr). Helpers only emit through it and
/// derive filtered snapshots. Cloning yields another handle to the same
/// storage.
#[derive(Clone, Default)]
pub struct EmitContext {
    inner: Arc<RwLock<ContextState>>,
}

impl EmitContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`, replacing any previous handler.
    pub fn on(&self, event: impl Into<String>, handler: impl Fn(Value) + Send + Sync + 'static) {
        self.write().listeners.insert(event.into(), Arc::new(handler));
    }

    /// Unregister the handler for `event`. Returns whether one was present.
    pub fn off(&self, event: &str) -> bool {
        self.write().listeners.remove(event).is_some()
    }

    /// Fire `event` with `payload`: synchronously invoke the registered
    /// handler, if any. The handler runs outside the context's internal lock
    /// and may call back into the context or props.
    pub fn emit(&self, event: &str, payload: Value) {
        let handler = self.read().listeners.get(event).cloned();
        if let Some(handler) = handler {
            handler(payload);
        }
    }

    pub fn set_attr(&self, name: impl Into<String>, value: Value) {
        self.write().attrs.insert(name.into(), value);
    }

    pub fn remove_attr(&self, name: &str) -> Option<Value> {
        self.write().attrs.remove(name)
    }

    /// Snapshot of the current listeners bag.
    pub fn listeners(&self) -> BTreeMap<String, EventHandler> {
        self.read().listeners.clone()
    }

    /// Snapshot of the current attrs bag.
    pub fn attrs(&self) -> BTreeMap<String, Value> {
        self.read().attrs.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, ContextState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContextState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Copy `map` without `key`. The input mapping is left untouched.
pub fn omit_key<V: Clone>(map: &BTreeMap<String, V>, key: &str) -> BTreeMap<String, V> {
    let mut out = map.clone();
    out.remove(key);
    out
}
