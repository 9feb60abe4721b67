use crate::types::{Key, Value};
use std::collections::HashMap;

/// Read access to registered dependencies.
pub trait Lookup {
    /// Value registered under `key`, or [`Value::Missing`]. Never fails.
    fn lookup(&self, key: &Key) -> Value;
}

/// **DEPENDENCY STORE**
///
/// **PURPOSE**: Process-local registry the resolver reads from
/// **GUARANTEE**: Entries live until overwritten or the store is reset
#[derive(Debug, Clone, Default)]
pub struct Store {
    entries: HashMap<Key, Value>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value under `key`, or [`Value::Missing`].
    pub fn get(&self, key: impl Into<Key>) -> Value {
        self.lookup(&key.into())
    }

    /// Register `value` under `key`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Remove every entry.
    pub fn reset(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Bulk [`Store::set`].
    pub fn init<K, V>(&mut self, initial: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in initial {
            self.set(key, value);
        }
        self
    }

    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lookup for Store {
    fn lookup(&self, key: &Key) -> Value {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

impl Lookup for HashMap<Key, Value> {
    fn lookup(&self, key: &Key) -> Value {
        self.get(key).cloned().unwrap_or_default()
    }
}
