use crate::pattern::Pattern;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Parse outcomes keyed by declaration text. `None` records a degrade to zero arguments.
#[derive(Debug, Default)]
pub struct SignatureCache {
    entries: RwLock<HashMap<String, Option<Arc<[Pattern]>>>>,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached outcome for `source`, computing and storing it on first use.
    pub fn get_or_insert_with(
        &self,
        source: &str,
        compute: impl FnOnce() -> Option<Arc<[Pattern]>>,
    ) -> Option<Arc<[Pattern]>> {
        if let Some(entry) = self.entries.read().get(source) {
            return entry.clone();
        }

        let outcome = compute();
        self.entries
            .write()
            .entry(source.to_string())
            .or_insert(outcome)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
