//! # CONR CONTAINER
//!
//! **PIPELINE**: extract declaration text → parse patterns → resolve against the store → invoke
//! **GUARANTEE**: Extraction and parse failures never reach the caller; they degrade to a call
//! with no injected arguments.

pub mod cache;
pub mod config;
pub mod injectable;
pub mod invoker;

pub use cache::SignatureCache;
pub use config::ContainerConfig;
pub use injectable::{Call, Injectable, Signature};
pub use invoker::invoke;

use crate::dependencies::{self, Store};
use crate::errors::ConrError;
use crate::pattern::{Pattern, PatternParser};
use crate::signature;
use crate::types::{Key, Value};
use parking_lot::RwLock;
use std::sync::Arc;

/// **DEPENDENCY CONTAINER**
///
/// Thread-safe façade over a [`Store`]. Mutators take `&self` and return `&Self`, so calls
/// chain: `container.set("foo", 1).set("bar", 2)`.
#[derive(Debug, Default)]
pub struct Container {
    store: RwLock<Store>,
    config: ContainerConfig,
    cache: SignatureCache,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            store: RwLock::new(Store::new()),
            config,
            cache: SignatureCache::new(),
        }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Value under `key`, or [`Value::Missing`].
    pub fn get(&self, key: impl Into<Key>) -> Value {
        self.store.read().get(key)
    }

    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> &Self {
        self.store.write().set(key, value);
        self
    }

    /// Remove every registered dependency.
    pub fn reset(&self) -> &Self {
        self.store.write().reset();
        self
    }

    pub fn init<K, V>(&self, initial: impl IntoIterator<Item = (K, V)>) -> &Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.store.write().init(initial);
        self
    }

    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.store.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Call `injectable` with its dependencies wired in.
    pub fn resolve<R>(&self, injectable: &Injectable<R>) -> R {
        self.run(injectable, None)
    }

    /// Like [`Container::resolve`], binding `context` as the ambient value.
    pub fn resolve_with<R>(&self, injectable: &Injectable<R>, context: &Value) -> R {
        self.run(injectable, Some(context))
    }

    /// Patterns `injectable` declares, without degrading on failure.
    pub fn patterns<R>(&self, injectable: &Injectable<R>) -> Result<Arc<[Pattern]>, ConrError> {
        match injectable.signature() {
            Signature::Declared(patterns) => Ok(Arc::from(patterns.as_slice())),
            Signature::Source(source) => self.parse_source(source),
        }
    }

    fn run<R>(&self, injectable: &Injectable<R>, context: Option<&Value>) -> R {
        let arguments = match self.usable_patterns(injectable) {
            Some(patterns) if !patterns.is_empty() => {
                let store = self.store.read();
                dependencies::resolve(&patterns, &*store)
            }
            _ => Vec::new(),
        };
        invoke(injectable, arguments, context)
    }

    fn usable_patterns<R>(&self, injectable: &Injectable<R>) -> Option<Arc<[Pattern]>> {
        let source = match injectable.signature() {
            Signature::Declared(patterns) => return Some(Arc::from(patterns.as_slice())),
            Signature::Source(source) => source,
        };

        let degrade = |source: &str| match self.parse_source(source) {
            Ok(patterns) => Some(patterns),
            Err(err) => {
                log::warn!("injecting nothing into `{}`: {}", head(source), err);
                None
            }
        };

        if self.config.memoize_signatures {
            self.cache.get_or_insert_with(source, || degrade(source))
        } else {
            degrade(source)
        }
    }

    fn parse_source(&self, source: &str) -> Result<Arc<[Pattern]>, ConrError> {
        let raw = signature::extract(source)?;
        let patterns = PatternParser::new(self.config.identifiers).parse(raw)?;
        log::debug!("`{}` declares {} pattern(s)", head(source), patterns.len());
        Ok(Arc::from(patterns))
    }
}

fn head(source: &str) -> String {
    let line = source.lines().next().unwrap_or_default();
    line.chars().take(60).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::IdentifierSet;

    fn container() -> Container {
        let container = Container::new();
        container.set("foo", "F").set("bar", "B").set("biz", "Z");
        container
    }

    #[test]
    fn test_resolve_group_scenario() {
        let injectable = Injectable::new("(foo, {bar, biz}) => [foo, bar, biz]", |call| {
            vec![
                call.arg(0).clone(),
                call.arg(1).member("bar").clone(),
                call.arg(1).member("biz").clone(),
            ]
        });
        assert_eq!(
            container().resolve(&injectable),
            vec![Value::from("F"), Value::from("B"), Value::from("Z")]
        );
    }

    #[test]
    fn test_unrecognized_signature_degrades() {
        let injectable = Injectable::new("class Foo {}", |call| call.len());
        assert_eq!(container().resolve(&injectable), 0);
        assert!(container().patterns(&injectable).is_err());
    }

    #[test]
    fn test_unparseable_pattern_degrades() {
        let injectable = Injectable::new("([foo, bar]) => foo", |call| call.len());
        assert_eq!(container().resolve(&injectable), 0);
        assert!(matches!(
            container().patterns(&injectable),
            Err(ConrError::PatternUnparseable { .. })
        ));
    }

    #[test]
    fn test_declared_signature_skips_parsing() {
        let injectable = Injectable::keys(["biz", "foo"], |call| call.into_args());
        assert_eq!(
            container().resolve(&injectable),
            vec![Value::from("Z"), Value::from("F")]
        );
    }

    #[test]
    fn test_strict_identifiers_config() {
        let container = Container::with_config(
            ContainerConfig::default().with_identifiers(IdentifierSet::Strict),
        );
        container.set("foo_bar", 1).set("foo", "WRONG");

        let injectable = Injectable::new("(foo_bar) => foo_bar", |call| call.into_args());
        // strict identifiers stop at `_`; the parameter is rejected, not shortened to `foo`
        assert!(container.resolve(&injectable).is_empty());
        assert!(matches!(
            container.patterns(&injectable),
            Err(ConrError::PatternUnparseable { .. })
        ));
    }

    #[test]
    fn test_identifier_tail_never_resolves_shorter_key() {
        let container = container();
        container.set("caf", "WRONG");

        let injectable = Injectable::new("(café) => café", |call| call.into_args());
        assert!(container.resolve(&injectable).is_empty());
    }

    #[test]
    fn test_memoized_signatures_are_cached() {
        let container =
            Container::with_config(ContainerConfig::default().with_memoized_signatures(true));
        container.set("foo", "F");

        let injectable = Injectable::new("foo => foo", |call| call.arg(0).clone());
        assert_eq!(container.resolve(&injectable).as_str(), Some("F"));
        assert_eq!(container.resolve(&injectable).as_str(), Some("F"));
        assert_eq!(container.cache.len(), 1);

        let broken = Injectable::new("class {}", |call| call.len());
        assert_eq!(container.resolve(&broken), 0);
        assert_eq!(container.cache.len(), 2);
    }

    #[test]
    fn test_callable_may_mutate_container() {
        let container = Arc::new(container());
        let inner = Arc::clone(&container);
        let injectable = Injectable::new("foo => foo", move |call| {
            inner.set("seen", call.arg(0).clone());
        });

        container.resolve(&injectable);
        assert_eq!(container.get("seen").as_str(), Some("F"));
    }

    #[test]
    fn test_head_truncates_to_first_line() {
        assert_eq!(head("(a) =>\n a"), "(a) =>");
        assert_eq!(head(""), "");
    }
}
