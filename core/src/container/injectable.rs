use crate::pattern::Pattern;
use crate::types::{Value, MISSING};
use std::fmt;

/// How an injectable declares the dependencies it wants.
#[derive(Debug, Clone, PartialEq)]
pub enum Signature {
    /// Declaration text, extracted and parsed on every resolution.
    Source(String),
    /// Pre-built patterns; extraction and parsing are skipped.
    Declared(Vec<Pattern>),
}

/// Arguments and ambient context handed to an injectable's body.
#[derive(Debug, Clone)]
pub struct Call<'a> {
    arguments: Vec<Value>,
    context: Option<&'a Value>,
}

impl<'a> Call<'a> {
    pub fn new(arguments: Vec<Value>, context: Option<&'a Value>) -> Self {
        Self { arguments, context }
    }

    /// Argument at `index`; [`Value::Missing`] past the end.
    pub fn arg(&self, index: usize) -> &Value {
        self.arguments.get(index).unwrap_or(&MISSING)
    }

    pub fn args(&self) -> &[Value] {
        &self.arguments
    }

    pub fn into_args(self) -> Vec<Value> {
        self.arguments
    }

    /// Auxiliary context bound by `resolve_with`.
    pub fn context(&self) -> Option<&'a Value> {
        self.context
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// **INJECTABLE CALLABLE**
///
/// **PURPOSE**: Pairs a body with the parameter declaration used to wire it
/// **GUARANTEE**: The body's return value reaches the caller unchanged
pub struct Injectable<R> {
    signature: Signature,
    body: Box<dyn Fn(Call<'_>) -> R>,
}

impl<R> Injectable<R> {
    /// Callable described by its declaration text, e.g. `"(foo, {bar}) => ..."`.
    pub fn new(source: impl Into<String>, body: impl Fn(Call<'_>) -> R + 'static) -> Self {
        Self {
            signature: Signature::Source(source.into()),
            body: Box::new(body),
        }
    }

    /// Callable with an explicit pattern list.
    pub fn declared(
        patterns: impl IntoIterator<Item = Pattern>,
        body: impl Fn(Call<'_>) -> R + 'static,
    ) -> Self {
        Self {
            signature: Signature::Declared(patterns.into_iter().collect()),
            body: Box::new(body),
        }
    }

    /// Callable taking the given bare names, in order.
    pub fn keys<S: Into<String>>(
        keys: impl IntoIterator<Item = S>,
        body: impl Fn(Call<'_>) -> R + 'static,
    ) -> Self {
        Self::declared(keys.into_iter().map(Pattern::name), body)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Run the body directly, bypassing resolution.
    pub fn call(&self, call: Call<'_>) -> R {
        (self.body)(call)
    }
}

impl<R> fmt::Debug for Injectable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injectable")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
