use crate::container::injectable::{Call, Injectable};
use crate::types::Value;

/// Apply `injectable` to `arguments`, binding `context` as its ambient value.
///
/// The result is returned as produced: deferred results are not awaited and failures are not
/// wrapped.
pub fn invoke<R>(injectable: &Injectable<R>, arguments: Vec<Value>, context: Option<&Value>) -> R {
    log::debug!(
        "invoking with {} argument(s){}",
        arguments.len(),
        if context.is_some() { " and context" } else { "" }
    );
    injectable.call(Call::new(arguments, context))
}
