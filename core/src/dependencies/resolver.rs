use crate::dependencies::store::Lookup;
use crate::pattern::{Group, Pattern};
use crate::types::{Key, Object, Value};

/// Build the positional call arguments for `patterns`.
///
/// One argument per top-level pattern, in order. Names resolve to their registered value or
/// [`Value::Missing`]; groups resolve to freshly built [`Object`]s. Reads only.
pub fn resolve<L: Lookup + ?Sized>(patterns: &[Pattern], store: &L) -> Vec<Value> {
    patterns
        .iter()
        .map(|pattern| resolve_pattern(pattern, store))
        .collect()
}

fn resolve_pattern<L: Lookup + ?Sized>(pattern: &Pattern, store: &L) -> Value {
    match pattern {
        Pattern::Name(name) => store.lookup(&Key::Name(name.key.clone())),
        Pattern::Group(group) => {
            let mut object = Object::new();
            fill_group(&mut object, group, store);
            Value::Object(object)
        }
    }
}

fn fill_group<L: Lookup + ?Sized>(object: &mut Object, group: &Group, store: &L) {
    for member in &group.members {
        match member {
            Pattern::Name(name) => {
                object.insert(name.key.as_str(), store.lookup(&Key::Name(name.key.clone())));
            }
            Pattern::Group(nested) => match &nested.key {
                Some(key) => {
                    let mut inner = Object::new();
                    fill_group(&mut inner, nested, store);
                    object.insert(key.as_str(), Value::Object(inner));
                }
                // a keyless member group contributes its members directly
                None => fill_group(object, nested, store),
            },
        }
    }
}
