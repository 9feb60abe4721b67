pub use crate::container::{Call, Container, ContainerConfig, Injectable, Signature};
pub use crate::dependencies::{resolve, Lookup, Store};
pub use crate::errors::ConrError;
pub use crate::pattern::{parse, IdentifierSet, Pattern, PatternParser};
pub use crate::signature::extract;
pub use crate::container::invoke;
pub use crate::types::{Function, Key, Object, Value};
