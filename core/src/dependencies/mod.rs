pub mod resolver;
pub mod store;

pub use resolver::resolve;
pub use store::{Lookup, Store};
