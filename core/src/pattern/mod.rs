pub mod parser;
pub mod types;

pub use parser::{normalize, parse, IdentifierSet, PatternParser};
pub use types::{Group, Name, Pattern};
