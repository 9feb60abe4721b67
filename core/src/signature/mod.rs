pub mod extractor;
pub mod scanner;

pub use extractor::{extract, extract_with_form, SignatureForm};
