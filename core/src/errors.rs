//! # CONR ERROR TAXONOMY
//!
//! Only the two recoverable pipeline failures are modelled here. A dependency that was never
//! registered is not an error (it resolves to [`Value::Missing`](crate::types::Value::Missing)),
//! and whatever the invoked callable returns or panics with reaches the caller untouched.

use thiserror::Error;

/// Failure raised while turning a callable's declaration into patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConrError {
    /// Neither the explicit nor the abbreviated declaration shape matched.
    #[error("SIGNATURE ERROR: {code} - {message}")]
    SignatureUnrecognized { code: String, message: String },

    /// The raw parameter text is not empty but no dependency could be parsed from it.
    #[error("PATTERN ERROR: {code} - {message} (offset {offset})")]
    PatternUnparseable {
        code: String,
        message: String,
        offset: usize,
    },
}

impl ConrError {
    pub(crate) fn signature(message: impl Into<String>) -> Self {
        Self::SignatureUnrecognized {
            code: error_codes::SIGNATURE_UNRECOGNIZED.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn pattern(message: impl Into<String>, offset: usize) -> Self {
        Self::PatternUnparseable {
            code: error_codes::PATTERN_UNPARSEABLE.to_string(),
            message: message.into(),
            offset,
        }
    }

    /// Standardised code of this error.
    pub fn code(&self) -> &str {
        match self {
            Self::SignatureUnrecognized { code, .. } | Self::PatternUnparseable { code, .. } => code,
        }
    }
}

/// **ERROR CODES**
///
/// **MANDATE**: Use these standardized codes for consistent error reporting.
pub mod error_codes {
    /// No declaration shape matched the callable's source text.
    pub const SIGNATURE_UNRECOGNIZED: &str = "CONR_SIGNATURE_UNRECOGNIZED";
    /// Parameter text could not be parsed into a single pattern.
    pub const PATTERN_UNPARSEABLE: &str = "CONR_PATTERN_UNPARSEABLE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_error_display() {
        let err = ConrError::signature("no arrow marker in `class Foo {}`");
        assert_eq!(err.code(), error_codes::SIGNATURE_UNRECOGNIZED);
        assert_eq!(
            err.to_string(),
            "SIGNATURE ERROR: CONR_SIGNATURE_UNRECOGNIZED - no arrow marker in `class Foo {}`"
        );
    }

    #[test]
    fn test_pattern_error_carries_offset() {
        match ConrError::pattern("expected identifier", 3) {
            ConrError::PatternUnparseable { code, offset, .. } => {
                assert_eq!(code, "CONR_PATTERN_UNPARSEABLE");
                assert_eq!(offset, 3);
            }
            _ => panic!("Wrong error type"),
        }
    }
}
