use crate::pattern::IdentifierSet;

/// Container configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Identifier characters the parser accepts
    pub identifiers: IdentifierSet,
    /// Cache extraction and parse outcomes per declaration text
    pub memoize_signatures: bool,
}

impl ContainerConfig {
    pub fn with_identifiers(mut self, identifiers: IdentifierSet) -> Self {
        self.identifiers = identifiers;
        self
    }

    pub fn with_memoized_signatures(mut self, enabled: bool) -> Self {
        self.memoize_signatures = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_config_default() {
        let config = ContainerConfig::default();
        assert_eq!(config.identifiers, IdentifierSet::Extended);
        assert!(!config.memoize_signatures);
    }

    #[test]
    fn test_container_config_builders() {
        let config = ContainerConfig::default()
            .with_identifiers(IdentifierSet::Strict)
            .with_memoized_signatures(true);
        assert_eq!(config.identifiers, IdentifierSet::Strict);
        assert!(config.memoize_signatures);
    }
}
