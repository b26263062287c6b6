use super::{AttributeError, AttributeResolver};
use core::fmt::{Debug, Formatter, Result as FmtResult};

/// Consults several resolvers in order; the first one that has a value wins.
///
/// A missing or blank value falls through to the next resolver. Any other error stops the lookup.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn AttributeResolver>>,
}

impl ChainResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, resolver: impl AttributeResolver + 'static) -> Self {
        self.push(resolver);
        self
    }

    pub fn push(&mut self, resolver: impl AttributeResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl Debug for ChainResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ChainResolver").field("resolvers", &self.resolvers.len()).finish()
    }
}

impl AttributeResolver for ChainResolver {
    fn get(&self, name: &str) -> Result<String, AttributeError> {
        for resolver in &self.resolvers {
            match resolver.get(name) {
                Err(AttributeError::Missing(_)) => {}
                Ok(value) if value.trim().is_empty() => {}
                other => return other,
            }
        }

        Err(AttributeError::Missing(name.to_string()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::attributes::{MapResolver, OutputsResolver};

    #[test]
    fn test_first_resolver_wins() {
        let chain = ChainResolver::new()
            .with(MapResolver::new().with("cluster_name", "from-args"))
            .with(MapResolver::new().with("cluster_name", "from-env"));
        assert_eq!(chain.get("cluster_name").unwrap(), "from-args");
    }

    #[test]
    fn test_falls_through_missing() {
        let chain = ChainResolver::new()
            .with(MapResolver::new())
            .with(MapResolver::new().with("resource_group", "rg-prod"));
        assert_eq!(chain.get("resource_group").unwrap(), "rg-prod");
    }

    #[test]
    fn test_blank_value_falls_through() {
        let outputs = OutputsResolver::from_json("test", r#"{"resource_group": {"value": ""}}"#).unwrap();
        let chain = ChainResolver::new()
            .with(outputs)
            .with(MapResolver::new().with("resource_group", "rg-prod"));
        assert_eq!(chain.get("resource_group").unwrap(), "rg-prod");
    }

    #[test]
    fn test_blank_everywhere_is_missing() {
        let chain = ChainResolver::new()
            .with(MapResolver::new().with("cluster_name", ""))
            .with(MapResolver::new().with("cluster_name", "  "));
        assert_eq!(chain.get("cluster_name"), Err(AttributeError::Missing("cluster_name".to_string())));
    }

    #[test]
    fn test_empty_chain_is_missing() {
        let chain = ChainResolver::new();
        assert!(chain.is_empty());
        assert_eq!(chain.get("x"), Err(AttributeError::Missing("x".to_string())));
    }

    #[test]
    fn test_non_missing_error_stops_lookup() {
        let outputs = OutputsResolver::from_json("test", r#"{"cluster_name": 42}"#).unwrap();
        let chain = ChainResolver::new()
            .with(outputs)
            .with(MapResolver::new().with("cluster_name", "fallback"));
        let err = chain.get("cluster_name").unwrap_err();
        assert!(matches!(err, AttributeError::NotAString { .. }));
    }
}
