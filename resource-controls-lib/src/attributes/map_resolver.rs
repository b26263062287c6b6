use super::{AttributeError, AttributeResolver};
use std::collections::HashMap;

/// Attributes held in memory, typically from `--attr NAME=VALUE` arguments.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    values: HashMap<String, String>,
}

impl MapResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        _ = self.values.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl AttributeResolver for MapResolver {
    fn get(&self, name: &str) -> Result<String, AttributeError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| AttributeError::Missing(name.to_string()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_get_present() {
        let resolver = MapResolver::new().with("resource_group", "rg-prod");
        assert_eq!(resolver.get("resource_group").unwrap(), "rg-prod");
    }

    #[test]
    fn test_get_absent_is_missing() {
        let resolver = MapResolver::new();
        assert_eq!(
            resolver.get("cluster_name"),
            Err(AttributeError::Missing("cluster_name".to_string()))
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut resolver: MapResolver = [("cluster_name", "old")].into_iter().collect();
        resolver.insert("cluster_name", "new");
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.get("cluster_name").unwrap(), "new");
    }
}
