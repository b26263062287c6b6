use crate::attributes::ClusterAttributes;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// Provider kind for managed Kubernetes clusters.
pub const KUBERNETES_SERVICE: &str = "cloud-kubernetes-service";

/// The coordinates of a single resource lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceQuery {
    provider: &'static str,
    resource_group: String,
    name: String,
}

impl ResourceQuery {
    #[must_use]
    pub fn new(provider: &'static str, resource_group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider,
            resource_group: resource_group.into(),
            name: name.into(),
        }
    }

    /// Query for the managed cluster named by `attributes`.
    #[must_use]
    pub fn kubernetes_cluster(attributes: &ClusterAttributes) -> Self {
        Self::new(KUBERNETES_SERVICE, attributes.resource_group(), attributes.cluster_name())
    }

    #[must_use]
    pub const fn provider(&self) -> &'static str {
        self.provider
    }

    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for ResourceQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} '{}' in resource group '{}'", self.provider, self.name, self.resource_group)
    }
}
