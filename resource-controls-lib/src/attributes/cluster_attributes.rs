use super::{AttributeError, AttributeResolver};

/// Attribute naming the resource group that owns the cluster.
pub const RESOURCE_GROUP: &str = "resource_group";

/// Attribute naming the managed cluster.
pub const CLUSTER_NAME: &str = "cluster_name";

/// The resolved coordinates of a managed cluster.
///
/// Both values are guaranteed non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterAttributes {
    resource_group: String,
    cluster_name: String,
}

impl ClusterAttributes {
    /// Build from explicit values. Blank values are reported as missing.
    pub fn new(resource_group: impl AsRef<str>, cluster_name: impl AsRef<str>) -> Result<Self, AttributeError> {
        Ok(Self {
            resource_group: non_blank(RESOURCE_GROUP, resource_group.as_ref())?,
            cluster_name: non_blank(CLUSTER_NAME, cluster_name.as_ref())?,
        })
    }

    /// Resolve `resource_group` and then `cluster_name`, stopping at the first failure.
    pub fn resolve<R: AttributeResolver + ?Sized>(resolver: &R) -> Result<Self, AttributeError> {
        let resource_group = resolver.get(RESOURCE_GROUP)?;
        let resource_group = non_blank(RESOURCE_GROUP, &resource_group)?;

        let cluster_name = resolver.get(CLUSTER_NAME)?;
        let cluster_name = non_blank(CLUSTER_NAME, &cluster_name)?;

        Ok(Self {
            resource_group,
            cluster_name,
        })
    }

    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    #[must_use]
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }
}

fn non_blank(name: &str, value: &str) -> Result<String, AttributeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AttributeError::Missing(name.to_string()));
    }
    Ok(value.to_string())
}
