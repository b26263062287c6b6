use super::{QueryError, ResourceDescriptor, ResourceQuery};

/// Looks resources up in a cloud provider's inventory.
pub trait ResourceQueryClient {
    /// Find the resource described by `query`.
    ///
    /// Returns `Ok(None)` when the provider confirms the resource does not exist, and an error
    /// when the provider could not be asked or did not give a usable answer.
    fn find(&self, query: &ResourceQuery) -> impl Future<Output = Result<Option<ResourceDescriptor>, QueryError>> + Send;
}
