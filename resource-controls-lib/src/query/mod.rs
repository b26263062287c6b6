//! Resource lookups against a cloud provider.

mod arm_client;
mod client;
mod query_error;
mod resource_descriptor;
mod resource_query;

pub use arm_client::{ArmClient, DEFAULT_API_VERSION, DEFAULT_ENDPOINT};
pub use client::ResourceQueryClient;
pub use query_error::QueryError;
pub use resource_descriptor::ResourceDescriptor;
pub use resource_query::{KUBERNETES_SERVICE, ResourceQuery};
