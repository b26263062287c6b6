//! Named attribute sources consumed by controls.
//!
//! Attributes are plain string values supplied from outside the control: Terraform outputs,
//! environment variables, or values passed on the command line. Controls never look attributes
//! up by name themselves; they resolve a typed attribute set such as [`ClusterAttributes`] up front.

mod attribute_error;
mod chain_resolver;
mod cluster_attributes;
mod env_resolver;
mod map_resolver;
mod outputs_resolver;
mod resolver;

pub use attribute_error::AttributeError;
pub use chain_resolver::ChainResolver;
pub use cluster_attributes::{CLUSTER_NAME, ClusterAttributes, RESOURCE_GROUP};
pub use env_resolver::{DEFAULT_ENV_PREFIX, EnvResolver};
pub use map_resolver::MapResolver;
pub use outputs_resolver::OutputsResolver;
pub use resolver::AttributeResolver;
