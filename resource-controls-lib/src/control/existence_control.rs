use super::{ControlResult, Outcome};
use crate::Result;
use crate::attributes::{AttributeError, AttributeResolver, ClusterAttributes};
use crate::query::{QueryError, ResourceDescriptor, ResourceQuery, ResourceQueryClient};
use core::time::Duration;
use ohno::bail;

/// Log target for control evaluation
const LOG_TARGET: &str = "control";

/// How long a lookup may take before the control gives up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const AKS_CONTROL_ID: &str = "aks-001";
pub const AKS_CONTROL_TITLE: &str = "Validating aks";

/// Asserts that a managed cluster named by attributes exists.
///
/// A run resolves `resource_group` and `cluster_name`, performs exactly one lookup, and turns
/// the answer into a [`ControlResult`]:
///
/// - the resource is found: [`Outcome::Pass`]
/// - the provider says it does not exist: [`Outcome::Fail`]
/// - the lookup fails or times out: [`Outcome::Error`]
///
/// Attribute problems are not outcomes. They are returned as errors and no lookup is attempted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistenceControl {
    id: String,
    title: String,
    impact: f64,
    timeout: Duration,
}

impl ExistenceControl {
    pub fn new(id: impl Into<String>, title: impl Into<String>, impact: f64) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            bail!("a control id is required");
        }

        if !(0.0..=1.0).contains(&impact) {
            bail!("control '{id}' has impact {impact}, which must be between 0.0 and 1.0");
        }

        Ok(Self {
            id,
            title: title.into(),
            impact,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// The control that checks for a managed Kubernetes cluster.
    #[must_use]
    pub fn aks() -> Self {
        Self {
            id: AKS_CONTROL_ID.to_string(),
            title: AKS_CONTROL_TITLE.to_string(),
            impact: 1.0,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn impact(&self) -> f64 {
        self.impact
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the control once.
    pub async fn run<R, C>(&self, resolver: &R, client: &C) -> Result<ControlResult, AttributeError>
    where
        R: AttributeResolver + ?Sized,
        C: ResourceQueryClient,
    {
        let attributes = ClusterAttributes::resolve(resolver)?;
        let query = ResourceQuery::kubernetes_cluster(&attributes);

        log::debug!(target: LOG_TARGET, "{}: querying {query} (timeout {:?})", self.id, self.timeout);

        let answer = tokio::time::timeout(self.timeout, client.find(&query))
            .await
            .unwrap_or(Err(QueryError::Timeout(self.timeout)));

        let result = self.evaluate(&query, answer);
        log::info!(target: LOG_TARGET, "{}: {}: {}", result.control_id(), result.outcome(), result.detail());

        Ok(result)
    }

    /// Turn a lookup answer into a result.
    #[must_use]
    pub fn evaluate(&self, query: &ResourceQuery, answer: Result<Option<ResourceDescriptor>, QueryError>) -> ControlResult {
        let (outcome, detail) = match answer {
            Ok(Some(descriptor)) => (
                Outcome::Pass,
                format!("found {descriptor} in resource group '{}'", query.resource_group()),
            ),
            Ok(None) => (
                Outcome::Fail,
                format!(
                    "managed cluster '{}' was not found in resource group '{}'",
                    query.name(),
                    query.resource_group()
                ),
            ),
            Err(e) => (Outcome::Error, format!("could not look up {query}: {e}")),
        };

        ControlResult::new(self.id.as_str(), self.title.as_str(), self.impact, outcome, detail)
    }
}
