//! Azure Resource Manager lookups for managed Kubernetes clusters.

use super::{QueryError, ResourceDescriptor, ResourceQuery, ResourceQueryClient};
use crate::Result;
use core::error::Error;
use core::fmt::{Debug, Formatter, Result as FmtResult};
use ohno::{IntoAppError, bail};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

/// Log target for the ARM client
const LOG_TARGET: &str = "arm";

/// Public Azure cloud management endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// `Microsoft.ContainerService` API version used for cluster lookups.
pub const DEFAULT_API_VERSION: &str = "2024-05-01";

/// ARM error codes on a 404 that mean the cluster is not there.
///
/// Anything else, `SubscriptionNotFound` included, says nothing about the cluster.
const ABSENCE_CODES: &[&str] = &["ResourceNotFound", "ResourceGroupNotFound"];

const USER_AGENT: &str = concat!("resource-controls/", env!("CARGO_PKG_VERSION"));

/// Client for the Azure Resource Manager REST API.
///
/// Authentication is the caller's business: the client sends whatever bearer token it was given.
#[derive(Clone)]
pub struct ArmClient {
    http: reqwest::Client,
    endpoint: Url,
    subscription_id: String,
    api_version: String,
    token: String,
}

impl ArmClient {
    pub fn new(endpoint: Url, subscription_id: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        if endpoint.cannot_be_a_base() {
            bail!("ARM endpoint '{endpoint}' is not a usable base URL");
        }

        let subscription_id = subscription_id.into();
        if subscription_id.trim().is_empty() {
            bail!("an Azure subscription id is required");
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .into_app_err("creating the HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            subscription_id,
            api_version: DEFAULT_API_VERSION.to_string(),
            token: token.into(),
        })
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    fn cluster_url(&self, query: &ResourceQuery) -> Result<Url, QueryError> {
        let mut url = self.endpoint.clone();
        _ = url
            .path_segments_mut()
            .map_err(|()| QueryError::Transport(format!("endpoint '{}' cannot carry a path", self.endpoint)))?
            .pop_if_empty()
            .extend([
                "subscriptions",
                self.subscription_id.as_str(),
                "resourceGroups",
                query.resource_group(),
                "providers",
                "Microsoft.ContainerService",
                "managedClusters",
                query.name(),
            ]);
        _ = url.query_pairs_mut().append_pair("api-version", &self.api_version);
        Ok(url)
    }
}

impl Debug for ArmClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ArmClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("subscription_id", &self.subscription_id)
            .field("api_version", &self.api_version)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ResourceQueryClient for ArmClient {
    async fn find(&self, query: &ResourceQuery) -> Result<Option<ResourceDescriptor>, QueryError> {
        let url = self.cluster_url(query)?;
        let start_time = std::time::Instant::now();

        log::debug!(target: LOG_TARGET, "Looking up {query}");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| QueryError::Transport(error_chain(&e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| QueryError::Transport(error_chain(&e)))?;

        log::debug!(
            target: LOG_TARGET,
            "ARM answered HTTP {} for '{}' in {:.3}s",
            status.as_u16(),
            query.name(),
            start_time.elapsed().as_secs_f64()
        );

        match status {
            StatusCode::OK => parse_cluster(&body, query).map(Some),
            StatusCode::NOT_FOUND => match parse_error(&body) {
                Some(detail) if ABSENCE_CODES.contains(&detail.code.as_str()) => Ok(None),
                Some(detail) => Err(QueryError::UnexpectedStatus {
                    status: status.as_u16(),
                    message: detail.to_string(),
                }),
                // Not ARM talking, most likely a proxy or a wrong endpoint
                None => Err(QueryError::MalformedResponse(format!(
                    "HTTP 404 without an ARM error body: {}",
                    error_message(status, &body)
                ))),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(QueryError::Unauthorized {
                status: status.as_u16(),
                message: error_message(status, &body),
            }),
            _ => Err(QueryError::UnexpectedStatus {
                status: status.as_u16(),
                message: error_message(status, &body),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManagedCluster {
    id: String,
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    properties: ManagedClusterProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManagedClusterProperties {
    provisioning_state: Option<String>,
    kubernetes_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: String,
    #[serde(default)]
    message: String,
}

impl core::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.message.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

fn parse_cluster(body: &str, query: &ResourceQuery) -> Result<ResourceDescriptor, QueryError> {
    let cluster: ManagedCluster = serde_json::from_str(body).map_err(|e| QueryError::MalformedResponse(e.to_string()))?;

    if !cluster.name.eq_ignore_ascii_case(query.name()) {
        return Err(QueryError::MalformedResponse(format!(
            "asked for cluster '{}' but the provider described '{}'",
            query.name(),
            cluster.name
        )));
    }

    Ok(ResourceDescriptor {
        id: cluster.id,
        name: cluster.name,
        location: cluster.location,
        provisioning_state: cluster.properties.provisioning_state,
        kubernetes_version: cluster.properties.kubernetes_version,
    })
}

fn parse_error(body: &str) -> Option<ErrorDetail> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Some(detail) = parse_error(body) {
        return detail.to_string();
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        body.to_string()
    }
}

/// Render an error together with its sources, `outer: inner: innermost`.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
